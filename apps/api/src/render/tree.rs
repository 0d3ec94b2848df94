//! The abstract visual tree every template produces.
//!
//! Content (strings taken from the document) and presentation (colors,
//! alignment, density) live in separate fields, so the accent color can never
//! leak into text.

use serde::{Deserialize, Serialize};

use crate::models::preferences::TemplateId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLayout {
    pub template: TemplateId,
    pub accent_color: String,
    pub arrangement: Arrangement,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Arrangement {
    SingleColumn,
    /// Sidebar followed by main content; `sidebar_percent` is the sidebar's width share.
    TwoColumn { sidebar_percent: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionRole {
    Header,
    Body,
    Sidebar,
    Main,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    #[default]
    Regular,
    Condensed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub role: RegionRole,
    pub align: Align,
    pub style: BoxStyle,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactLayout {
    Inline,
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
        color: Option<String>,
    },
    Text {
        text: String,
    },
    Contact {
        items: Vec<String>,
        layout: ContactLayout,
        align: Align,
    },
    Group {
        align: Align,
        blocks: Vec<Block>,
    },
    Section(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub color: Option<String>,
    pub rule_color: Option<String>,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub heading: HeadingStyle,
    pub density: Density,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub heading: String,
    pub subheading: Option<String>,
    pub meta: Option<String>,
    pub detail: Option<String>,
    pub tags: Vec<String>,
    pub badges: Vec<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Paragraph { text: String },
    Entry(Entry),
    LabelValue { label: String, value: String },
    TagGroup { label: String, tags: Vec<String> },
}

// ────────────────────────────────────────────────────────────────────────────
// Inspection helpers
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
impl RenderedLayout {
    /// Section kinds in visual order: regions first to last, blocks top to bottom.
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections().map(|s| s.kind).collect()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().find(|s| s.kind == kind)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        let mut out = Vec::new();
        for region in &self.regions {
            collect_sections(&region.blocks, &mut out);
        }
        out.into_iter()
    }

    /// The rendered name heading.
    pub fn title(&self) -> Option<&str> {
        self.regions
            .iter()
            .find_map(|r| find_title(&r.blocks))
    }

    /// All document-derived text in visual order, with no styling attached.
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        for region in &self.regions {
            collect_text(&region.blocks, &mut out);
        }
        out
    }

    pub fn region(&self, role: RegionRole) -> Option<&Region> {
        self.regions.iter().find(|r| r.role == role)
    }
}

#[cfg(test)]
fn collect_sections<'a>(blocks: &'a [Block], out: &mut Vec<&'a Section>) {
    for block in blocks {
        match block {
            Block::Section(section) => out.push(section),
            Block::Group { blocks, .. } => collect_sections(blocks, out),
            _ => {}
        }
    }
}

#[cfg(test)]
fn find_title(blocks: &[Block]) -> Option<&str> {
    blocks.iter().find_map(|block| match block {
        Block::Title { text, .. } => Some(text.as_str()),
        Block::Group { blocks, .. } => find_title(blocks),
        _ => None,
    })
}

#[cfg(test)]
fn collect_text(blocks: &[Block], out: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Title { text, .. } | Block::Text { text } => out.push(text.clone()),
            Block::Contact { items, .. } => out.extend(items.iter().cloned()),
            Block::Group { blocks, .. } => collect_text(blocks, out),
            Block::Section(section) => {
                out.push(section.title.clone());
                for element in &section.elements {
                    element.collect_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
impl Element {
    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Element::Paragraph { text } => out.push(text.clone()),
            Element::LabelValue { label, value } => {
                out.push(label.clone());
                out.push(value.clone());
            }
            Element::TagGroup { label, tags } => {
                out.push(label.clone());
                out.extend(tags.iter().cloned());
            }
            Element::Entry(entry) => {
                out.push(entry.heading.clone());
                out.extend(
                    [&entry.subheading, &entry.meta, &entry.detail]
                        .into_iter()
                        .flatten()
                        .cloned(),
                );
                out.extend(entry.tags.iter().cloned());
                out.extend(entry.badges.iter().cloned());
                out.extend(entry.body.iter().cloned());
            }
        }
    }
}
