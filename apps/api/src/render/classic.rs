//! Classic: single column, centered header, sections stacked as
//! summary, skills, experience, projects, education.

use crate::models::preferences::TemplateId;
use crate::models::resume::ResumeDocument;
use crate::render::parts::{self, non_empty};
use crate::render::tree::{
    Align, Arrangement, Block, BoxStyle, ContactLayout, Density, Element, Entry, Region,
    RegionRole, RenderedLayout, SectionKind,
};

/// Neutral rule under section headings; the accent goes on the heading text.
const SECTION_RULE: &str = "rgb(209 213 219)";

pub fn render(doc: &ResumeDocument, accent: &str) -> RenderedLayout {
    let heading = || parts::heading(accent, Some(SECTION_RULE), Align::Center);

    let mut header_blocks = vec![Block::Title {
        text: parts::display_name(doc),
        color: Some(accent.to_string()),
    }];
    let contact = parts::contact_items(doc);
    if !contact.is_empty() {
        header_blocks.push(Block::Contact {
            items: contact,
            layout: ContactLayout::Inline,
            align: Align::Center,
        });
    }

    let skills = parts::skill_rows(doc)
        .into_iter()
        .map(|(label, skills)| Element::LabelValue {
            label: label.to_string(),
            value: skills.join(", "),
        })
        .collect();

    let projects = parts::entries(&doc.projects, |p| Entry {
        badges: non_empty(&p.live_url).into_iter().collect(),
        detail: (!p.tech_stack.is_empty()).then(|| format!("Stack: {}", p.tech_stack.join(", "))),
        ..parts::project_entry(p)
    });

    let sections = [
        parts::section(
            SectionKind::Summary,
            "Summary",
            heading(),
            Density::Regular,
            parts::summary_elements(doc),
        ),
        parts::section(SectionKind::Skills, "Skills", heading(), Density::Regular, skills),
        parts::section(
            SectionKind::Experience,
            "Experience",
            heading(),
            Density::Regular,
            parts::entries(&doc.experience, parts::experience_entry),
        ),
        parts::section(
            SectionKind::Projects,
            "Projects",
            heading(),
            Density::Regular,
            projects,
        ),
        parts::section(
            SectionKind::Education,
            "Education",
            heading(),
            Density::Regular,
            parts::entries(&doc.education, parts::education_entry),
        ),
    ];

    RenderedLayout {
        template: TemplateId::Classic,
        accent_color: accent.to_string(),
        arrangement: Arrangement::SingleColumn,
        regions: vec![
            Region {
                role: RegionRole::Header,
                align: Align::Center,
                style: BoxStyle {
                    border_color: Some(accent.to_string()),
                    ..Default::default()
                },
                blocks: header_blocks,
            },
            Region {
                role: RegionRole::Body,
                align: Align::Left,
                style: BoxStyle::default(),
                blocks: sections.into_iter().flatten().map(Block::Section).collect(),
            },
        ],
    }
}
