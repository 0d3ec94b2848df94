//! Minimal: single column, name and location on the left of the header with a
//! right-aligned contact block, skills as a label/value grid, condensed entries.

use crate::models::preferences::TemplateId;
use crate::models::resume::ResumeDocument;
use crate::render::parts::{self, non_empty};
use crate::render::tree::{
    Align, Arrangement, Block, BoxStyle, ContactLayout, Density, Element, Entry, Region,
    RegionRole, RenderedLayout, SectionKind,
};

pub fn render(doc: &ResumeDocument, accent: &str) -> RenderedLayout {
    RenderedLayout {
        template: TemplateId::Minimal,
        accent_color: accent.to_string(),
        arrangement: Arrangement::SingleColumn,
        regions: vec![header(doc, accent), body(doc, accent)],
    }
}

fn header(doc: &ResumeDocument, accent: &str) -> Region {
    let mut identity = vec![Block::Title {
        text: parts::display_name(doc),
        color: Some(accent.to_string()),
    }];
    if let Some(location) = non_empty(&doc.personal.location) {
        identity.push(Block::Text { text: location });
    }

    let mut blocks = vec![Block::Group {
        align: Align::Left,
        blocks: identity,
    }];

    // Location already sits under the name; GitHub is left out of this header.
    let contact: Vec<String> = [&doc.personal.email, &doc.personal.phone, &doc.links.linkedin]
        .into_iter()
        .filter_map(|v| non_empty(v))
        .collect();
    if !contact.is_empty() {
        blocks.push(Block::Group {
            align: Align::Right,
            blocks: vec![Block::Contact {
                items: contact,
                layout: ContactLayout::Stacked,
                align: Align::Right,
            }],
        });
    }

    Region {
        role: RegionRole::Header,
        align: Align::Left,
        style: BoxStyle {
            border_color: Some(accent.to_string()),
            ..Default::default()
        },
        blocks,
    }
}

fn body(doc: &ResumeDocument, accent: &str) -> Region {
    let heading = || parts::heading(accent, None, Align::Left);

    let skills = parts::skill_rows(doc)
        .into_iter()
        .map(|(label, skills)| Element::LabelValue {
            label: label.to_string(),
            value: skills.join(", "),
        })
        .collect();

    let projects = parts::entries(&doc.projects, |p| Entry {
        badges: if p.live_url.is_empty() {
            vec![]
        } else {
            vec!["LIVE".to_string()]
        },
        detail: (!p.tech_stack.is_empty()).then(|| p.tech_stack.join(" • ")),
        ..parts::project_entry(p)
    });

    let sections = [
        parts::section(
            SectionKind::Summary,
            "Summary",
            heading(),
            Density::Condensed,
            parts::summary_elements(doc),
        ),
        parts::section(SectionKind::Skills, "Skills", heading(), Density::Condensed, skills),
        parts::section(
            SectionKind::Experience,
            "Experience",
            heading(),
            Density::Condensed,
            parts::entries(&doc.experience, parts::experience_entry),
        ),
        parts::section(
            SectionKind::Projects,
            "Projects",
            heading(),
            Density::Condensed,
            projects,
        ),
        parts::section(
            SectionKind::Education,
            "Education",
            heading(),
            Density::Condensed,
            parts::entries(&doc.education, parts::education_entry),
        ),
    ];

    Region {
        role: RegionRole::Body,
        align: Align::Left,
        style: BoxStyle::default(),
        blocks: sections.into_iter().flatten().map(Block::Section).collect(),
    }
}
