//! Modern: a colored sidebar (name, contact, skills, education) next to a main
//! column (summary, experience, projects).

use crate::models::preferences::TemplateId;
use crate::models::resume::ResumeDocument;
use crate::render::parts;
use crate::render::tree::{
    Align, Arrangement, Block, BoxStyle, ContactLayout, Density, Element, Entry, HeadingStyle,
    Region, RegionRole, RenderedLayout, SectionKind,
};

const SIDEBAR_PERCENT: u8 = 30;
const SIDEBAR_TEXT: &str = "#ffffff";
const SIDEBAR_RULE: &str = "rgba(255, 255, 255, 0.3)";

pub fn render(doc: &ResumeDocument, accent: &str) -> RenderedLayout {
    RenderedLayout {
        template: TemplateId::Modern,
        accent_color: accent.to_string(),
        arrangement: Arrangement::TwoColumn {
            sidebar_percent: SIDEBAR_PERCENT,
        },
        regions: vec![sidebar(doc, accent), main_column(doc, accent)],
    }
}

fn sidebar(doc: &ResumeDocument, accent: &str) -> Region {
    // Sidebar headings inherit the white text; the accent is the background.
    let heading = || HeadingStyle {
        color: None,
        rule_color: Some(SIDEBAR_RULE.to_string()),
        align: Align::Left,
    };

    let mut blocks = vec![Block::Title {
        text: parts::display_name(doc),
        color: None,
    }];
    let contact = parts::contact_items(doc);
    if !contact.is_empty() {
        blocks.push(Block::Contact {
            items: contact,
            layout: ContactLayout::Stacked,
            align: Align::Left,
        });
    }

    let skills = parts::skill_rows(doc)
        .into_iter()
        .map(|(label, skills)| Element::TagGroup {
            label: label.to_string(),
            tags: skills.to_vec(),
        })
        .collect();

    blocks.extend(
        [
            parts::section(SectionKind::Skills, "Skills", heading(), Density::Regular, skills),
            parts::section(
                SectionKind::Education,
                "Education",
                heading(),
                Density::Regular,
                parts::entries(&doc.education, parts::education_entry),
            ),
        ]
        .into_iter()
        .flatten()
        .map(Block::Section),
    );

    Region {
        role: RegionRole::Sidebar,
        align: Align::Left,
        style: BoxStyle {
            background: Some(accent.to_string()),
            text_color: Some(SIDEBAR_TEXT.to_string()),
            ..Default::default()
        },
        blocks,
    }
}

fn main_column(doc: &ResumeDocument, accent: &str) -> Region {
    let heading = || parts::heading(accent, Some(accent), Align::Left);

    let projects = parts::entries(&doc.projects, |p| {
        let mut badges = Vec::new();
        if !p.live_url.is_empty() {
            badges.push("Live".to_string());
        }
        if !p.github_url.is_empty() {
            badges.push("GitHub".to_string());
        }
        Entry {
            tags: p.tech_stack.clone(),
            badges,
            ..parts::project_entry(p)
        }
    });

    let sections = [
        parts::section(
            SectionKind::Summary,
            "Professional Profile",
            heading(),
            Density::Regular,
            parts::summary_elements(doc),
        ),
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
    ];

    Region {
        role: RegionRole::Main,
        align: Align::Left,
        style: BoxStyle::default(),
        blocks: sections.into_iter().flatten().map(Block::Section).collect(),
    }
}
