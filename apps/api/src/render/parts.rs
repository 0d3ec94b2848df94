//! Building blocks shared by the three templates.

use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategory,
};
use crate::render::tree::{Align, Density, Element, Entry, HeadingStyle, Section, SectionKind};

pub const NAME_PLACEHOLDER: &str = "Your Name";

pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn display_name(doc: &ResumeDocument) -> String {
    non_empty(&doc.personal.name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string())
}

/// Non-empty contact values: email, phone, location, LinkedIn, GitHub.
pub fn contact_items(doc: &ResumeDocument) -> Vec<String> {
    [
        &doc.personal.email,
        &doc.personal.phone,
        &doc.personal.location,
        &doc.links.linkedin,
        &doc.links.github,
    ]
    .into_iter()
    .filter_map(|v| non_empty(v))
    .collect()
}

/// Non-empty skill categories in display order, as `(label, skills)`.
pub fn skill_rows(doc: &ResumeDocument) -> Vec<(&'static str, &[String])> {
    SkillCategory::DISPLAY_ORDER
        .iter()
        .map(|c| (c.label(), doc.skills.category(*c)))
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
}

/// Returns `None` for empty element lists, so empty sections are never emitted.
pub fn section(
    kind: SectionKind,
    title: &str,
    heading: HeadingStyle,
    density: Density,
    elements: Vec<Element>,
) -> Option<Section> {
    if elements.is_empty() {
        return None;
    }
    Some(Section {
        kind,
        title: title.to_string(),
        heading,
        density,
        elements,
    })
}

pub fn heading(color: &str, rule_color: Option<&str>, align: Align) -> HeadingStyle {
    HeadingStyle {
        color: Some(color.to_string()),
        rule_color: rule_color.map(str::to_string),
        align,
    }
}

pub fn summary_elements(doc: &ResumeDocument) -> Vec<Element> {
    non_empty(&doc.summary)
        .map(|text| Element::Paragraph { text })
        .into_iter()
        .collect()
}

pub fn experience_entry(item: &ExperienceEntry) -> Entry {
    Entry {
        heading: item.role.clone(),
        subheading: non_empty(&item.company),
        meta: non_empty(&item.duration),
        body: non_empty(&item.description),
        ..Default::default()
    }
}

pub fn education_entry(item: &EducationEntry) -> Entry {
    Entry {
        heading: item.institution.clone(),
        subheading: non_empty(&item.degree),
        meta: non_empty(&item.year),
        ..Default::default()
    }
}

pub fn project_entry(item: &ProjectEntry) -> Entry {
    Entry {
        heading: item.title.clone(),
        body: non_empty(&item.description),
        ..Default::default()
    }
}

pub fn entries<T>(items: &[T], build: impl Fn(&T) -> Entry) -> Vec<Element> {
    items.iter().map(|item| Element::Entry(build(item))).collect()
}
