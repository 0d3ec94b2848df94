//! Pure document operations. Every function takes the current document by
//! reference and returns a new value; the caller owns the single live copy.

use serde_json::Value;

use crate::document::DocumentError;
use crate::models::resume::{
    dedup_tags, EducationEntry, ExperienceEntry, LinkField, Links, ListKey, Personal,
    PersonalField, ProjectEntry, ResumeDocument, SectionKey, SkillCategory, Skills,
};

// ────────────────────────────────────────────────────────────────────────────
// Typed payloads
// ────────────────────────────────────────────────────────────────────────────

/// A full replacement value for one top-level field.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Personal(Personal),
    Summary(String),
    Education(Vec<EducationEntry>),
    Experience(Vec<ExperienceEntry>),
    Projects(Vec<ProjectEntry>),
    Skills(Skills),
    Links(Links),
}

impl Section {
    pub fn from_value(key: SectionKey, value: Value) -> Result<Self, DocumentError> {
        let section = match key {
            SectionKey::Personal => Section::Personal(serde_json::from_value(value)?),
            SectionKey::Summary => Section::Summary(serde_json::from_value(value)?),
            SectionKey::Education => Section::Education(serde_json::from_value(value)?),
            SectionKey::Experience => Section::Experience(serde_json::from_value(value)?),
            SectionKey::Projects => Section::Projects(serde_json::from_value(value)?),
            SectionKey::Skills => Section::Skills(serde_json::from_value(value)?),
            SectionKey::Links => Section::Links(serde_json::from_value(value)?),
        };
        Ok(section)
    }
}

/// One key inside a nested object field. Key sets are closed.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedField {
    Personal(PersonalField, String),
    Link(LinkField, String),
    Skills(SkillCategory, Vec<String>),
}

impl NestedField {
    /// Resolves `section`/`field` path segments plus a JSON value.
    /// Only `personal`, `links` and `skills` have nested keys.
    pub fn parse(section: SectionKey, field: &str, value: Value) -> Result<Self, DocumentError> {
        match section {
            SectionKey::Personal => Ok(NestedField::Personal(
                field.parse()?,
                serde_json::from_value(value)?,
            )),
            SectionKey::Links => Ok(NestedField::Link(
                field.parse()?,
                serde_json::from_value(value)?,
            )),
            SectionKey::Skills => Ok(NestedField::Skills(
                field.parse()?,
                serde_json::from_value(value)?,
            )),
            other => Err(DocumentError::NotNested(other)),
        }
    }
}

/// An entry destined for one of the document's ordered lists.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Education(EducationEntry),
    Experience(ExperienceEntry),
    Project(ProjectEntry),
}

impl ListItem {
    pub fn list(&self) -> ListKey {
        match self {
            ListItem::Education(_) => ListKey::Education,
            ListItem::Experience(_) => ListKey::Experience,
            ListItem::Project(_) => ListKey::Projects,
        }
    }

    pub fn from_value(list: ListKey, value: Value) -> Result<Self, DocumentError> {
        let item = match list {
            ListKey::Education => ListItem::Education(serde_json::from_value(value)?),
            ListKey::Experience => ListItem::Experience(serde_json::from_value(value)?),
            ListKey::Projects => ListItem::Project(serde_json::from_value(value)?),
        };
        Ok(item)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Operations from the store contract
// ────────────────────────────────────────────────────────────────────────────

/// Replaces a top-level field wholesale.
pub fn replace_section(doc: &ResumeDocument, section: Section) -> ResumeDocument {
    let mut next = doc.clone();
    match section {
        Section::Personal(personal) => next.personal = personal,
        Section::Summary(summary) => next.summary = summary,
        Section::Education(education) => next.education = education,
        Section::Experience(experience) => next.experience = experience,
        Section::Projects(projects) => {
            next.projects = projects.into_iter().map(sanitize_project).collect();
        }
        Section::Skills(skills) => next.skills = skills.deduplicated(),
        Section::Links(links) => next.links = links,
    }
    next
}

/// Replaces one key of `personal`, `links` or `skills`, keeping its siblings.
pub fn merge_nested_field(doc: &ResumeDocument, field: NestedField) -> ResumeDocument {
    let mut next = doc.clone();
    match field {
        NestedField::Personal(key, value) => {
            let slot = match key {
                PersonalField::Name => &mut next.personal.name,
                PersonalField::Email => &mut next.personal.email,
                PersonalField::Phone => &mut next.personal.phone,
                PersonalField::Location => &mut next.personal.location,
            };
            *slot = value;
        }
        NestedField::Link(key, value) => {
            let slot = match key {
                LinkField::Github => &mut next.links.github,
                LinkField::Linkedin => &mut next.links.linkedin,
            };
            *slot = value;
        }
        NestedField::Skills(category, values) => {
            *next.skills.category_mut(category) = dedup_tags(values);
        }
    }
    next
}

pub fn append_list_item(doc: &ResumeDocument, item: ListItem) -> ResumeDocument {
    let mut next = doc.clone();
    match item {
        ListItem::Education(entry) => next.education.push(entry),
        ListItem::Experience(entry) => next.experience.push(entry),
        ListItem::Project(entry) => next.projects.push(sanitize_project(entry)),
    }
    next
}

/// Removes the entry at `index`. Out of range returns the input unchanged.
pub fn remove_list_item(doc: &ResumeDocument, list: ListKey, index: usize) -> ResumeDocument {
    if index >= doc.list_len(list) {
        return doc.clone();
    }
    let mut next = doc.clone();
    match list {
        ListKey::Education => {
            next.education.remove(index);
        }
        ListKey::Experience => {
            next.experience.remove(index);
        }
        ListKey::Projects => {
            next.projects.remove(index);
        }
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Editor operations
// ────────────────────────────────────────────────────────────────────────────

/// Replaces the entry at `index` in the item's list. Out of range is a no-op.
/// A project sent without an id keeps the id of the entry it replaces.
pub fn update_list_item(doc: &ResumeDocument, index: usize, item: ListItem) -> ResumeDocument {
    if index >= doc.list_len(item.list()) {
        return doc.clone();
    }
    let mut next = doc.clone();
    match item {
        ListItem::Education(entry) => next.education[index] = entry,
        ListItem::Experience(entry) => next.experience[index] = entry,
        ListItem::Project(mut entry) => {
            if entry.id.is_empty() {
                entry.id = next.projects[index].id.clone();
            }
            next.projects[index] = sanitize_project(entry);
        }
    }
    next
}

/// Tag-input semantics: trims, ignores empty input and existing entries.
pub fn add_skill(doc: &ResumeDocument, category: SkillCategory, skill: &str) -> ResumeDocument {
    let mut next = doc.clone();
    push_tag(next.skills.category_mut(category), skill);
    next
}

pub fn remove_skill(
    doc: &ResumeDocument,
    category: SkillCategory,
    index: usize,
) -> ResumeDocument {
    if index >= doc.skills.category(category).len() {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.skills.category_mut(category).remove(index);
    next
}

pub fn add_tech_tag(doc: &ResumeDocument, project_index: usize, tag: &str) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(project) = next.projects.get_mut(project_index) {
        push_tag(&mut project.tech_stack, tag);
    }
    next
}

pub fn remove_tech_tag(
    doc: &ResumeDocument,
    project_index: usize,
    tag_index: usize,
) -> ResumeDocument {
    let in_range = doc
        .projects
        .get(project_index)
        .is_some_and(|p| tag_index < p.tech_stack.len());
    if !in_range {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.projects[project_index].tech_stack.remove(tag_index);
    next
}

/// Static skill suggestions merged by the "suggest skills" action.
pub const SUGGESTED_SKILLS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Technical,
        &["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"],
    ),
    (SkillCategory::Soft, &["Team Leadership", "Problem Solving"]),
    (SkillCategory::Tools, &["Git", "Docker", "AWS"]),
];

/// Appends every suggested skill that is not already present.
pub fn merge_suggested_skills(doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    for (category, suggestions) in SUGGESTED_SKILLS {
        let tags = next.skills.category_mut(*category);
        for suggestion in suggestions.iter() {
            push_tag(tags, suggestion);
        }
    }
    next
}

fn push_tag(tags: &mut Vec<String>, tag: &str) {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return;
    }
    tags.push(tag.to_string());
}

pub(crate) fn sanitize_project(mut project: ProjectEntry) -> ProjectEntry {
    project.tech_stack = dedup_tags(project.tech_stack);
    project
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc_with_education(n: usize) -> ResumeDocument {
        ResumeDocument {
            education: (0..n)
                .map(|i| EducationEntry {
                    institution: format!("School {i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_section_leaves_input_untouched() {
        let doc = ResumeDocument::default();
        let next = replace_section(&doc, Section::Summary("Built things".into()));
        assert_eq!(next.summary, "Built things");
        assert_eq!(doc.summary, "");
    }

    #[test]
    fn test_replace_skills_collapses_duplicates() {
        let skills = Skills {
            technical: vec!["Rust".into(), "Rust".into()],
            ..Default::default()
        };
        let next = replace_section(&ResumeDocument::default(), Section::Skills(skills));
        assert_eq!(next.skills.technical, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_section_from_value_rejects_wrong_shape() {
        assert!(Section::from_value(SectionKey::Summary, json!({"a": 1})).is_err());
        let section = Section::from_value(SectionKey::Links, json!({"github": "gh/x"})).unwrap();
        assert_eq!(
            section,
            Section::Links(Links {
                github: "gh/x".into(),
                linkedin: String::new()
            })
        );
    }

    #[test]
    fn test_merge_nested_preserves_siblings() {
        let doc = ResumeDocument {
            personal: Personal {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let next = merge_nested_field(
            &doc,
            NestedField::Personal(PersonalField::Phone, "555".into()),
        );
        assert_eq!(next.personal.name, "Ada");
        assert_eq!(next.personal.email, "ada@example.com");
        assert_eq!(next.personal.phone, "555");
    }

    #[test]
    fn test_nested_field_rejects_unknown_keys() {
        assert!(NestedField::parse(SectionKey::Personal, "nickname", json!("x")).is_err());
        assert!(NestedField::parse(SectionKey::Summary, "text", json!("x")).is_err());
        let field = NestedField::parse(SectionKey::Skills, "soft", json!(["A", "A"])).unwrap();
        let next = merge_nested_field(&ResumeDocument::default(), field);
        assert_eq!(next.skills.soft, vec!["A".to_string()]);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let doc = doc_with_education(1);
        let next = append_list_item(
            &doc,
            ListItem::Education(EducationEntry {
                institution: "Second".into(),
                ..Default::default()
            }),
        );
        assert_eq!(next.education.len(), 2);
        assert_eq!(next.education[1].institution, "Second");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let doc = doc_with_education(2);
        assert_eq!(remove_list_item(&doc, ListKey::Education, 2), doc);
        assert_eq!(remove_list_item(&doc, ListKey::Projects, 0), doc);
    }

    #[test]
    fn test_remove_in_range() {
        let doc = doc_with_education(3);
        let next = remove_list_item(&doc, ListKey::Education, 1);
        let names: Vec<_> = next.education.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(names, vec!["School 0", "School 2"]);
    }

    #[test]
    fn test_update_list_item() {
        let doc = doc_with_education(2);
        let item = ListItem::Education(EducationEntry {
            institution: "MIT".into(),
            ..Default::default()
        });
        let next = update_list_item(&doc, 1, item.clone());
        assert_eq!(next.education[1].institution, "MIT");
        assert_eq!(update_list_item(&doc, 5, item), doc);
    }

    #[test]
    fn test_update_project_keeps_existing_id() {
        let doc = append_list_item(
            &ResumeDocument::default(),
            ListItem::Project(ProjectEntry {
                id: "p-7".into(),
                title: "Draft".into(),
                ..Default::default()
            }),
        );

        let renamed = ListItem::Project(ProjectEntry {
            title: "Ledger".into(),
            ..Default::default()
        });
        let next = update_list_item(&doc, 0, renamed);
        assert_eq!(next.projects[0].id, "p-7");
        assert_eq!(next.projects[0].title, "Ledger");

        let reassigned = ListItem::Project(ProjectEntry {
            id: "p-8".into(),
            ..Default::default()
        });
        assert_eq!(update_list_item(&doc, 0, reassigned).projects[0].id, "p-8");
    }

    #[test]
    fn test_add_skill_trims_and_ignores_duplicates() {
        let doc = add_skill(&ResumeDocument::default(), SkillCategory::Technical, "  Rust ");
        let doc = add_skill(&doc, SkillCategory::Technical, "Rust");
        let doc = add_skill(&doc, SkillCategory::Technical, "   ");
        assert_eq!(doc.skills.technical, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_remove_skill_out_of_range() {
        let doc = add_skill(&ResumeDocument::default(), SkillCategory::Soft, "Empathy");
        assert_eq!(remove_skill(&doc, SkillCategory::Soft, 3), doc);
        assert!(remove_skill(&doc, SkillCategory::Soft, 0).skills.soft.is_empty());
    }

    #[test]
    fn test_tech_tags() {
        let doc = append_list_item(
            &ResumeDocument::default(),
            ListItem::Project(ProjectEntry {
                tech_stack: vec!["Rust".into(), "Rust".into()],
                ..Default::default()
            }),
        );
        assert_eq!(doc.projects[0].tech_stack, vec!["Rust".to_string()]);

        let doc = add_tech_tag(&doc, 0, "Axum");
        let doc = add_tech_tag(&doc, 0, "Rust");
        assert_eq!(doc.projects[0].tech_stack, vec!["Rust".to_string(), "Axum".to_string()]);

        assert_eq!(add_tech_tag(&doc, 9, "Go"), doc);
        assert_eq!(remove_tech_tag(&doc, 0, 7), doc);
        assert_eq!(
            remove_tech_tag(&doc, 0, 0).projects[0].tech_stack,
            vec!["Axum".to_string()]
        );
    }

    #[test]
    fn test_suggested_skills_merge_unique() {
        let doc = add_skill(&ResumeDocument::default(), SkillCategory::Technical, "React");
        let next = merge_suggested_skills(&doc);
        assert_eq!(
            next.skills.technical,
            vec!["React", "TypeScript", "Node.js", "PostgreSQL", "GraphQL"]
        );
        assert_eq!(next.skills.tools, vec!["Git", "Docker", "AWS"]);
        assert_eq!(merge_suggested_skills(&next), next);
    }
}
