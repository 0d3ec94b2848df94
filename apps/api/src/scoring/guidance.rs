//! Advisory checks shown next to individual entries. Never blocking.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

/// Verbs an entry description is expected to open with (case-sensitive prefix).
const OPENING_VERBS: &[&str] = &[
    "Built",
    "Developed",
    "Designed",
    "Implemented",
    "Led",
    "Improved",
    "Created",
    "Optimized",
    "Automated",
    "Managed",
    "Engineered",
    "Launched",
];

pub const MISSING_ACTION_VERB: &str = "Start with a strong action verb (e.g., Built, Led).";
pub const MISSING_MEASURABLE_IMPACT: &str = "Add measurable impact (numbers, %, $).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGuidance {
    pub index: usize,
    pub message: String,
}

/// Returns at most one hint for a description: opening verb first, then impact.
pub fn bullet_guidance(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let trimmed = text.trim();
    if !OPENING_VERBS.iter().any(|verb| trimmed.starts_with(verb)) {
        return Some(MISSING_ACTION_VERB);
    }
    if !has_measurable_impact(text) {
        return Some(MISSING_MEASURABLE_IMPACT);
    }
    None
}

/// A digit followed by `%`, `x` or `k` (case-insensitive), or `$` followed by a digit.
fn has_measurable_impact(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).any(|pair| match (pair[0], pair[1]) {
        (d, unit) if d.is_ascii_digit() => matches!(unit, '%' | 'x' | 'X' | 'k' | 'K'),
        ('$', d) => d.is_ascii_digit(),
        _ => false,
    })
}

pub fn experience_guidance(doc: &ResumeDocument) -> Vec<EntryGuidance> {
    collect_guidance(doc.experience.iter().map(|e| e.description.as_str()))
}

pub fn project_guidance(doc: &ResumeDocument) -> Vec<EntryGuidance> {
    collect_guidance(doc.projects.iter().map(|p| p.description.as_str()))
}

fn collect_guidance<'a>(descriptions: impl Iterator<Item = &'a str>) -> Vec<EntryGuidance> {
    descriptions
        .enumerate()
        .filter_map(|(index, text)| {
            bullet_guidance(text).map(|message| EntryGuidance {
                index,
                message: message.to_string(),
            })
        })
        .collect()
}

/// A résumé is complete enough to export once it names someone and shows
/// some work: an experience entry or a project.
pub fn is_complete(doc: &ResumeDocument) -> bool {
    !doc.personal.name.is_empty() && (!doc.experience.is_empty() || !doc.projects.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, Personal, ProjectEntry};

    #[test]
    fn test_empty_text_has_no_guidance() {
        assert_eq!(bullet_guidance(""), None);
    }

    #[test]
    fn test_missing_verb_reported_first() {
        assert_eq!(
            bullet_guidance("Worked on payments"),
            Some(MISSING_ACTION_VERB)
        );
        assert_eq!(bullet_guidance("led things by 50%"), Some(MISSING_ACTION_VERB));
    }

    #[test]
    fn test_missing_impact() {
        assert_eq!(
            bullet_guidance("Built a dashboard"),
            Some(MISSING_MEASURABLE_IMPACT)
        );
    }

    #[test]
    fn test_impact_patterns() {
        assert_eq!(bullet_guidance("Improved latency by 40%"), None);
        assert_eq!(bullet_guidance("  Launched a 3x faster build"), None);
        assert_eq!(bullet_guidance("Managed a $2M budget"), None);
        assert_eq!(bullet_guidance("Automated 10K checks"), None);
        assert_eq!(
            bullet_guidance("Created 40 percent more tests"),
            Some(MISSING_MEASURABLE_IMPACT)
        );
    }

    #[test]
    fn test_entry_guidance_indexes() {
        let doc = ResumeDocument {
            experience: vec![
                ExperienceEntry {
                    description: "Led 5x growth".into(),
                    ..Default::default()
                },
                ExperienceEntry {
                    description: "Helped out".into(),
                    ..Default::default()
                },
            ],
            projects: vec![ProjectEntry::default()],
            ..Default::default()
        };
        assert_eq!(
            experience_guidance(&doc),
            vec![EntryGuidance {
                index: 1,
                message: MISSING_ACTION_VERB.to_string()
            }]
        );
        assert!(project_guidance(&doc).is_empty());
    }

    #[test]
    fn test_completeness() {
        let mut doc = ResumeDocument::default();
        assert!(!is_complete(&doc));
        doc.personal = Personal {
            name: "Robin".into(),
            ..Default::default()
        };
        assert!(!is_complete(&doc));
        doc.projects.push(ProjectEntry::default());
        assert!(is_complete(&doc));
    }
}
