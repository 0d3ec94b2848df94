//! Loading persisted documents, including the legacy flat-skills shape.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::document::store::sanitize_project;
use crate::document::DocumentError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, Links, Personal, ProjectEntry, ResumeDocument, Skills,
};
use crate::storage::{KeyValueStore, DOCUMENT_KEY};

/// Older clients stored skills as one comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredSkills {
    Legacy(String),
    Structured(Skills),
}

impl Default for StoredSkills {
    fn default() -> Self {
        StoredSkills::Structured(Skills::default())
    }
}

/// Wire shape of a persisted blob. Identical to `ResumeDocument` except for
/// the skills field, which may still be in the legacy form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredDocument {
    personal: Personal,
    summary: String,
    education: Vec<EducationEntry>,
    experience: Vec<ExperienceEntry>,
    projects: Vec<ProjectEntry>,
    skills: StoredSkills,
    links: Links,
}

impl From<StoredDocument> for ResumeDocument {
    fn from(stored: StoredDocument) -> Self {
        let skills = match stored.skills {
            StoredSkills::Legacy(flat) => {
                debug!("Migrating legacy skills string");
                migrate_flat_skills(&flat)
            }
            StoredSkills::Structured(skills) => skills,
        };

        ResumeDocument {
            personal: stored.personal,
            summary: stored.summary,
            education: stored.education,
            experience: stored.experience,
            projects: stored.projects.into_iter().map(sanitize_project).collect(),
            skills: skills.deduplicated(),
            links: stored.links,
        }
    }
}

/// `"React, Python"` becomes `technical: ["React", "Python"]`.
pub fn migrate_flat_skills(flat: &str) -> Skills {
    Skills {
        technical: flat
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        soft: vec![],
        tools: vec![],
    }
}

/// Parses a persisted blob, applying the skills migration and tag de-duplication.
pub fn decode_document(raw: &str) -> Result<ResumeDocument, DocumentError> {
    let stored: StoredDocument = serde_json::from_str(raw)?;
    Ok(stored.into())
}

pub fn encode_document(doc: &ResumeDocument) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(doc)?)
}

/// Loads the persisted document, falling back to an empty one. Never fails:
/// malformed data is logged and discarded.
pub async fn initialize(store: &dyn KeyValueStore) -> ResumeDocument {
    let raw = match store.get(DOCUMENT_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No persisted document, starting empty");
            return ResumeDocument::default();
        }
        Err(e) => {
            warn!("Could not read persisted document: {e}");
            return ResumeDocument::default();
        }
    };

    match decode_document(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Discarding malformed persisted document: {e}");
            ResumeDocument::default()
        }
    }
}
