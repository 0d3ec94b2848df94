use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Document sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

/// Category-partitioned skill tags. Each category keeps insertion order and
/// holds no duplicates; the same skill may appear in two categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Number of skills across all three categories.
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }

    /// Collapses duplicate entries within each category, keeping first occurrences.
    pub fn deduplicated(self) -> Self {
        Self {
            technical: dedup_tags(self.technical),
            soft: dedup_tags(self.soft),
            tools: dedup_tags(self.tools),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(deserialize_with = "deserialize_project_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

/// The root résumé aggregate. Every field has an empty default so a document
/// is always total and renderable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: Personal,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub links: Links,
}

/// Project ids were stored as JSON numbers by older clients.
fn deserialize_project_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Removes repeated tags while keeping the first occurrence of each.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Enumerated keys
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.key)
    }
}

impl std::error::Error for UnknownKey {}

macro_rules! string_keys {
    (
        $(#[$meta:meta])* $name:ident, $kind:literal,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownKey {
                        kind: $kind,
                        key: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_keys!(
    /// Top-level document fields that can be replaced wholesale.
    SectionKey, "section", {
        Personal => "personal",
        Summary => "summary",
        Education => "education",
        Experience => "experience",
        Projects => "projects",
        Skills => "skills",
        Links => "links",
    }
);

string_keys!(PersonalField, "personal field", {
    Name => "name",
    Email => "email",
    Phone => "phone",
    Location => "location",
});

string_keys!(LinkField, "link field", {
    Github => "github",
    Linkedin => "linkedin",
});

string_keys!(SkillCategory, "skill category", {
    Technical => "technical",
    Soft => "soft",
    Tools => "tools",
});

string_keys!(
    /// The ordered entry lists of a document.
    ListKey, "list", {
        Education => "education",
        Experience => "experience",
        Projects => "projects",
    }
);

impl SkillCategory {
    /// Display label used by templates and the plain-text transcript.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Order in which templates and exports list the categories.
    pub const DISPLAY_ORDER: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];
}

impl ResumeDocument {
    pub fn list_len(&self, list: ListKey) -> usize {
        match list {
            ListKey::Education => self.education.len(),
            ListKey::Experience => self.experience.len(),
            ListKey::Projects => self.projects.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let doc: ResumeDocument = serde_json::from_str(r#"{"summary":"hi"}"#).unwrap();
        assert_eq!(doc.summary, "hi");
        assert!(doc.education.is_empty());
        assert_eq!(doc.skills.total(), 0);
        assert_eq!(doc.personal, Personal::default());
    }

    #[test]
    fn test_project_without_tech_stack() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"projects":[{"title":"Dash"}]}"#).unwrap();
        assert_eq!(doc.projects[0].title, "Dash");
        assert!(doc.projects[0].tech_stack.is_empty());
    }

    #[test]
    fn test_numeric_project_id_becomes_string() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"projects":[{"id":2,"title":"A"},{"id":null}]}"#).unwrap();
        assert_eq!(doc.projects[0].id, "2");
        assert_eq!(doc.projects[1].id, "");
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let project = ProjectEntry {
            live_url: "https://x.dev".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["liveUrl"], "https://x.dev");
        assert!(json.get("techStack").is_some());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"personal":{"name":"A","nickname":"B"},"extra":1}"#).unwrap();
        assert_eq!(doc.personal.name, "A");
    }

    #[test]
    fn test_dedup_tags_keeps_first() {
        let tags = vec!["Rust".into(), "Go".into(), "Rust".into()];
        assert_eq!(dedup_tags(tags), vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("skills".parse::<SectionKey>(), Ok(SectionKey::Skills));
        assert_eq!("tools".parse::<SkillCategory>(), Ok(SkillCategory::Tools));
        let err = "hobbies".parse::<ListKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown list 'hobbies'");
    }

    #[test]
    fn test_skills_total_counts_all_categories() {
        let skills = Skills {
            technical: vec!["Rust".into()],
            soft: vec!["Mentoring".into()],
            tools: vec!["Git".into(), "Docker".into()],
        };
        assert_eq!(skills.total(), 4);
        assert_eq!(skills.category(SkillCategory::Tools).len(), 2);
    }
}
