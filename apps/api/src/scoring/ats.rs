//! ATS readiness scoring: a pure function from document to score plus
//! ordered improvement suggestions.
//!
//! # Point table
//! | Check                                  | Points |
//! |----------------------------------------|--------|
//! | name                                   | 10     |
//! | email                                  | 10     |
//! | phone                                  | 5      |
//! | LinkedIn                               | 5      |
//! | GitHub                                 | 5      |
//! | ≥ 1 education entry                    | 10     |
//! | summary longer than 50 characters      | 10     |
//! | summary uses an action verb            | 10     |
//! | an experience description > 10 chars   | 15     |
//! | ≥ 5 skills across categories           | 10     |
//! | ≥ 1 project                            | 10     |
//!
//! Unmet checks contribute their improvement text, in table order.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

pub const MAX_SCORE: u32 = 100;

/// Verbs that count as "strong" in a summary. Matched case-insensitively as substrings.
pub const SUMMARY_ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "created",
    "managed",
    "optimized",
    "implemented",
    "orchestrated",
];

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub improvements: Vec<String>,
}

/// One row of the point table.
pub struct ScoreRule {
    pub id: &'static str,
    pub points: u32,
    pub improvement: &'static str,
    pub check: fn(&ResumeDocument) -> bool,
}

pub const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule {
        id: "name",
        points: 10,
        improvement: "Add your full name.",
        check: |doc| !doc.personal.name.is_empty(),
    },
    ScoreRule {
        id: "email",
        points: 10,
        improvement: "Add your email address.",
        check: |doc| !doc.personal.email.is_empty(),
    },
    ScoreRule {
        id: "phone",
        points: 5,
        improvement: "Add a phone number.",
        check: |doc| !doc.personal.phone.is_empty(),
    },
    ScoreRule {
        id: "linkedin",
        points: 5,
        improvement: "Add your LinkedIn profile.",
        check: |doc| !doc.links.linkedin.is_empty(),
    },
    ScoreRule {
        id: "github",
        points: 5,
        improvement: "Add your GitHub profile.",
        check: |doc| !doc.links.github.is_empty(),
    },
    ScoreRule {
        id: "education",
        points: 10,
        improvement: "Add education details.",
        check: |doc| !doc.education.is_empty(),
    },
    ScoreRule {
        id: "summary_length",
        points: 10,
        improvement: "Expand summary to at least 50 characters.",
        check: |doc| doc.summary.chars().count() > MIN_SUMMARY_CHARS,
    },
    ScoreRule {
        id: "summary_action_verbs",
        points: 10,
        improvement: "Use strong action verbs in your summary (e.g., Led, Built).",
        check: |doc| contains_action_verb(&doc.summary),
    },
    ScoreRule {
        id: "experience",
        points: 15,
        improvement: "Add at least one work experience with a description.",
        check: |doc| {
            doc.experience
                .iter()
                .any(|e| e.description.chars().count() > MIN_DESCRIPTION_CHARS)
        },
    },
    ScoreRule {
        id: "skills",
        points: 10,
        improvement: "Add at least 5 key skills.",
        check: |doc| doc.skills.total() >= MIN_SKILLS,
    },
    ScoreRule {
        id: "projects",
        points: 10,
        improvement: "Add at least one project.",
        check: |doc| !doc.projects.is_empty(),
    },
];

/// Scores a document. Deterministic and total.
pub fn score(doc: &ResumeDocument) -> ScoreResult {
    let mut total = 0;
    let mut improvements = Vec::new();

    for rule in SCORE_RULES {
        if (rule.check)(doc) {
            total += rule.points;
        } else {
            improvements.push(rule.improvement.to_string());
        }
    }

    ScoreResult {
        score: total.min(MAX_SCORE),
        improvements,
    }
}

fn contains_action_verb(text: &str) -> bool {
    let lower = text.to_lowercase();
    SUMMARY_ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}
