// Scoring Engine: deterministic readiness score plus advisory guidance.
// Stateless; recomputed by the session after every mutation.

pub mod ats;
pub mod band;
pub mod guidance;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

pub use ats::{score, ScoreResult};
pub use band::ScoreBand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub id: String,
    pub points: u32,
    pub met: bool,
}

/// Everything the score panel shows, derived from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub score: u32,
    pub band: ScoreBand,
    pub band_label: String,
    pub band_color: String,
    pub improvements: Vec<String>,
    pub checks: Vec<CheckOutcome>,
    pub complete: bool,
    pub experience_guidance: Vec<guidance::EntryGuidance>,
    pub project_guidance: Vec<guidance::EntryGuidance>,
}

pub fn readiness_report(doc: &ResumeDocument) -> ReadinessReport {
    let ScoreResult {
        score,
        improvements,
    } = ats::score(doc);
    let band = ScoreBand::from_score(score);

    let checks = ats::SCORE_RULES
        .iter()
        .map(|rule| CheckOutcome {
            id: rule.id.to_string(),
            points: rule.points,
            met: (rule.check)(doc),
        })
        .collect();

    ReadinessReport {
        score,
        band,
        band_label: band.label().to_string(),
        band_color: band.color().to_string(),
        improvements,
        checks,
        complete: guidance::is_complete(doc),
        experience_guidance: guidance::experience_guidance(doc),
        project_guidance: guidance::project_guidance(doc),
    }
}
