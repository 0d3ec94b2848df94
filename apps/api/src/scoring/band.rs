use serde::{Deserialize, Serialize};

/// Coarse label for a readiness score, as shown next to the score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsWork,
    GettingThere,
    Strong,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=40 => ScoreBand::NeedsWork,
            41..=70 => ScoreBand::GettingThere,
            _ => ScoreBand::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::GettingThere => "Getting There",
            ScoreBand::Strong => "Strong Resume",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::NeedsWork => "#ef4444",
            ScoreBand::GettingThere => "#f59e0b",
            ScoreBand::Strong => "#22c55e",
        }
    }
}
