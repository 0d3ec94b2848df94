use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::UnknownKey;

/// Visual layout variants. All three project the same document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Classic, TemplateId::Modern, TemplateId::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
        }
    }
}

impl FromStr for TemplateId {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "minimal" => Ok(TemplateId::Minimal),
            other => Err(UnknownKey {
                kind: "template",
                key: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named accent preset offered to editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentPreset {
    pub name: &'static str,
    pub color: &'static str,
}

pub const ACCENT_PALETTE: &[AccentPreset] = &[
    AccentPreset {
        name: "teal",
        color: "hsl(168, 60%, 40%)",
    },
    AccentPreset {
        name: "navy",
        color: "hsl(220, 60%, 35%)",
    },
    AccentPreset {
        name: "burgundy",
        color: "hsl(345, 60%, 35%)",
    },
    AccentPreset {
        name: "forest",
        color: "hsl(150, 50%, 30%)",
    },
    AccentPreset {
        name: "charcoal",
        color: "hsl(0, 0%, 25%)",
    },
];

pub const DEFAULT_ACCENT_COLOR: &str = "hsl(168, 60%, 40%)";

/// Looks up a preset by name ("navy") and falls back to treating the input as
/// a literal color value.
pub fn resolve_accent(value: &str) -> String {
    ACCENT_PALETTE
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(value))
        .map(|p| p.color.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Presentation choices, stored independently of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPreferences {
    pub template_id: TemplateId,
    pub accent_color: String,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            template_id: TemplateId::Classic,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = RenderPreferences::default();
        assert_eq!(prefs.template_id, TemplateId::Classic);
        assert_eq!(prefs.accent_color, ACCENT_PALETTE[0].color);
    }

    #[test]
    fn test_template_parse() {
        assert_eq!("modern".parse::<TemplateId>(), Ok(TemplateId::Modern));
        assert!("fancy".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_resolve_accent_preset_and_literal() {
        assert_eq!(resolve_accent("Navy"), "hsl(220, 60%, 35%)");
        assert_eq!(resolve_accent("#112233"), "#112233");
    }
}
