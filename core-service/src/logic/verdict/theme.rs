//! Verdict Theme Table
//!
//! Maps a classification to its visual bundle. Pure and total.

use serde::{Deserialize, Serialize};

use super::types::Classification;
use crate::logic::config::{IconSet, Palette};

/// Abstract color slot, resolved to hex through the `Palette`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorToken {
    Danger,
    Warning,
    Success,
}

impl ColorToken {
    pub fn hex<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            ColorToken::Danger => &palette.danger,
            ColorToken::Warning => &palette.warning,
            ColorToken::Success => &palette.success,
        }
    }
}

/// Abstract icon slot, resolved to a URL through the `IconSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconToken {
    Danger,
    Warning,
    Success,
}

impl IconToken {
    pub fn url<'a>(&self, icons: &'a IconSet) -> &'a str {
        match self {
            IconToken::Danger => &icons.danger,
            IconToken::Warning => &icons.warning,
            IconToken::Success => &icons.success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub title: &'static str,
    pub color: ColorToken,
    pub icon: IconToken,
    pub top_label: &'static str,
}

pub const DANGER_THEME: Theme = Theme {
    title: "Phishing Detected",
    color: ColorToken::Danger,
    icon: IconToken::Danger,
    top_label: "CRITICAL THREAT",
};

pub const WARNING_THEME: Theme = Theme {
    title: "Suspicious Activity",
    color: ColorToken::Warning,
    icon: IconToken::Warning,
    top_label: "POTENTIAL RISK",
};

pub const SUCCESS_THEME: Theme = Theme {
    title: "Verified Safe",
    color: ColorToken::Success,
    icon: IconToken::Success,
    top_label: "NO THREATS FOUND",
};

pub fn resolve_theme(classification: Classification) -> Theme {
    match classification {
        Classification::Phishing => DANGER_THEME,
        Classification::Suspicious => WARNING_THEME,
        Classification::Safe => SUCCESS_THEME,
    }
}

/// Theme straight from an upstream label string
pub fn resolve_label(label: Option<&str>) -> Theme {
    resolve_theme(Classification::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_way_table() {
        let phishing = resolve_label(Some("Phishing"));
        assert_eq!(phishing.title, "Phishing Detected");
        assert_eq!(phishing.top_label, "CRITICAL THREAT");
        assert_eq!(phishing.color, ColorToken::Danger);

        let suspicious = resolve_label(Some("Suspicious"));
        assert_eq!(suspicious.title, "Suspicious Activity");
        assert_eq!(suspicious.top_label, "POTENTIAL RISK");
        assert_eq!(suspicious.color, ColorToken::Warning);

        let safe = resolve_label(Some("Safe"));
        assert_eq!(safe.title, "Verified Safe");
        assert_eq!(safe.top_label, "NO THREATS FOUND");
        assert_eq!(safe.icon, IconToken::Success);
    }

    #[test]
    fn test_anything_else_is_safe_theme() {
        for label in ["", "Unknown", "0.9", "Phishng", "suspicious", " Phishing"] {
            assert_eq!(resolve_label(Some(label)), SUCCESS_THEME, "{label:?}");
        }
        assert_eq!(resolve_label(None), SUCCESS_THEME);
    }

    #[test]
    fn test_tokens_resolve_through_config() {
        let palette = Palette::default();
        let icons = IconSet::default();
        assert_eq!(DANGER_THEME.color.hex(&palette), palette.danger);
        assert_eq!(WARNING_THEME.icon.url(&icons), icons.warning);
    }
}
