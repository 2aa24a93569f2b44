//! Result Card Presenter
//!
//! Composes theme, confidence bar, history and feedback buttons into the
//! card shown next to an open message.
//! Input: sanitized ClassificationResult + AddonConfig
//! Output: CardDescription

use chrono::DateTime;

use super::progress::render_progress_bar;
use super::types::{
    escape_markup, Action, Button, CardDescription, CardHeader, CardSection, FooterAction, Widget,
    ACTION_FEEDBACK, ACTION_RENDER, PARAM_ID, PARAM_IS_PHISHING,
};
use crate::logic::config::AddonConfig;
use crate::logic::verdict::{resolve_theme, Classification, ClassificationResult, ColorToken, Theme};

pub const SECTION_RISK: &str = "Risk Assessment";
pub const SECTION_HISTORY: &str = "History";
pub const SECTION_FEEDBACK: &str = "Your Feedback";

pub const RESCAN_TEXT: &str = "Rescan";

const SUSPICIOUS_HELP: &str =
    "Not sure about this one? If you know and trust the sender, mark it safe. \
     If anything looks off, confirm the risk so we can learn from it.";
const DEFAULT_HELP: &str = "Is this verdict wrong? Let us know below.";

// ============================================================================
// MAIN PRESENT FUNCTION
// ============================================================================

/// Build the result card for one classification
pub fn present(result: &ClassificationResult, config: &AddonConfig) -> CardDescription {
    let theme = resolve_theme(result.label);

    let mut sections = vec![risk_section(result, &theme, config)];

    if result.already_seen {
        sections.push(history_section(result));
    }

    sections.push(feedback_section(result, config));

    CardDescription {
        header: CardHeader {
            title: theme.title.to_string(),
            subtitle: config.app_name.clone(),
            icon_url: theme.icon.url(&config.icons).to_string(),
        },
        sections,
        footer: rescan_footer(result.label),
    }
}

/// "93.0%"
pub fn format_confidence(percent: f64) -> String {
    let percent = if percent.is_finite() { percent } else { 0.0 };
    format!("{:.1}%", percent)
}

// ============================================================================
// SECTIONS
// ============================================================================

fn risk_section(result: &ClassificationResult, theme: &Theme, config: &AddonConfig) -> CardSection {
    let percent = result.confidence_percent();
    let bar = render_progress_bar(percent, theme.color, &config.palette);

    let mut text = format!(
        "<font color=\"{}\"><b>Confidence: {}</b></font>",
        theme.color.hex(&config.palette),
        format_confidence(percent)
    );
    if let Some(level) = &result.confidence_level {
        text.push_str(&format!(" · {}", escape_markup(level)));
    }

    let mut section = CardSection::new(Some(SECTION_RISK)).push(Widget::DecoratedText {
        top_label: theme.top_label.to_string(),
        text,
        bottom_label: Some(bar.markup()),
    });

    if let Some(reasoning) = &result.reasoning {
        section = section.push(Widget::TextParagraph {
            text: format!("<i>{}</i>", escape_markup(reasoning)),
        });
    }

    section
}

fn history_section(result: &ClassificationResult) -> CardSection {
    let mut text = if result.is_user_labeled() {
        "<b>Previously labeled by user</b>".to_string()
    } else {
        "Previously scanned".to_string()
    };

    if let Some(count) = result.scan_count {
        let noun = if count == 1 { "scan" } else { "scans" };
        text.push_str(&format!(" ({} {})", count, noun));
    }

    let seen = [("First seen", &result.first_seen_at), ("Last seen", &result.last_seen_at)];
    let dates: Vec<String> = seen
        .iter()
        .filter_map(|(prefix, ts)| {
            let dt = DateTime::parse_from_rfc3339(ts.as_deref()?).ok()?;
            Some(format!("{} {}", prefix, dt.format("%b %-d, %Y")))
        })
        .collect();
    let bottom_label = (!dates.is_empty()).then(|| dates.join(" · "));

    CardSection::new(Some(SECTION_HISTORY)).push(Widget::DecoratedText {
        top_label: SECTION_HISTORY.to_uppercase(),
        text,
        bottom_label,
    })
}

fn feedback_section(result: &ClassificationResult, config: &AddonConfig) -> CardSection {
    let help = match result.label {
        Classification::Suspicious => SUSPICIOUS_HELP,
        _ => DEFAULT_HELP,
    };

    let safe_text = if result.is_user_labeled() { "Change to Safe" } else { "Mark Safe" };

    let safe_button = Button {
        text: safe_text.to_string(),
        color: Some(ColorToken::Success.hex(&config.palette).to_string()),
        action: feedback_action(&result.id, false),
    };

    let threat_button = Button {
        text: threat_button_text(result.label).to_string(),
        color: Some(ColorToken::Danger.hex(&config.palette).to_string()),
        action: feedback_action(&result.id, true),
    };

    CardSection::new(Some(SECTION_FEEDBACK))
        .push(Widget::TextParagraph { text: help.to_string() })
        .push(Widget::ButtonSet {
            buttons: vec![safe_button, threat_button],
        })
}

fn threat_button_text(label: Classification) -> &'static str {
    match label {
        Classification::Phishing => "Confirm Threat",
        Classification::Suspicious => "Confirm Risk",
        Classification::Safe => "Report Threat",
    }
}

fn feedback_action(id: &str, is_phishing: bool) -> Action {
    Action::new(ACTION_FEEDBACK)
        .with_param(PARAM_ID, id)
        .with_param(PARAM_IS_PHISHING, if is_phishing { "true" } else { "false" })
}

/// Exactly one Rescan action for any non-Safe verdict
fn rescan_footer(label: Classification) -> Option<FooterAction> {
    if label.is_safe() {
        return None;
    }
    Some(FooterAction {
        text: RESCAN_TEXT.to_string(),
        action: Action::new(ACTION_RENDER),
    })
}

// ============================================================================
// TESTS
// ============================================================================
