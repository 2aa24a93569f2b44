//! Card Types
//!
//! Toolkit-independent description of the add-on surface. A host adapter
//! turns these into concrete widgets; nothing here knows about any UI kit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// ACTION NAMES (host entry points)
// ============================================================================

/// Entry point the host calls when a message is opened. Retry and Rescan
/// point back here.
pub const ACTION_RENDER: &str = "on_message_open";

/// Feedback button handler
pub const ACTION_FEEDBACK: &str = "submit_feedback";

pub const PARAM_ID: &str = "id";
pub const PARAM_IS_PHISHING: &str = "is_phishing";

// ============================================================================
// ACTION
// ============================================================================

/// Named handler plus string parameters, as carried by a button click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub function_name: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl Action {
    pub fn new(function_name: &str) -> Self {
        Self {
            function_name: function_name.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.parameters.insert(key.to_string(), value.to_string());
        self
    }
}

// ============================================================================
// WIDGETS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    /// Filled background color (hex), None for a text button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    /// Labelled line; `text` may carry simple markup (<b>, <font>)
    DecoratedText {
        top_label: String,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        bottom_label: Option<String>,
    },
    TextParagraph {
        text: String,
    },
    ButtonSet {
        buttons: Vec<Button>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub widgets: Vec<Widget>,
}

impl CardSection {
    pub fn new(header: Option<&str>) -> Self {
        Self {
            header: header.map(str::to_string),
            widgets: Vec::new(),
        }
    }

    pub fn push(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }
}

// ============================================================================
// CARD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHeader {
    pub title: String,
    pub subtitle: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterAction {
    pub text: String,
    pub action: Action,
}

/// Rendered card, built fresh per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescription {
    pub header: CardHeader,
    pub sections: Vec<CardSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterAction>,
}

impl CardDescription {
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.sections.iter().flat_map(|s| s.widgets.iter())
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.widgets()
            .filter_map(|w| match w {
                Widget::ButtonSet { buttons } => Some(buttons.iter()),
                _ => None,
            })
            .flatten()
    }

    pub fn section(&self, header: &str) -> Option<&CardSection> {
        self.sections
            .iter()
            .find(|s| s.header.as_deref() == Some(header))
    }
}

/// Escape text that lands inside a markup-capable widget field
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Short toast shown by the host after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
}

impl Notice {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}
