//! Error Card
//!
//! Fixed "Connection Error" card with one Retry button. Retry re-enters the
//! render entry point from scratch; nothing from the failed attempt is kept.

use super::types::{escape_markup, Action, Button, CardDescription, CardHeader, CardSection, Widget, ACTION_RENDER};
use crate::logic::config::AddonConfig;

pub const ERROR_TITLE: &str = "Connection Error";
pub const RETRY_TEXT: &str = "Retry";

/// `message` is plain text; it is escaped before landing in the paragraph
pub fn present_error(message: &str, config: &AddonConfig) -> CardDescription {
    let section = CardSection::new(None)
        .push(Widget::TextParagraph { text: escape_markup(message) })
        .push(Widget::ButtonSet {
            buttons: vec![Button {
                text: RETRY_TEXT.to_string(),
                color: None,
                action: Action::new(ACTION_RENDER),
            }],
        });

    CardDescription {
        header: CardHeader {
            title: ERROR_TITLE.to_string(),
            subtitle: config.app_name.clone(),
            icon_url: config.icons.warning.clone(),
        },
        sections: vec![section],
        footer: None,
    }
}

/// Message text of an error card, if `card` is one
pub fn error_message(card: &CardDescription) -> Option<&str> {
    if card.header.title != ERROR_TITLE {
        return None;
    }
    card.widgets().find_map(|w| match w {
        Widget::TextParagraph { text } => Some(text.as_str()),
        _ => None,
    })
}
