//! Feedback Dispatcher
//!
//! Sends a user's label correction to the scoring service. One attempt, no
//! retry; the user only ever sees a short notice.

use std::collections::BTreeMap;

use crate::logic::card::{Notice, PARAM_ID, PARAM_IS_PHISHING};
use crate::logic::scoring::{FeedbackRequest, ScoringApi};

pub const FEEDBACK_SAVED: &str = "Feedback saved.";
pub const FEEDBACK_FAILED: &str = "Connection Error";

/// Build the request from button parameters. `is_phishing` is true only for
/// the exact literal "true".
pub fn parse_feedback(parameters: &BTreeMap<String, String>) -> FeedbackRequest {
    FeedbackRequest {
        id: parameters.get(PARAM_ID).cloned().unwrap_or_default(),
        is_phishing: parameters.get(PARAM_IS_PHISHING).map(String::as_str) == Some("true"),
    }
}

pub fn dispatch_feedback<A: ScoringApi + ?Sized>(
    api: &A,
    parameters: &BTreeMap<String, String>,
) -> Notice {
    let request = parse_feedback(parameters);

    match api.send_feedback(&request) {
        Ok(()) => {
            log::info!("Feedback saved for {} (is_phishing={})", request.id, request.is_phishing);
            Notice::new(FEEDBACK_SAVED)
        }
        Err(e) => {
            log::warn!("Feedback for {} failed: {}", request.id, e);
            Notice::new(FEEDBACK_FAILED)
        }
    }
}
