//! Scoring API Types
//!
//! Request/response shapes for the `/predict`, `/feedback` and `/health`
//! endpoints, plus the message data the host hands us.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BODY_CHARS, MAX_SENDER_CHARS, MAX_SUBJECT_CHARS};

// ============================================================================
// HOST MESSAGE
// ============================================================================

/// Message fields extracted by the host mail client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
    pub sender: String,
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    pub subject: String,
    pub body: String,
    pub sender: String,
}

impl ScanRequest {
    /// Trim and truncate the message fields the same way the service does.
    /// Returns None when subject and body are both empty.
    pub fn prepare(message: &MailMessage) -> Option<Self> {
        let subject = clip(&message.subject, MAX_SUBJECT_CHARS);
        let body = clip(&message.body, MAX_BODY_CHARS);
        let sender = clip(&message.sender, MAX_SENDER_CHARS);

        if subject.is_empty() && body.is_empty() {
            return None;
        }

        Some(Self { subject, body, sender })
    }
}

fn clip(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    pub id: String,
    pub is_phishing: bool,
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(subject: &str, body: &str, sender: &str) -> MailMessage {
        MailMessage {
            subject: subject.to_string(),
            body: body.to_string(),
            sender: sender.to_string(),
        }
    }

    #[test]
    fn test_prepare_trims_fields() {
        let req = ScanRequest::prepare(&message("  Hello ", "\n body\n", " a@b.com ")).unwrap();
        assert_eq!(req.subject, "Hello");
        assert_eq!(req.body, "body");
        assert_eq!(req.sender, "a@b.com");
    }

    #[test]
    fn test_prepare_rejects_empty_message() {
        assert_eq!(ScanRequest::prepare(&message("  ", "", "a@b.com")), None);
        assert!(ScanRequest::prepare(&message("", "only body", "")).is_some());
        assert!(ScanRequest::prepare(&message("only subject", "", "")).is_some());
    }

    #[test]
    fn test_prepare_truncates_on_char_boundaries() {
        let subject = "é".repeat(MAX_SUBJECT_CHARS + 10);
        let body = "x".repeat(MAX_BODY_CHARS + 1);
        let sender = "s".repeat(MAX_SENDER_CHARS * 2);
        let req = ScanRequest::prepare(&message(&subject, &body, &sender)).unwrap();
        assert_eq!(req.subject.chars().count(), MAX_SUBJECT_CHARS);
        assert_eq!(req.body.len(), MAX_BODY_CHARS);
        assert_eq!(req.sender.len(), MAX_SENDER_CHARS);
    }

    #[test]
    fn test_feedback_wire_shape() {
        let req = FeedbackRequest { id: "42".to_string(), is_phishing: true };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "id": "42", "is_phishing": true })
        );
    }

    #[test]
    fn test_message_defaults() {
        let msg: MailMessage = serde_json::from_str(r#"{"subject":"Hi"}"#).unwrap();
        assert_eq!(msg.subject, "Hi");
        assert_eq!(msg.body, "");
    }
}
