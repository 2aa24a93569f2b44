//! Verdict Types
//!
//! The scoring service answers with a loosely typed JSON object. It lands in
//! `RawClassification` first and is turned into a `ClassificationResult` by a
//! single `sanitize()` step; nothing downstream sees optional or null fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label used when the service sends no label at all
pub const UNKNOWN_LABEL: &str = "Unknown";

/// `label_source` value marking a human-confirmed label
pub const USER_FEEDBACK_SOURCE: &str = "user_feedback";

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Verdict shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Safe,
    Suspicious,
    Phishing,
}

impl Classification {
    /// Map an upstream label. Only the exact literals "Phishing" and
    /// "Suspicious" are recognized; everything else is Safe.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Phishing") => Classification::Phishing,
            Some("Suspicious") => Classification::Suspicious,
            Some(other) => {
                if !other.is_empty() && other != "Safe" {
                    log::debug!("Unrecognized label {:?} treated as Safe", other);
                }
                Classification::Safe
            }
            None => Classification::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Safe => "safe",
            Classification::Suspicious => "suspicious",
            Classification::Phishing => "phishing",
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Classification::Safe)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LABEL SOURCE
// ============================================================================

/// Who assigned the current label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSource {
    Model,
    UserFeedback,
    Other(String),
}

impl LabelSource {
    /// Exact match; padded or re-cased values are not a user label
    pub fn parse(raw: &str) -> Self {
        match raw {
            USER_FEEDBACK_SOURCE => LabelSource::UserFeedback,
            "model" => LabelSource::Model,
            other => LabelSource::Other(other.to_string()),
        }
    }
}

// ============================================================================
// RAW RESPONSE (as received)
// ============================================================================

/// Scoring response exactly as received. Every field may be missing, null,
/// or of an unexpected JSON type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClassification {
    pub id: Option<Value>,
    pub label: Option<Value>,
    pub final_score: Option<Value>,
    pub confidence: Option<Value>,
    pub reasoning: Option<Value>,
    pub already_seen: Option<Value>,
    pub label_source: Option<Value>,
    pub scan_count: Option<Value>,
    pub first_seen_at: Option<Value>,
    pub last_seen_at: Option<Value>,
}

// ============================================================================
// SANITIZED RESULT
// ============================================================================

/// Classification after boundary sanitization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Opaque item id, used to correlate feedback. Empty when absent.
    pub id: String,
    /// Label text as sent (or `UNKNOWN_LABEL`)
    pub raw_label: String,
    pub label: Classification,
    /// Always finite; 0.0 when absent or unusable
    pub final_score: f64,
    pub already_seen: bool,
    pub label_source: Option<LabelSource>,
    pub scan_count: Option<u64>,

    // Extra detail the service reports alongside the verdict
    /// "HIGH" / "MEDIUM"
    pub confidence_level: Option<String>,
    pub reasoning: Option<String>,
    pub first_seen_at: Option<String>,
    pub last_seen_at: Option<String>,
}

impl ClassificationResult {
    pub fn is_user_labeled(&self) -> bool {
        matches!(self.label_source, Some(LabelSource::UserFeedback))
    }

    /// Confidence as a percentage rounded to one decimal
    pub fn confidence_percent(&self) -> f64 {
        (self.final_score * 1000.0).round() / 10.0
    }
}

impl RawClassification {
    /// Single coercion step from the wire shape to the typed result
    pub fn sanitize(self) -> ClassificationResult {
        let label_text = self.label.as_ref().and_then(Value::as_str);

        ClassificationResult {
            id: coerce_id(self.id.as_ref()),
            label: Classification::from_label(label_text),
            raw_label: label_text
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_LABEL)
                .to_string(),
            final_score: coerce_score(self.final_score.as_ref()).unwrap_or(0.0),
            already_seen: self.already_seen.as_ref().map(is_truthy).unwrap_or(false),
            label_source: self
                .label_source
                .as_ref()
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(LabelSource::parse),
            scan_count: self.scan_count.as_ref().and_then(coerce_count),
            confidence_level: self.confidence.as_ref().and_then(non_empty_str).map(str::to_string),
            reasoning: self.reasoning.as_ref().and_then(non_empty_str).map(str::to_string),
            first_seen_at: self.first_seen_at.as_ref().and_then(non_empty_str).map(str::to_string),
            last_seen_at: self.last_seen_at.as_ref().and_then(non_empty_str).map(str::to_string),
        }
    }
}

impl From<RawClassification> for ClassificationResult {
    fn from(raw: RawClassification) -> Self {
        raw.sanitize()
    }
}

// ============================================================================
// COERCION HELPERS
// ============================================================================

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Strings verbatim, numbers and booleans as their JSON text, anything else empty
fn coerce_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numbers or numeric strings; non-finite values are dropped
fn coerce_score(value: Option<&Value>) -> Option<f64> {
    let score = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    score.is_finite().then_some(score)
}

fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Truthiness of a loosely typed flag
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
