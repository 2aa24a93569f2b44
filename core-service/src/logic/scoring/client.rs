//! Scoring API Client
//!
//! Blocking HTTP client for the phishing scoring service.

use serde::Serialize;

use super::types::{FeedbackRequest, HealthResponse, ScanRequest};
use crate::logic::config::AddonConfig;
use crate::logic::verdict::RawClassification;

// ============================================================================
// ERRORS
// ============================================================================

/// Scoring client errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// Network failure or timeout
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx status
    #[error("Server Error ({0})")]
    Server(u16),
    /// Body was not the JSON we expected
    #[error("Invalid response from server: {0}")]
    MalformedResponse(String),
    /// Refused before any request was sent
    #[error("{0}")]
    InvalidRequest(String),
}

impl ScoringError {
    /// Text for the error card
    pub fn user_message(&self) -> String {
        match self {
            ScoringError::MalformedResponse(_) => "Invalid response from server".to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// TRANSPORT SEAM
// ============================================================================

/// Calls the card logic makes against the scoring service
pub trait ScoringApi {
    fn classify(&self, request: &ScanRequest) -> Result<RawClassification, ScoringError>;

    /// Only success/failure matters; the response body is ignored
    fn send_feedback(&self, request: &FeedbackRequest) -> Result<(), ScoringError>;

    fn health(&self) -> Result<HealthResponse, ScoringError>;
}

// ============================================================================
// HTTP CLIENT
// ============================================================================

pub struct ScoringClient {
    config: AddonConfig,
    agent: ureq::Agent,
}

impl ScoringClient {
    pub fn new(config: &AddonConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .build();

        Self {
            config: config.clone(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<String, ScoringError> {
        let url = self.config.endpoint(path);
        let payload = serde_json::to_string(body)
            .map_err(|e| ScoringError::InvalidRequest(e.to_string()))?;

        let response = self.agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&payload);

        read_body(response)
    }

    fn get(&self, path: &str) -> Result<String, ScoringError> {
        read_body(self.agent.get(&self.config.endpoint(path)).call())
    }
}

impl ScoringApi for ScoringClient {
    fn classify(&self, request: &ScanRequest) -> Result<RawClassification, ScoringError> {
        log::info!(
            "Classifying message (subject {} chars, body {} chars)",
            request.subject.chars().count(),
            request.body.chars().count()
        );

        let body = self.post_json("/predict", request)?;
        serde_json::from_str(&body).map_err(|e| ScoringError::MalformedResponse(e.to_string()))
    }

    fn send_feedback(&self, request: &FeedbackRequest) -> Result<(), ScoringError> {
        self.post_json("/feedback", request).map(|_| ())
    }

    fn health(&self) -> Result<HealthResponse, ScoringError> {
        let body = self.get("/health")?;
        serde_json::from_str(&body).map_err(|e| ScoringError::MalformedResponse(e.to_string()))
    }
}

fn read_body(response: Result<ureq::Response, ureq::Error>) -> Result<String, ScoringError> {
    match response {
        Ok(resp) => resp
            .into_string()
            .map_err(|e| ScoringError::MalformedResponse(e.to_string())),
        Err(ureq::Error::Status(code, _)) => {
            log::warn!("Scoring service returned status {}", code);
            Err(ScoringError::Server(code))
        }
        Err(e) => Err(ScoringError::Transport(e.to_string())),
    }
}
