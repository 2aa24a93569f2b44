//! Add-on Commands - Host Entry Points
//!
//! The host mail client calls in here: once when a message is opened, and
//! again for every button click. Every call rebuilds its card from fresh
//! service data; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::logic::card::{
    present, present_error, CardDescription, Notice, ACTION_FEEDBACK, ACTION_RENDER,
};
use crate::logic::config::AddonConfig;
use crate::logic::feedback::dispatch_feedback;
use crate::logic::scoring::{HealthResponse, MailMessage, ScanRequest, ScoringApi, ScoringError};

pub const EMPTY_MESSAGE: &str = "Nothing to scan: message has no subject or body";
pub const NO_MESSAGE_OPEN: &str = "No message is open";

// ============================================================================
// HOST BOUNDARY TYPES
// ============================================================================

/// Button click as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action_name: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl ActionRequest {
    pub fn new(action_name: &str) -> Self {
        Self {
            action_name: action_name.to_string(),
            parameters: BTreeMap::new(),
        }
    }
}

/// What the host should show after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ActionResponse {
    /// Replace the current card
    Card(CardDescription),
    /// Show a toast, keep the current card
    Notice(Notice),
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct AddonService<A: ScoringApi> {
    config: AddonConfig,
    api: A,
}

impl<A: ScoringApi> AddonService<A> {
    pub fn new(config: AddonConfig, api: A) -> Self {
        Self { config, api }
    }

    pub fn config(&self) -> &AddonConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Render entry point. Never fails: any error becomes the error card.
    pub fn on_message_open(&self, message: &MailMessage) -> CardDescription {
        match self.scan(message) {
            Ok(card) => card,
            Err(e) => {
                log::warn!("Scan failed, showing error card: {}", e);
                present_error(&e.user_message(), &self.config)
            }
        }
    }

    fn scan(&self, message: &MailMessage) -> Result<CardDescription, ScoringError> {
        let request = ScanRequest::prepare(message)
            .ok_or_else(|| ScoringError::InvalidRequest(EMPTY_MESSAGE.to_string()))?;

        let result = self.api.classify(&request)?.sanitize();

        log::info!(
            "Message {:?} classified as {} (label {:?}, score {:.3})",
            result.id,
            result.label,
            result.raw_label,
            result.final_score
        );

        Ok(present(&result, &self.config))
    }

    /// Action entry point. `message` is the message currently open in the
    /// host, needed when the action re-renders.
    pub fn on_action(&self, request: &ActionRequest, message: Option<&MailMessage>) -> ActionResponse {
        match request.action_name.as_str() {
            ACTION_FEEDBACK => ActionResponse::Notice(dispatch_feedback(&self.api, &request.parameters)),
            ACTION_RENDER => match message {
                Some(message) => ActionResponse::Card(self.on_message_open(message)),
                None => {
                    log::warn!("Render requested without an open message");
                    ActionResponse::Card(present_error(NO_MESSAGE_OPEN, &self.config))
                }
            },
            other => {
                log::warn!("Unsupported host action: {}", other);
                ActionResponse::Card(present_error(
                    &format!("Unsupported action: {}", other),
                    &self.config,
                ))
            }
        }
    }

    pub fn check_health(&self) -> Result<HealthResponse, ScoringError> {
        self.api.health()
    }
}
