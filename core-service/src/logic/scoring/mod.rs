//! Scoring Module - Add-on to Scoring Service Communication
//!
//! This module handles:
//! - Message classification (`POST /predict`)
//! - Label corrections (`POST /feedback`)
//! - Health probe (`GET /health`)

pub mod client;
pub mod types;

pub use client::{ScoringApi, ScoringClient, ScoringError};
pub use types::{FeedbackRequest, HealthResponse, MailMessage, ScanRequest};
