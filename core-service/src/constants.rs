//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default scoring server, only edit this file.

/// Default Scoring API URL
///
/// This is the fallback URL when no environment variable is set.
/// For development: http://localhost:5000
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "MailShield";

// ============================================
// Scan request limits (mirrors the scoring service)
// ============================================

pub const MAX_SUBJECT_CHARS: usize = 300;
pub const MAX_BODY_CHARS: usize = 50_000;
pub const MAX_SENDER_CHARS: usize = 320;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scoring API URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("MAILSHIELD_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("MAILSHIELD_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Get display name from environment or use default
pub fn get_app_name() -> String {
    std::env::var("MAILSHIELD_APP_NAME")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| APP_NAME.to_string())
}
