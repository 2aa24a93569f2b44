//! Add-on Configuration
//!
//! Process-wide settings (API endpoint, brand colors, icons) are carried in an
//! `AddonConfig` value that callers build once and pass down.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants;

/// Brand colors (hex) used by the card renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub danger: String,
    pub warning: String,
    pub success: String,
    /// Unfilled part of the confidence bar
    pub track: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            danger: "#d93025".to_string(),  // Red
            warning: "#f29900".to_string(), // Amber
            success: "#1e8e3e".to_string(), // Green
            track: "#dadce0".to_string(),   // Grey
        }
    }
}

/// Header icons per verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub danger: String,
    pub warning: String,
    pub success: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            danger: "https://www.gstatic.com/images/icons/material/system/2x/gpp_bad_black_48dp.png".to_string(),
            warning: "https://www.gstatic.com/images/icons/material/system/2x/warning_black_48dp.png".to_string(),
            success: "https://www.gstatic.com/images/icons/material/system/2x/verified_user_black_48dp.png".to_string(),
        }
    }
}

/// Add-on configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonConfig {
    /// Scoring API base URL, without trailing slash
    pub api_base_url: String,
    pub timeout_seconds: u64,
    /// Shown as the card subtitle
    pub app_name: String,
    pub palette: Palette,
    pub icons: IconSet,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            api_base_url: constants::DEFAULT_API_URL.to_string(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECS,
            app_name: constants::APP_NAME.to_string(),
            palette: Palette::default(),
            icons: IconSet::default(),
        }
    }
}

impl AddonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::default()
            .with_api_url(&constants::get_api_url())
            .with_timeout(constants::get_timeout_secs())
            .with_app_name(&constants::get_app_name())
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Full URL for an API path such as `/predict`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
