//! Verdict Module
//!
//! Turns the scoring service's answer into a closed `Classification` and the
//! theme bundle the card renderer draws with.
//!
//! ## Structure
//! - `types`: Classification, raw/sanitized response, LabelSource
//! - `theme`: Classification -> Theme table
//!
//! ## Usage
//! ```ignore
//! use crate::logic::verdict::{resolve_theme, RawClassification};
//!
//! let result = raw.sanitize();
//! let theme = resolve_theme(result.label);
//! ```

pub mod types;
pub mod theme;

pub use types::{
    Classification,
    ClassificationResult,
    LabelSource,
    RawClassification,
    UNKNOWN_LABEL,
    USER_FEEDBACK_SOURCE,
};

pub use theme::{resolve_label, resolve_theme, ColorToken, IconToken, Theme};
