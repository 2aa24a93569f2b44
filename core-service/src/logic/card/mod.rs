//! Card Module - Classification to UI
//!
//! - `types`: CardDescription, widgets, actions, notices
//! - `progress`: confidence bar
//! - `presenter`: result card
//! - `error_card`: failure card with Retry

pub mod types;
pub mod progress;
pub mod presenter;
pub mod error_card;

pub use types::{
    Action,
    Button,
    CardDescription,
    CardHeader,
    CardSection,
    escape_markup,
    FooterAction,
    Notice,
    Widget,
    ACTION_FEEDBACK,
    ACTION_RENDER,
    PARAM_ID,
    PARAM_IS_PHISHING,
};

pub use progress::{render_progress_bar, ProgressBar, BAR_WIDTH};
pub use presenter::{format_confidence, present};
pub use error_card::{error_message, present_error, ERROR_TITLE};
