//! MailShield Core
//!
//! Decision engine behind the mail add-on: turns a phishing scoring response
//! into a card description, and relays the user's corrections back.
//!
//! ```text
//! host message -> scoring::classify -> verdict::sanitize -> card::present
//!                                                              |
//! host button  -> api::on_action -> feedback::dispatch   <-----+
//! ```

pub mod api;
pub mod constants;
pub mod logic;
