//! Logic Module - Business Logic & Engines
//!
//! - `config` - injected add-on configuration
//! - `verdict/` - scoring response -> Classification + Theme
//! - `card/` - card description, confidence bar, result & error cards
//! - `scoring/` - scoring service client
//! - `feedback` - label correction round-trip

pub mod config;
pub mod verdict;
pub mod card;
pub mod scoring;
pub mod feedback;
