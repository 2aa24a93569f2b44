//! API Module
//!
//! Host-facing entry points of the add-on.
//!
//! Structure:
//! - commands.rs: AddonService (message open, button actions, health)
//! - tests.rs: end-to-end scenarios against an in-memory scoring service

pub mod commands;

#[cfg(test)]
mod tests;

pub use commands::*;
