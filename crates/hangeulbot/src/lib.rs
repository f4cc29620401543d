//! Hangeulbot - Telegram bot teaching the Korean alphabet and 서울대 한국어 grammar
//!
//! This library wires the navigation core (`hangeulcore`) to Telegram:
//! configuration, logging, the dispatcher schema, and the admin handoff of
//! premium payment checks.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `telegram`: Telegram bot integration and handlers
//! - `cli`: command line interface

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod cli;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use telegram::{create_bot, schema, HandlerDeps, HandlerError};
