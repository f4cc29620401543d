//! Telegram bot handler tree configuration
//!
//! The dispatcher schema turns updates into core events, lets the router
//! decide what to do, and applies the resulting effects. Integration tests
//! call the same entry points as production code.

mod effects;
mod schema;
mod types;

pub use effects::{apply_effects, Origin};
pub use schema::{handle_callback, handle_message, handle_start, schema};
pub use types::{event_from_message, sender_of, HandlerDeps, HandlerError};
