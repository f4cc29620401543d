//! Telegram transport: bot setup, keyboards, handlers, admin notifications

pub mod bot;
pub mod handlers;
pub mod keyboard;
pub mod notifications;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use notifications::notify_admin_premium;
