//! Hangeulcore - navigation core of the Hangeul learning bot
//!
//! Everything here is independent of the chat transport: the static lesson
//! content, the action-code grammar carried by inline buttons, the screen
//! builder, and the router that maps inbound events to outbound effects.
//!
//! # Module Structure
//!
//! - `content`: read-only lesson store (letters, grammar per course book)
//! - `action`: action-code grammar
//! - `screen`: navigation states and screen building
//! - `router`: event dispatch
//! - `notifier`: premium check records forwarded to the admin
//! - `i18n`: UI strings

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod action;
pub mod content;
pub mod error;
pub mod i18n;
pub mod notifier;
pub mod router;
pub mod screen;

pub use action::ActionCode;
pub use content::{BookCode, CollectionId, ContentStore};
pub use error::{ContentError, NotFound, UnrecognizedAction};
pub use notifier::{AdminRecord, ImageRef, Sender};
pub use router::{Event, ImageSubmission, Links, PlainReply, Router, RouterEffect};
pub use screen::{build_screen, Button, Keyboard, MenuLabel, NavState, Screen};
