//! Handler types, dependencies, and event extraction

use std::sync::Arc;

use hangeulcore::{Event, ImageRef, ImageSubmission, Router, Sender};
use teloxide::prelude::*;
use teloxide::types::{Message, User};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub router: Arc<Router>,
    /// Chat receiving premium checks; `ChatId(0)` when not configured
    pub admin_chat: ChatId,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(router: Arc<Router>, admin_chat: ChatId) -> Self {
        Self { router, admin_chat }
    }
}

/// Sender identity as the core sees it.
pub fn sender_of(user: Option<&User>, chat_id: ChatId) -> Sender {
    match user {
        Some(user) => Sender {
            id: i64::try_from(user.id.0).unwrap_or(0),
            full_name: user.full_name(),
        },
        None => Sender {
            id: chat_id.0,
            full_name: String::new(),
        },
    }
}

/// Converts a message into a core event.
///
/// Photos become image submissions (largest size, missing caption treated as
/// empty); text becomes a free-text event. Anything else is not an event.
pub fn event_from_message(msg: &Message) -> Option<Event> {
    if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
        return Some(Event::ImageWithCaption(ImageSubmission {
            sender: sender_of(msg.from.as_ref(), msg.chat.id),
            image: ImageRef(photo.file.id.0.clone()),
            caption: msg.caption().unwrap_or_default().to_string(),
        }));
    }

    msg.text().map(|text| Event::Text(text.to_string()))
}
