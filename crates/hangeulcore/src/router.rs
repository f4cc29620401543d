//! Event router: one dispatch function over a closed set of inbound events.
//!
//! The router is pure. It turns an [`Event`] into an ordered list of
//! [`RouterEffect`]s and leaves the actual sending, editing and deleting to
//! the transport. No error leaves [`Router::handle`]; lookups that fail
//! render a fallback screen instead.

use std::sync::Arc;

use crate::action::ActionCode;
use crate::content::ContentStore;
use crate::i18n::{t, t_with};
use crate::notifier::{is_premium_caption, AdminRecord, ImageRef, Sender};
use crate::screen::{build_screen, main_menu_screen, MenuLabel, NavState, Screen};

/// Outbound links shown in the informational replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub topik1: String,
    pub topik2: String,
    pub premium_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSubmission {
    pub sender: Sender,
    pub image: ImageRef,
    /// Empty when the photo came without a caption.
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start`
    Start,
    /// Free text typed or sent by a reply-keyboard button.
    Text(String),
    /// Callback payload of an inline button.
    Action(String),
    ImageWithCaption(ImageSubmission),
}

/// Text reply that is not a navigable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainReply {
    pub text: String,
    /// Reply to the triggering message instead of just posting in the chat.
    pub quote: bool,
    pub link_preview: bool,
}

impl PlainReply {
    fn quoted(text: String) -> Self {
        Self {
            text,
            quote: true,
            link_preview: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEffect {
    RenderNewScreen(Screen),
    /// Replace the message hosting the pressed button.
    EditCurrentScreen(Screen),
    SendPlainReply(PlainReply),
    /// Delete the hosting message and post the main menu as a new one.
    /// The main menu is a reply keyboard, which an edit cannot attach.
    DeleteAndSendMain(Screen),
    ForwardToAdmin(AdminRecord),
}

#[derive(Debug, Clone)]
pub struct Router {
    store: Arc<ContentStore>,
    links: Links,
}

impl Router {
    pub fn new(store: Arc<ContentStore>, links: Links) -> Self {
        Self { store, links }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Maps one event to the effects the transport has to perform, in order.
    ///
    /// An empty result means the event is ignored.
    pub fn handle(&self, event: Event) -> Vec<RouterEffect> {
        match event {
            Event::Start => vec![RouterEffect::RenderNewScreen(build_screen(&self.store, &NavState::Main))],
            Event::Text(text) => self.handle_text(&text),
            Event::Action(raw) => vec![self.handle_action(&raw)],
            Event::ImageWithCaption(submission) => self.handle_image(submission),
        }
    }

    fn handle_text(&self, text: &str) -> Vec<RouterEffect> {
        let Some(label) = MenuLabel::from_text(text) else {
            log::debug!("Ignoring free text that matches no menu label");
            return Vec::new();
        };
        log::debug!("Menu label {:?}", label);

        let effect = match label {
            MenuLabel::Topik1 => RouterEffect::SendPlainReply(PlainReply {
                text: t_with("topik1-info", "link", &self.links.topik1),
                quote: true,
                link_preview: false,
            }),
            MenuLabel::Topik2 => RouterEffect::SendPlainReply(PlainReply {
                text: t_with("topik2-info", "link", &self.links.topik2),
                quote: true,
                link_preview: false,
            }),
            MenuLabel::Premium => RouterEffect::SendPlainReply(PlainReply {
                text: t("premium-info"),
                quote: false,
                link_preview: true,
            }),
            MenuLabel::Letters => RouterEffect::RenderNewScreen(build_screen(&self.store, &NavState::LetterMenu)),
            MenuLabel::Books => RouterEffect::RenderNewScreen(build_screen(&self.store, &NavState::BookMenu)),
        };
        vec![effect]
    }

    fn handle_action(&self, raw: &str) -> RouterEffect {
        match ActionCode::parse(raw, &self.store) {
            Ok(ActionCode::BackToMain) => RouterEffect::DeleteAndSendMain(main_menu_screen(t("main-return"))),
            Ok(action) => {
                log::debug!("Action {} -> {:?}", action, action.target());
                RouterEffect::EditCurrentScreen(build_screen(&self.store, &action.target()))
            }
            Err(e) => {
                log::warn!("{}", e);
                RouterEffect::EditCurrentScreen(build_screen(&self.store, &NavState::Unrecognized))
            }
        }
    }

    fn handle_image(&self, submission: ImageSubmission) -> Vec<RouterEffect> {
        if !is_premium_caption(&submission.caption) {
            return vec![RouterEffect::SendPlainReply(PlainReply::quoted(t("premium-caption-missing")))];
        }

        log::info!("Premium check from user {}", submission.sender.id);
        let record = AdminRecord {
            sender: submission.sender,
            image: submission.image,
            caption: submission.caption,
        };
        vec![
            RouterEffect::ForwardToAdmin(record),
            RouterEffect::SendPlainReply(PlainReply::quoted(t_with(
                "premium-accepted",
                "link",
                &self.links.premium_group,
            ))),
        ]
    }
}
