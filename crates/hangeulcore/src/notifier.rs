//! Premium check handoff: what gets forwarded to the admin.

use fluent_templates::fluent_bundle::FluentArgs;

use crate::i18n::t_args;

/// Who sent an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub full_name: String,
}

/// Opaque reference to an image already uploaded to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub String);

/// A payment check submitted for manual verification. Forwarded once, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub sender: Sender,
    pub image: ImageRef,
    pub caption: String,
}

impl AdminRecord {
    /// Text sent to the admin ahead of the image.
    pub fn summary(&self) -> String {
        let mut args = FluentArgs::new();
        args.set("name", self.sender.full_name.as_str());
        args.set("id", self.sender.id.to_string());
        t_args("premium-admin-summary", &args)
    }
}

/// Case-insensitive check for the trigger keyword in a check caption.
pub fn is_premium_caption(caption: &str) -> bool {
    caption.to_lowercase().contains("premium")
}
