use thiserror::Error;

use crate::content::{BookCode, CollectionId};

/// Problems found while loading lesson content.
///
/// The store refuses to start with content that would produce buttons the
/// router cannot route back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("empty key in {collection}")]
    EmptyKey { collection: CollectionId },

    #[error("duplicate key {key:?} in {collection}")]
    DuplicateKey { collection: CollectionId, key: String },

    #[error("grammar key {key:?} must look like `<book>:<title>` with book one of 1A, 1B, 2A, 2B")]
    MalformedGrammarKey { key: String },

    #[error("grammar key {key:?} names book {prefix} but is listed under {book}")]
    BookMismatch { key: String, prefix: BookCode, book: BookCode },

    #[error("action code for {key:?} is {len} bytes, Telegram allows at most {max}")]
    ActionCodeTooLong { key: String, len: usize, max: usize },
}

/// A key absent from a collection. Rendered to the user as a "no data" screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no entry {key:?} in {collection}")]
pub struct NotFound {
    pub collection: CollectionId,
    pub key: String,
}

/// An action code that matches none of the router's rules, usually a button
/// left over from an older version of the bot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized action code {0:?}")]
pub struct UnrecognizedAction(pub String);
