//! Action codes: the callback payloads carried by inline buttons.
//!
//! The wire format is kept compatible with buttons already sitting in users'
//! chats; everything past the boundary works on [`ActionCode`].

use std::fmt;

use crate::content::{BookCode, ContentStore};
use crate::error::UnrecognizedAction;
use crate::screen::NavState;

pub const LETTER_PREFIX: &str = "harf_";
pub const BOOK_PREFIX: &str = "book_";
pub const BACK_TO_LETTERS: &str = "back_to_letters";
pub const SHOW_BOOKS_MENU: &str = "show_books_menu";
pub const BACK_TO_MAIN: &str = "back_to_main";

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_ACTION_CODE_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionCode {
    /// `harf_<key>`
    Letter(String),
    /// `back_to_letters`
    BackToLetters,
    /// `book_<CODE>`
    Book(BookCode),
    /// A raw grammar key, `<book>:<title>`
    Grammar(String),
    /// `show_books_menu`
    ShowBooksMenu,
    /// `back_to_main`
    BackToMain,
}

impl ActionCode {
    /// Parses a callback payload, trying the rules in router priority order.
    ///
    /// Grammar keys are only recognized when `store` lists them.
    pub fn parse(raw: &str, store: &ContentStore) -> Result<Self, UnrecognizedAction> {
        if let Some(letter) = raw.strip_prefix(LETTER_PREFIX) {
            return Ok(ActionCode::Letter(letter.to_string()));
        }
        if raw == BACK_TO_LETTERS {
            return Ok(ActionCode::BackToLetters);
        }
        if let Some(code) = raw.strip_prefix(BOOK_PREFIX) {
            return code
                .parse::<BookCode>()
                .map(ActionCode::Book)
                .map_err(|_| UnrecognizedAction(raw.to_string()));
        }
        if store.grammar_book(raw).is_some() {
            return Ok(ActionCode::Grammar(raw.to_string()));
        }
        match raw {
            SHOW_BOOKS_MENU => Ok(ActionCode::ShowBooksMenu),
            BACK_TO_MAIN => Ok(ActionCode::BackToMain),
            _ => Err(UnrecognizedAction(raw.to_string())),
        }
    }

    /// Wire form, as sent in `callback_data`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Navigation state this action leads to.
    pub fn target(&self) -> NavState {
        match self {
            ActionCode::Letter(key) => NavState::LetterDetail(key.clone()),
            ActionCode::BackToLetters => NavState::LetterMenu,
            ActionCode::Book(book) => NavState::GrammarMenu(*book),
            ActionCode::Grammar(key) => NavState::GrammarDetail(key.clone()),
            ActionCode::ShowBooksMenu => NavState::BookMenu,
            ActionCode::BackToMain => NavState::Main,
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCode::Letter(key) => write!(f, "{}{}", LETTER_PREFIX, key),
            ActionCode::BackToLetters => f.write_str(BACK_TO_LETTERS),
            ActionCode::Book(book) => write!(f, "{}{}", BOOK_PREFIX, book),
            ActionCode::Grammar(key) => f.write_str(key),
            ActionCode::ShowBooksMenu => f.write_str(SHOW_BOOKS_MENU),
            ActionCode::BackToMain => f.write_str(BACK_TO_MAIN),
        }
    }
}
