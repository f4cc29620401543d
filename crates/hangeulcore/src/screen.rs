//! Screen builder: turns a navigation state into body text plus buttons.

use fluent_templates::fluent_bundle::FluentArgs;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::action::ActionCode;
use crate::content::{BookCode, CollectionId, ContentStore};
use crate::i18n::{t, t_args, t_with};

pub const MAIN_ROW_WIDTH: usize = 3;
pub const LETTER_ROW_WIDTH: usize = 4;
pub const BOOK_ROW_WIDTH: usize = 2;
pub const GRAMMAR_ROW_WIDTH: usize = 1;

/// Where the user is. Reconstructed from each incoming action; nothing is stored per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavState {
    Main,
    LetterMenu,
    LetterDetail(String),
    BookMenu,
    GrammarMenu(BookCode),
    GrammarDetail(String),
    /// Landing screen for buttons the router no longer understands.
    Unrecognized,
}

impl NavState {
    /// Action of the "back" button shown on this state's screen.
    pub fn back(&self) -> Option<ActionCode> {
        match self {
            NavState::Main => None,
            NavState::LetterMenu | NavState::BookMenu | NavState::Unrecognized => Some(ActionCode::BackToMain),
            NavState::LetterDetail(_) => Some(ActionCode::BackToLetters),
            NavState::GrammarMenu(_) => Some(ActionCode::ShowBooksMenu),
            NavState::GrammarDetail(key) => Some(
                BookCode::from_grammar_key(key)
                    .map(ActionCode::Book)
                    .unwrap_or(ActionCode::ShowBooksMenu),
            ),
        }
    }
}

/// Labels of the persistent main-menu keyboard. Matched exactly against typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr)]
pub enum MenuLabel {
    #[strum(serialize = "📚 TOPIK 1")]
    Topik1,
    #[strum(serialize = "📚 TOPIK 2")]
    Topik2,
    #[strum(serialize = "📖 서울대 한국어 1A/1B/2A/2B")]
    Books,
    #[strum(serialize = "☀️ Harflar")]
    Letters,
    #[strum(serialize = "💎 Premium darslar")]
    Premium,
}

impl MenuLabel {
    /// Exact, case-sensitive match of a typed text against the labels.
    pub fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ActionCode,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ActionCode) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    fn back(action: ActionCode) -> Self {
        Self::new(t("back-button"), action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Reply keyboard whose buttons send their label as text.
    Menu { labels: Vec<MenuLabel>, row_width: usize },
    /// Buttons under the message carrying action codes; `back` goes on its own last row.
    Inline {
        buttons: Vec<Button>,
        row_width: usize,
        back: Option<Button>,
    },
}

impl Keyboard {
    /// Inline buttons laid out in rows of at most `row_width`.
    pub fn inline_rows(&self) -> Vec<Vec<&Button>> {
        match self {
            Keyboard::Menu { .. } => Vec::new(),
            Keyboard::Inline {
                buttons,
                row_width,
                back,
            } => {
                let mut rows: Vec<Vec<&Button>> = buttons.chunks((*row_width).max(1)).map(|c| c.iter().collect()).collect();
                if let Some(back) = back {
                    rows.push(vec![back]);
                }
                rows
            }
        }
    }

    /// Menu labels laid out in rows of at most `row_width`.
    pub fn menu_rows(&self) -> Vec<Vec<MenuLabel>> {
        match self {
            Keyboard::Menu { labels, row_width } => labels.chunks((*row_width).max(1)).map(<[MenuLabel]>::to_vec).collect(),
            Keyboard::Inline { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub state: NavState,
    pub text: String,
    pub keyboard: Keyboard,
}

impl Screen {
    pub fn back(&self) -> Option<&ActionCode> {
        match &self.keyboard {
            Keyboard::Inline { back, .. } => back.as_ref().map(|b| &b.action),
            Keyboard::Menu { .. } => None,
        }
    }

    /// Action codes of the non-back buttons, in display order.
    pub fn actions(&self) -> Vec<&ActionCode> {
        match &self.keyboard {
            Keyboard::Inline { buttons, .. } => buttons.iter().map(|b| &b.action).collect(),
            Keyboard::Menu { .. } => Vec::new(),
        }
    }
}

/// Main screen with a custom body, used both for `/start` and for returning home.
pub fn main_menu_screen(text: String) -> Screen {
    Screen {
        state: NavState::Main,
        text,
        keyboard: Keyboard::Menu {
            labels: MenuLabel::iter().collect(),
            row_width: MAIN_ROW_WIDTH,
        },
    }
}

fn inline(state: NavState, text: String, buttons: Vec<Button>, row_width: usize) -> Screen {
    let back = state.back().map(Button::back);
    Screen {
        state,
        text,
        keyboard: Keyboard::Inline {
            buttons,
            row_width,
            back,
        },
    }
}

pub fn build_screen(store: &ContentStore, state: &NavState) -> Screen {
    match state {
        NavState::Main => main_menu_screen(t("main-welcome")),
        NavState::LetterMenu => {
            let buttons = store
                .keys(CollectionId::Letters)
                .map(|key| Button::new(key, ActionCode::Letter(key.to_string())))
                .collect();
            inline(state.clone(), t("letters-prompt"), buttons, LETTER_ROW_WIDTH)
        }
        NavState::LetterDetail(key) => {
            let text = store
                .get(CollectionId::Letters, key)
                .map(str::to_string)
                .unwrap_or_else(|_| t("not-found"));
            let mut args = FluentArgs::new();
            args.set("letter", key.as_str());
            args.set("text", text);
            inline(state.clone(), t_args("letter-detail", &args), Vec::new(), LETTER_ROW_WIDTH)
        }
        NavState::BookMenu => {
            let buttons = BookCode::iter()
                .map(|book| Button::new(book.button_label(), ActionCode::Book(book)))
                .collect();
            inline(state.clone(), t("books-prompt"), buttons, BOOK_ROW_WIDTH)
        }
        NavState::GrammarMenu(book) => {
            let buttons = store
                .keys(CollectionId::Grammar(*book))
                .map(|key| Button::new(key, ActionCode::Grammar(key.to_string())))
                .collect();
            let text = t_with("grammar-prompt", "book", book.as_ref());
            inline(state.clone(), text, buttons, GRAMMAR_ROW_WIDTH)
        }
        NavState::GrammarDetail(key) => {
            let text = store
                .grammar_text(key)
                .map(str::to_string)
                .unwrap_or_else(|| t("not-found"));
            inline(state.clone(), text, Vec::new(), GRAMMAR_ROW_WIDTH)
        }
        NavState::Unrecognized => inline(state.clone(), t("action-stale"), Vec::new(), 1),
    }
}
