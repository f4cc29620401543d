//! Rendering of core keyboards into Telegram markup

use hangeulcore::Keyboard;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup};

/// Inline keyboard with one callback button per action, back button on its own last row.
/// Empty for menu keyboards.
pub fn inline_markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .inline_rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.action.encode()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Resized reply keyboard of main-menu labels.
pub fn menu_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = keyboard
        .menu_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|label| KeyboardButton::new(label.as_ref())).collect())
        .collect();
    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Markup to attach to a freshly sent screen.
pub fn reply_markup(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Menu { .. } => ReplyMarkup::Keyboard(menu_markup(keyboard)),
        Keyboard::Inline { .. } => ReplyMarkup::InlineKeyboard(inline_markup(keyboard)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangeulcore::{build_screen, BookCode, ContentStore, NavState};
    use pretty_assertions::assert_eq;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("not a callback button: {:?}", other),
        }
    }

    #[test]
    fn test_book_menu_markup() {
        let store = ContentStore::builtin().unwrap();
        let screen = build_screen(&store, &NavState::BookMenu);
        let markup = inline_markup(&screen.keyboard);

        let data: Vec<Vec<&str>> = markup
            .inline_keyboard
            .iter()
            .map(|row| row.iter().map(callback_data).collect())
            .collect();
        assert_eq!(
            data,
            vec![vec!["book_1A", "book_1B"], vec!["book_2A", "book_2B"], vec!["back_to_main"]]
        );
    }

    #[test]
    fn test_grammar_menu_one_per_row() {
        let store = ContentStore::builtin().unwrap();
        let screen = build_screen(&store, &NavState::GrammarMenu(BookCode::Book1A));
        let markup = inline_markup(&screen.keyboard);
        assert!(markup.inline_keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(callback_data(&markup.inline_keyboard.last().unwrap()[0]), "show_books_menu");
    }

    #[test]
    fn test_main_menu_is_reply_keyboard() {
        let store = ContentStore::builtin().unwrap();
        let screen = build_screen(&store, &NavState::Main);
        match reply_markup(&screen.keyboard) {
            ReplyMarkup::Keyboard(markup) => {
                assert_eq!(markup.keyboard.len(), 2);
                assert_eq!(markup.keyboard[0][0].text, "📚 TOPIK 1");
                assert_eq!(markup.keyboard[1][1].text, "💎 Premium darslar");
            }
            other => panic!("expected reply keyboard, got {:?}", other),
        }
    }
}
