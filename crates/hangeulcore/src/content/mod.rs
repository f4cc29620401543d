//! Static lesson content: the Hangeul letter collection and one grammar
//! collection per course book.
//!
//! The store is built once at startup and never mutated, so it can be shared
//! behind an `Arc` by any number of concurrent handlers.

mod grammar;
mod letters;

use std::collections::HashMap;
use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::action::{LETTER_PREFIX, MAX_ACTION_CODE_LEN};
use crate::error::{ContentError, NotFound};

/// Course book of 서울대 한국어.
///
/// Parsing is exact: `1A` names [`BookCode::Book1A`], `1a` names nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, EnumIter, Display, AsRefStr)]
pub enum BookCode {
    #[strum(serialize = "1A")]
    Book1A,
    #[strum(serialize = "1B")]
    Book1B,
    #[strum(serialize = "2A")]
    Book2A,
    #[strum(serialize = "2B")]
    Book2B,
}

impl BookCode {
    /// Label of the book button on the book menu.
    pub fn button_label(self) -> &'static str {
        match self {
            BookCode::Book1A => "1A 📚",
            BookCode::Book1B => "1B 📖",
            BookCode::Book2A => "2A 📘",
            BookCode::Book2B => "2B 📙",
        }
    }

    /// Derives the book from a grammar key: the text before the first `:`,
    /// matched case-insensitively against the book codes.
    pub fn from_grammar_key(key: &str) -> Option<BookCode> {
        let (prefix, _) = key.split_once(':')?;
        BookCode::iter().find(|book| book.as_ref().eq_ignore_ascii_case(prefix))
    }
}

/// Identifies one collection of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionId {
    Letters,
    Grammar(BookCode),
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionId::Letters => f.write_str("letters"),
            CollectionId::Grammar(book) => write!(f, "grammar {}", book),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub key: String,
    pub text: String,
}

/// Insertion-ordered key → text mapping.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<ContentItem>,
    index: HashMap<String, usize>,
}

impl Collection {
    fn from_entries(id: CollectionId, entries: &[(&str, &str)]) -> Result<Self, ContentError> {
        let mut collection = Collection::default();
        for (key, text) in entries {
            if key.is_empty() {
                return Err(ContentError::EmptyKey { collection: id });
            }
            if collection.index.contains_key(*key) {
                return Err(ContentError::DuplicateKey {
                    collection: id,
                    key: key.to_string(),
                });
            }
            collection.index.insert(key.to_string(), collection.items.len());
            collection.items.push(ContentItem {
                key: key.to_string(),
                text: text.to_string(),
            });
        }
        Ok(collection)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.items[i].text.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read-only lesson repository.
///
/// Every grammar key is unique across all four books: keys must carry the
/// prefix of the book they are listed under, and keys are unique per book.
#[derive(Debug, Clone)]
pub struct ContentStore {
    letters: Collection,
    grammar: HashMap<BookCode, Collection>,
    grammar_books: HashMap<String, BookCode>,
}

impl ContentStore {
    /// Loads the content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_entries(letters::LETTERS, grammar::GRAMMAR)
    }

    /// Builds and validates a store from raw `(key, text)` entries.
    ///
    /// Books missing from `grammar` get an empty collection.
    pub fn from_entries(
        letters: &[(&str, &str)],
        grammar: &[(BookCode, &[(&str, &str)])],
    ) -> Result<Self, ContentError> {
        let letters = Collection::from_entries(CollectionId::Letters, letters)?;
        for key in letters.keys() {
            check_action_len(key, LETTER_PREFIX.len() + key.len())?;
        }

        let mut books: HashMap<BookCode, Collection> = BookCode::iter().map(|b| (b, Collection::default())).collect();
        let mut grammar_books = HashMap::new();

        for (book, entries) in grammar {
            for (key, _) in entries.iter() {
                let prefix = BookCode::from_grammar_key(key).ok_or_else(|| ContentError::MalformedGrammarKey {
                    key: key.to_string(),
                })?;
                if prefix != *book {
                    return Err(ContentError::BookMismatch {
                        key: key.to_string(),
                        prefix,
                        book: *book,
                    });
                }
                check_action_len(key, key.len())?;
            }

            let collection = Collection::from_entries(CollectionId::Grammar(*book), entries)?;
            for key in collection.keys() {
                if grammar_books.insert(key.to_string(), *book).is_some() {
                    return Err(ContentError::DuplicateKey {
                        collection: CollectionId::Grammar(*book),
                        key: key.to_string(),
                    });
                }
            }
            books.insert(*book, collection);
        }

        Ok(Self {
            letters,
            grammar: books,
            grammar_books,
        })
    }

    pub fn collection(&self, id: CollectionId) -> &Collection {
        match id {
            CollectionId::Letters => &self.letters,
            // Every book is inserted in `from_entries`.
            CollectionId::Grammar(book) => &self.grammar[&book],
        }
    }

    pub fn get(&self, id: CollectionId, key: &str) -> Result<&str, NotFound> {
        self.collection(id).get(key).ok_or_else(|| NotFound {
            collection: id,
            key: key.to_string(),
        })
    }

    /// Keys of a collection in insertion order.
    pub fn keys(&self, id: CollectionId) -> impl Iterator<Item = &str> + '_ {
        self.collection(id).keys()
    }

    /// Book that lists `key`, searching all grammar collections.
    pub fn grammar_book(&self, key: &str) -> Option<BookCode> {
        self.grammar_books.get(key).copied()
    }

    /// Grammar text by key alone, independent of the book.
    pub fn grammar_text(&self, key: &str) -> Option<&str> {
        let book = self.grammar_book(key)?;
        self.collection(CollectionId::Grammar(book)).get(key)
    }
}

fn check_action_len(key: &str, len: usize) -> Result<(), ContentError> {
    if len > MAX_ACTION_CODE_LEN {
        return Err(ContentError::ActionCodeTooLong {
            key: key.to_string(),
            len,
            max: MAX_ACTION_CODE_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_loads() {
        let store = ContentStore::builtin().expect("embedded content must be valid");
        assert_eq!(store.collection(CollectionId::Letters).len(), 40);
        for book in BookCode::iter() {
            assert!(!store.collection(CollectionId::Grammar(book)).is_empty(), "{} is empty", book);
        }
    }

    #[test]
    fn every_listed_key_resolves() {
        let store = ContentStore::builtin().unwrap();
        let ids = std::iter::once(CollectionId::Letters).chain(BookCode::iter().map(CollectionId::Grammar));
        for id in ids {
            for key in store.keys(id) {
                assert!(store.get(id, key).is_ok(), "{} in {} does not resolve", key, id);
            }
        }
    }

    #[test]
    fn keys_keep_insertion_order() {
        let store = ContentStore::from_entries(&[("ㅎ", "h"), ("ㄱ", "g"), ("ㅏ", "a")], &[]).unwrap();
        let keys: Vec<_> = store.keys(CollectionId::Letters).collect();
        assert_eq!(keys, vec!["ㅎ", "ㄱ", "ㅏ"]);
    }

    #[test]
    fn missing_key_is_not_found() {
        let store = ContentStore::builtin().unwrap();
        let err = store.get(CollectionId::Letters, "Z").unwrap_err();
        assert_eq!(err.collection, CollectionId::Letters);
        assert_eq!(err.key, "Z");
    }

    #[test]
    fn grammar_lookup_by_key_alone() {
        let store = ContentStore::builtin().unwrap();
        let key = store.keys(CollectionId::Grammar(BookCode::Book2B)).next().unwrap().to_string();
        assert_eq!(store.grammar_book(&key), Some(BookCode::Book2B));
        assert!(store.grammar_text(&key).is_some());
        assert_eq!(store.grammar_text("2B: nothing here"), None);
    }

    #[test]
    fn book_code_parsing_is_exact() {
        assert_eq!("1A".parse::<BookCode>().ok(), Some(BookCode::Book1A));
        assert!("2b".parse::<BookCode>().is_err());
        assert!("3A".parse::<BookCode>().is_err());
        assert_eq!(BookCode::Book1B.to_string(), "1B");
    }

    #[test]
    fn book_from_grammar_key_uses_first_colon() {
        assert_eq!(BookCode::from_grammar_key("1a: N은/는"), Some(BookCode::Book1A));
        assert_eq!(BookCode::from_grammar_key("2A: a:b"), Some(BookCode::Book2A));
        assert_eq!(BookCode::from_grammar_key("no colon"), None);
        assert_eq!(BookCode::from_grammar_key("9Z: x"), None);
    }

    #[test]
    fn rejects_malformed_grammar_key() {
        let entries: &[(&str, &str)] = &[("Lesson 1", "text")];
        let err = ContentStore::from_entries(&[], &[(BookCode::Book1A, entries)]).unwrap_err();
        assert_eq!(
            err,
            ContentError::MalformedGrammarKey {
                key: "Lesson 1".to_string()
            }
        );
    }

    #[test]
    fn rejects_key_listed_under_wrong_book() {
        let entries: &[(&str, &str)] = &[("1B: x", "text")];
        let err = ContentStore::from_entries(&[], &[(BookCode::Book1A, entries)]).unwrap_err();
        assert!(matches!(err, ContentError::BookMismatch { prefix: BookCode::Book1B, book: BookCode::Book1A, .. }));
    }

    #[test]
    fn rejects_duplicates_and_empty_keys() {
        let dup = ContentStore::from_entries(&[("ㄱ", "a"), ("ㄱ", "b")], &[]).unwrap_err();
        assert!(matches!(dup, ContentError::DuplicateKey { .. }));

        let empty = ContentStore::from_entries(&[("", "a")], &[]).unwrap_err();
        assert_eq!(empty, ContentError::EmptyKey { collection: CollectionId::Letters });
    }

    #[test]
    fn rejects_book_listed_twice() {
        let entries: &[(&str, &str)] = &[("2A: x", "text")];
        let err = ContentStore::from_entries(&[], &[(BookCode::Book2A, entries), (BookCode::Book2A, entries)])
            .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey { .. }));
    }

    #[test]
    fn rejects_keys_too_long_for_callback_data() {
        let long_key = format!("1A: {}", "가".repeat(30));
        let entries: &[(&str, &str)] = &[(long_key.as_str(), "text")];
        let err = ContentStore::from_entries(&[], &[(BookCode::Book1A, entries)]).unwrap_err();
        assert!(matches!(err, ContentError::ActionCodeTooLong { max: 64, .. }));
    }
}
