//! # Reference Parsing
//!
//! Turns a text fragment such as `"1 Corinthians 13:4-7"` into a
//! [`ParsedReference`].
//!
//! Parsing happens in two steps:
//! 1. **Book detection** ([`ReferenceParser::find_book_match`]): the longest
//!    registered spelling that prefixes the text wins, so `"1 John 3:16"`
//!    resolves to 1 John and never to John.
//! 2. **Chapter and verses** ([`grammar::parse_chapter_and_verses`]): the
//!    remainder must be `<chapter>(:<verse list>)?` or empty.
//!
//! Text that is not a reference yields `None`; callers decide how to degrade.

pub mod grammar;

use serde::Serialize;

use crate::canon::CanonRegistry;

pub use grammar::{MAX_RANGE_SPAN, expand_verse_list, parse_chapter_and_verses};

/// A fully resolved reference.
///
/// `verses` is only non-empty when `chapter` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    /// Canonical display name of the book.
    pub book: String,
    /// `None` for a whole-book reference.
    pub chapter: Option<u32>,
    /// Expanded verse numbers; empty for a whole-chapter reference.
    pub verses: Vec<String>,
}

/// Result of book detection: the canonical book name and the unmatched tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMatch {
    pub book: String,
    pub remaining: String,
}

/// Parses references against a borrowed [`CanonRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct ReferenceParser<'a> {
    registry: &'a CanonRegistry,
}

impl<'a> ReferenceParser<'a> {
    pub fn new(registry: &'a CanonRegistry) -> Self {
        Self { registry }
    }

    /// Finds the longest book spelling at the start of `text`.
    ///
    /// A spelling only counts when followed by whitespace or the end of the
    /// text, so `"Johnathan"` does not match John.
    pub fn find_book_match(&self, text: &str) -> Option<BookMatch> {
        let text = text.trim();

        self.registry
            .all_spelling_keys_by_length_descending()
            .iter()
            .find_map(|key| {
                let rest = strip_folded_prefix(text, key)?;
                if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                    return None;
                }
                let entry = self.registry.lookup_by_spelling(key)?;
                Some(BookMatch {
                    book: entry.canonical_name.clone(),
                    remaining: rest.trim().to_string(),
                })
            })
    }

    pub fn parse_reference(&self, text: &str) -> Option<ParsedReference> {
        let BookMatch { book, remaining } = self.find_book_match(text)?;
        let (chapter, verses) = parse_chapter_and_verses(&remaining)?;
        Some(ParsedReference {
            book,
            chapter,
            verses,
        })
    }
}

/// Strips the shortest prefix of `text` whose lower-cased form equals `key`.
///
/// Folds one char at a time with the same `to_lowercase` the registry keys
/// went through, so the cut lands on a char boundary even when folding
/// changes the byte length (`İ` folds to two chars).
fn strip_folded_prefix<'t>(text: &'t str, key: &str) -> Option<&'t str> {
    let mut folded = String::with_capacity(key.len());
    for (i, c) in text.char_indices() {
        folded.extend(c.to_lowercase());
        if folded == key {
            return Some(&text[i + c.len_utf8()..]);
        }
        if !key.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}
