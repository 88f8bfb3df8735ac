//! # Canon Registry
//!
//! The authoritative book table: every accepted spelling of a book maps to a
//! single [`BookEntry`] carrying the canonical display name, the two-digit
//! ordinal and the chapter count.
//!
//! A registry is assembled once through [`CanonRegistryBuilder`] and is
//! immutable afterwards. [`CanonRegistry::standard`] returns the shared
//! built-in 66-book canon.

mod books;

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use books::STANDARD_BOOKS;

/// Highest ordinal a book can carry.
pub const MAX_ORDINAL: u8 = 66;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonError {
    #[error("Invalid ordinal {ordinal:?} for {name}: expected two digits between 01 and 66")]
    InvalidOrdinal { ordinal: String, name: String },

    #[error("Book {name} must have at least one chapter")]
    NoChapters { name: String },

    #[error("Empty spelling registered for {name}")]
    EmptySpelling { name: String },

    #[error("Spelling {spelling:?} is already registered for {existing}")]
    ConflictingSpelling { spelling: String, existing: String },

    #[error("Book {ordinal} was registered with {existing} chapters, not {requested}")]
    ChapterCountMismatch {
        ordinal: String,
        existing: u32,
        requested: u32,
    },
}

/// One canonical book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    /// Two-digit canonical position, "01" (Genesis) to "66" (Revelation).
    pub ordinal: String,
    /// Display name used in rendered links.
    pub canonical_name: String,
    /// Upper bound for chapter validation.
    pub chapter_count: u32,
}

/// A book together with every spelling registered for it, in registration order.
#[derive(Debug, Clone)]
pub struct CanonBook {
    pub entry: BookEntry,
    pub spellings: Vec<String>,
}

/// Immutable spelling → book lookup table.
#[derive(Debug)]
pub struct CanonRegistry {
    /// Books in ordinal order.
    books: Vec<CanonBook>,
    /// Lower-cased spelling → index into `books`.
    index: HashMap<String, usize>,
    /// Lower-cased spellings, longest first, ties in registration order.
    keys_by_length: Vec<String>,
}

static STANDARD: LazyLock<Arc<CanonRegistry>> = LazyLock::new(|| {
    let mut builder = CanonRegistryBuilder::default();
    for row in STANDARD_BOOKS {
        builder
            .register(row.spellings, row.name, row.ordinal, row.chapters)
            .expect("built-in canon table is consistent");
    }
    Arc::new(builder.build())
});

impl CanonRegistry {
    /// The built-in 66-book canon, shared for the life of the process.
    pub fn standard() -> Arc<CanonRegistry> {
        Arc::clone(&STANDARD)
    }

    pub fn builder() -> CanonRegistryBuilder {
        CanonRegistryBuilder::default()
    }

    /// Case-insensitive exact lookup of a spelling.
    pub fn lookup_by_spelling(&self, key: &str) -> Option<&BookEntry> {
        self.index
            .get(&key.to_lowercase())
            .map(|&idx| &self.books[idx].entry)
    }

    /// Every registered spelling key (lower-cased), longest first.
    ///
    /// Book detection walks this list in order, so the first spelling that
    /// matches is also the longest one.
    pub fn all_spelling_keys_by_length_descending(&self) -> &[String] {
        &self.keys_by_length
    }

    /// Books in canonical (ordinal) order.
    pub fn books(&self) -> impl Iterator<Item = &CanonBook> {
        self.books.iter()
    }

    /// Every spelling with its registered casing, longest first.
    pub fn spellings_by_length_descending(&self) -> Vec<&str> {
        let mut spellings: Vec<&str> = self
            .books
            .iter()
            .flat_map(|book| book.spellings.iter().map(String::as_str))
            .collect();
        spellings.sort_by_key(|s| Reverse(s.chars().count()));
        spellings
    }

    /// Number of distinct books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Collects book registrations and produces an immutable [`CanonRegistry`].
#[derive(Debug, Default)]
pub struct CanonRegistryBuilder {
    books: Vec<CanonBook>,
    index: HashMap<String, usize>,
    keys: Vec<String>,
}

impl CanonRegistryBuilder {
    /// Registers `spellings` as names of the book at `ordinal`.
    ///
    /// Registering an ordinal again adds aliases: the canonical name of the
    /// first registration is kept.
    pub fn register<S: AsRef<str>>(
        &mut self,
        spellings: &[S],
        canonical_name: &str,
        ordinal: &str,
        chapter_count: u32,
    ) -> Result<&mut Self, CanonError> {
        if !is_valid_ordinal(ordinal) {
            return Err(CanonError::InvalidOrdinal {
                ordinal: ordinal.to_string(),
                name: canonical_name.to_string(),
            });
        }
        if chapter_count == 0 {
            return Err(CanonError::NoChapters {
                name: canonical_name.to_string(),
            });
        }

        let idx = match self.books.iter().position(|b| b.entry.ordinal == ordinal) {
            Some(idx) => {
                let existing = self.books[idx].entry.chapter_count;
                if existing != chapter_count {
                    return Err(CanonError::ChapterCountMismatch {
                        ordinal: ordinal.to_string(),
                        existing,
                        requested: chapter_count,
                    });
                }
                idx
            }
            None => {
                self.books.push(CanonBook {
                    entry: BookEntry {
                        ordinal: ordinal.to_string(),
                        canonical_name: canonical_name.to_string(),
                        chapter_count,
                    },
                    spellings: Vec::new(),
                });
                self.books.len() - 1
            }
        };

        for spelling in spellings {
            let spelling = spelling.as_ref().trim();
            if spelling.is_empty() {
                return Err(CanonError::EmptySpelling {
                    name: canonical_name.to_string(),
                });
            }
            let key = spelling.to_lowercase();
            match self.index.get(&key) {
                Some(&existing) if existing == idx => continue,
                Some(&existing) => {
                    return Err(CanonError::ConflictingSpelling {
                        spelling: spelling.to_string(),
                        existing: self.books[existing].entry.canonical_name.clone(),
                    });
                }
                None => {}
            }
            self.index.insert(key.clone(), idx);
            self.keys.push(key);
            self.books[idx].spellings.push(spelling.to_string());
        }

        Ok(self)
    }

    pub fn build(self) -> CanonRegistry {
        let mut order: Vec<usize> = (0..self.books.len()).collect();
        order.sort_by(|&a, &b| self.books[a].entry.ordinal.cmp(&self.books[b].entry.ordinal));

        let mut remap = vec![0; self.books.len()];
        for (new_idx, &old_idx) in order.iter().enumerate() {
            remap[old_idx] = new_idx;
        }

        let index = self
            .index
            .into_iter()
            .map(|(key, old_idx)| (key, remap[old_idx]))
            .collect();

        let mut slots: Vec<Option<CanonBook>> = self.books.into_iter().map(Some).collect();
        let books = order
            .iter()
            .filter_map(|&old_idx| slots[old_idx].take())
            .collect();

        let mut keys_by_length = self.keys;
        keys_by_length.sort_by_key(|k| Reverse(k.chars().count()));

        CanonRegistry {
            books,
            index,
            keys_by_length,
        }
    }
}

fn is_valid_ordinal(ordinal: &str) -> bool {
    ordinal.len() == 2
        && ordinal.bytes().all(|b| b.is_ascii_digit())
        && ordinal
            .parse::<u8>()
            .is_ok_and(|n| (1..=MAX_ORDINAL).contains(&n))
}
