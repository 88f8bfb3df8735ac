//! # Whole-Document Scanning
//!
//! Finds every reference-shaped run of text in a document and replaces it
//! with its rendered link.
//!
//! The match pattern is generated from the [`CanonRegistry`] so the scanner
//! and the parser always agree on which spellings exist. Matching is
//! case-sensitive: prose words such as "job" or "acts" are left alone.
//!
//! Replacements are made at the exact position of each match. Matches that
//! fall inside an existing `[[link]]` or a code span are skipped.

pub mod zones;

use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use crate::canon::CanonRegistry;
use crate::link::WikiLink;
use crate::text::Span;

/// Converted document text and the number of references replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub result: String,
    pub count: usize,
}

/// Horizontal whitespace; references never span lines.
const GAP: &str = "[ \\t]+";

/// `<chapter>(:<verse>(-<verse>)?(,<verse>(-<verse>)?)*)?`
const CHAPTER_AND_VERSES: &str = r"[0-9]+(?::[0-9]+(?:-[0-9]+)?(?:,[0-9]+(?:-[0-9]+)?)*)?";

#[derive(Debug, Clone)]
pub struct DocumentScanner {
    pattern: Regex,
}

impl DocumentScanner {
    pub fn new(registry: &CanonRegistry) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&build_pattern(registry))?;
        Ok(Self { pattern })
    }

    /// Replaces every unprotected match with `render(matched_text)`.
    ///
    /// Runs of spaces or tabs inside a match are collapsed to one space
    /// before rendering.
    pub fn scan(&self, document: &str, render: impl Fn(&str) -> String) -> ScanOutcome {
        let protected = zones::protected_spans(document);
        let mut result = String::with_capacity(document.len());
        let mut last = 0;
        let mut count = 0;

        for m in self.pattern.find_iter(document) {
            let span = Span::from(m.range());
            if WikiLink::contains_delimiter(m.as_str())
                || protected.iter().any(|zone| zone.overlaps(span))
            {
                debug!("Skipping already linked text {:?}", m.as_str());
                continue;
            }

            result.push_str(&document[last..span.start]);
            let reference = m.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
            result.push_str(&render(&reference));
            last = span.end;
            count += 1;
        }
        result.push_str(&document[last..]);

        info!("Converted {count} Bible references to links");
        ScanOutcome { result, count }
    }
}

/// Builds `\b(?:<spellings>)(?:<gap><chapter and verses>)?\b`.
///
/// Spellings are ordered longest first because regex alternation prefers the
/// earliest branch.
fn build_pattern(registry: &CanonRegistry) -> String {
    let books = registry
        .spellings_by_length_descending()
        .into_iter()
        .map(|spelling| {
            spelling
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(GAP)
        })
        .collect::<Vec<_>>()
        .join("|");

    format!(r"\b(?:{books})(?:{GAP}{CHAPTER_AND_VERSES})?\b")
}
