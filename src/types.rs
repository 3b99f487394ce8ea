// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search index.
//!
//! These types define how raw generator records, validated entries, and the
//! inverted index fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchIndex**: entry order is the input order. Equal-score results are
//!   tie-broken by that order, so it must never be perturbed after
//!   construction.
//!
//! - **Posting**: `entry < index.len()` and `positions` is non-empty and
//!   strictly ascending. The term frequency is `positions.len()`.
//!
//! - **PostingList**: postings sorted by entry position ascending, at most one
//!   posting per entry. The document frequency is `postings.len()`.
//!
//! The loader and engine uphold these at construction; `QueryEngine` has a
//! debug-build checker for the posting invariants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where an entry sits in the page hierarchy.
///
/// Generators mark whole pages with `"page"` and headings within a page with
/// `"section"`. Anything else is rejected at load time rather than silently
/// mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
}

impl Category {
    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "page" => Some(Category::Page),
            "section" => Some(Category::Section),
            _ => None,
        }
    }
}

/// A raw record as emitted by the documentation generator, prior to validation.
///
/// Every field is optional so that an absent field surfaces as a
/// `ValidationError::MissingField` naming the record position, instead of a
/// deserialization failure halfway through the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub location: Option<String>,
    pub page: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub text: Option<String>,
}

/// One indexable unit of documentation: a page, or a heading within a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Navigation target, e.g. `"index.html#background-1"`. Unique per index.
    pub location: String,
    /// Page name; repeats across entries of the same page.
    pub page: String,
    /// Section heading; empty for page-level entries.
    pub title: String,
    pub category: Category,
    /// Plain body text with markup stripped; may be empty.
    pub text: String,
}

/// The validated, immutable entry collection.
///
/// Constructed only through [`load`](crate::load) and its JSON variants, so
/// holding a `SearchIndex` is proof that every entry passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        SearchIndex { entries }
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All occurrences of one term within one entry.
///
/// `positions` are token positions in the entry's token stream (not byte
/// offsets), strictly ascending. Kept per occurrence so results can carry
/// highlight positions without re-tokenizing the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Position of the entry in the index (insertion order).
    pub entry: usize,
    /// Ascending token positions of the term within the entry.
    pub positions: Vec<u32>,
}

impl Posting {
    /// Term frequency: how often the term occurs in this entry.
    pub fn term_frequency(&self) -> usize {
        self.positions.len()
    }
}

/// All entries containing one term, ordered by entry position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    /// One posting per entry containing the term, entry position ascending.
    pub postings: Vec<Posting>,
}

impl PostingList {
    /// Document frequency: how many entries contain the term.
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }
}

/// The inverted index: term → posting list.
///
/// O(1) exact term lookup via HashMap. Fully derived from the entries at
/// engine construction and never mutated afterwards; rebuilding from the same
/// entries always yields the same index.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Map from normalized term to posting list.
    pub terms: HashMap<String, PostingList>,
    /// Total number of entries indexed, cached for IDF calculations.
    pub total_entries: usize,
}

/// A ranked search hit, in the shape the UI layer consumes.
///
/// `location` is passed through unmodified for navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub location: String,
    pub page: String,
    pub title: String,
    /// Relevance score (higher is better).
    pub score: f64,
    /// Token positions of matched query terms within the entry, merged
    /// ascending. Available for highlighting.
    pub positions: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_accepts_exactly_two_values() {
        assert_eq!(Category::parse("page"), Some(Category::Page));
        assert_eq!(Category::parse("section"), Some(Category::Section));
        assert_eq!(Category::parse("subsection"), None);
        assert_eq!(Category::parse("Page"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn category_round_trips_through_serde() {
        let json = serde_json::to_string(&Category::Section).unwrap();
        assert_eq!(json, "\"section\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "section");
    }

    #[test]
    fn raw_entry_tolerates_missing_fields() {
        let raw: RawEntry = serde_json::from_str(r#"{"location": "a.html#x"}"#).unwrap();
        assert_eq!(raw.location.as_deref(), Some("a.html#x"));
        assert!(raw.page.is_none());
        assert!(raw.category.is_none());
    }

    #[test]
    fn posting_term_frequency_is_position_count() {
        let posting = Posting {
            entry: 0,
            positions: vec![1, 4, 9],
        };
        assert_eq!(posting.term_frequency(), 3);
    }
}
