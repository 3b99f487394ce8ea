//! Query engine: inverted index construction and ranked search.
//!
//! Built once per index version, then read-only. [`QueryEngine::search`]
//! borrows the engine immutably and allocates only per-call accumulators, so
//! one engine can be shared across any number of concurrent callers without
//! locking. When the documentation is regenerated, construct a fresh engine
//! and swap the reference; never mutate an engine that queries may be using.
//!
//! # Invariants (upheld by construction, checked in debug builds)
//!
//! 1. **POSTING_LIST_SORTED**: postings are ordered by entry position, one
//!    posting per entry
//! 2. **POSITIONS_ASCENDING**: token positions within a posting are strictly
//!    ascending and within the entry's token count
//! 3. **NON_EMPTY**: every term has at least one posting, every posting at
//!    least one position

use crate::error::SearchError;
use crate::scoring::{idf, length_penalty};
use crate::types::{Entry, InvertedIndex, Posting, PostingList, SearchIndex, SearchResult};
use crate::utils::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// An immutable TF-IDF search engine over a validated [`SearchIndex`].
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: SearchIndex,
    inverted: InvertedIndex,
    /// Token count per entry, for length normalization.
    entry_lengths: Vec<usize>,
}

impl QueryEngine {
    /// Build the engine from a validated index.
    ///
    /// Tokenizes every entry's concatenated `page`, `title`, and `text`,
    /// records positional postings per term, and precomputes entry token
    /// counts. Construction is eager and atomic: once this returns, the
    /// engine answers queries without further setup. Deterministic: the same
    /// index always produces the same engine.
    pub fn build(index: SearchIndex) -> Self {
        let mut terms: HashMap<String, PostingList> = HashMap::new();
        let mut entry_lengths = Vec::with_capacity(index.len());

        for (position, entry) in index.entries().iter().enumerate() {
            let (entry_terms, length) = collect_entry_terms(entry);
            entry_lengths.push(length);
            merge_entry_terms(&mut terms, position, entry_terms);
        }

        let total_entries = index.len();
        QueryEngine {
            index,
            inverted: InvertedIndex {
                terms,
                total_entries,
            },
            entry_lengths,
        }
    }

    /// Parallel construction: tokenize entries in parallel, then merge.
    ///
    /// Produces an engine identical to [`QueryEngine::build`]; worth it only
    /// for corpora in the thousands of entries.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(index: SearchIndex) -> Self {
        // MAP PHASE: per-entry tokenization
        let per_entry: Vec<(HashMap<String, Vec<u32>>, usize)> =
            index.entries().par_iter().map(collect_entry_terms).collect();

        // REDUCE PHASE: merge in entry order, preserving posting-list order
        let mut terms: HashMap<String, PostingList> = HashMap::new();
        let mut entry_lengths = Vec::with_capacity(per_entry.len());
        for (position, (entry_terms, length)) in per_entry.into_iter().enumerate() {
            entry_lengths.push(length);
            merge_entry_terms(&mut terms, position, entry_terms);
        }

        let total_entries = index.len();
        QueryEngine {
            index,
            inverted: InvertedIndex {
                terms,
                total_entries,
            },
            entry_lengths,
        }
    }

    /// The index this engine was built from.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Rank entries against a free-text query.
    ///
    /// The query is tokenized with the same tokenizer used at indexing time.
    /// An empty or separator-only query matches nothing and returns an empty
    /// vector; that is not an error. A `limit` of zero is.
    ///
    /// Results are ordered by score descending, ties broken by ascending
    /// insertion position, truncated to `limit`. Entries matching none of the
    /// query tokens are excluded. Purely functional: repeated calls with the
    /// same arguments return identical sequences.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
        if limit < 1 {
            return Err(SearchError::InvalidArgument {
                argument: "limit",
                reason: "must be at least 1",
            });
        }

        let mut query_tokens = tokenize(query);
        query_tokens.sort_unstable();
        query_tokens.dedup();

        let mut scores: HashMap<usize, f64> = HashMap::new();
        let mut matched: HashMap<usize, Vec<u32>> = HashMap::new();

        for token in &query_tokens {
            // Tokens with no postings contribute nothing; no fuzzy fallback.
            let Some(list) = self.inverted.terms.get(token) else {
                continue;
            };
            let token_idf = idf(self.inverted.total_entries, list.doc_freq());
            for posting in &list.postings {
                let tf = posting.term_frequency() as f64;
                *scores.entry(posting.entry).or_insert(0.0) += tf * token_idf;
                matched
                    .entry(posting.entry)
                    .or_default()
                    .extend_from_slice(&posting.positions);
            }
        }

        let mut ranked: Vec<(usize, f64)> = scores
            .into_iter()
            .map(|(entry, score)| (entry, score / length_penalty(self.entry_lengths[entry])))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        // Deterministic: score descending, then insertion position ascending.
        // Never rely on HashMap iteration order.
        ranked.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);

        Ok(ranked
            .into_iter()
            .map(|(position, score)| {
                let entry = &self.index.entries()[position];
                let mut positions = matched.remove(&position).unwrap_or_default();
                positions.sort_unstable();
                SearchResult {
                    location: entry.location.clone(),
                    page: entry.page.clone(),
                    title: entry.title.clone(),
                    score,
                    positions,
                }
            })
            .collect())
    }

    /// Structural checks over the inverted index (debug/test builds only).
    #[cfg(any(debug_assertions, test))]
    #[allow(dead_code)]
    pub(crate) fn check_well_formed(&self) -> bool {
        if self.inverted.total_entries != self.index.len()
            || self.entry_lengths.len() != self.index.len()
        {
            return false;
        }

        for list in self.inverted.terms.values() {
            if list.postings.is_empty() {
                return false;
            }
            for (i, posting) in list.postings.iter().enumerate() {
                if posting.entry >= self.index.len() || posting.positions.is_empty() {
                    return false;
                }
                if i > 0 && list.postings[i - 1].entry >= posting.entry {
                    return false;
                }
                if !posting.positions.windows(2).all(|w| w[0] < w[1]) {
                    return false;
                }
                let entry_len = self.entry_lengths[posting.entry];
                if posting.positions.iter().any(|&p| p as usize >= entry_len) {
                    return false;
                }
            }
        }

        true
    }
}

/// Tokenize one entry's searchable text and group token positions by term.
///
/// Returns the per-term position lists and the entry's total token count.
/// `page`, `title`, and `text` are joined with spaces so tokens cannot merge
/// across field edges.
fn collect_entry_terms(entry: &Entry) -> (HashMap<String, Vec<u32>>, usize) {
    let mut text =
        String::with_capacity(entry.page.len() + entry.title.len() + entry.text.len() + 2);
    text.push_str(&entry.page);
    text.push(' ');
    text.push_str(&entry.title);
    text.push(' ');
    text.push_str(&entry.text);

    let tokens = tokenize(&text);
    let length = tokens.len();

    let mut positions: HashMap<String, Vec<u32>> = HashMap::new();
    for (position, token) in tokens.into_iter().enumerate() {
        positions.entry(token).or_default().push(position as u32);
    }

    (positions, length)
}

/// Append one entry's terms to the global posting lists.
///
/// Called in ascending entry order, which is what keeps posting lists sorted
/// without a separate sort pass.
fn merge_entry_terms(
    terms: &mut HashMap<String, PostingList>,
    position: usize,
    entry_terms: HashMap<String, Vec<u32>>,
) {
    for (term, positions) in entry_terms {
        terms.entry(term).or_default().postings.push(Posting {
            entry: position,
            positions,
        });
    }
}
