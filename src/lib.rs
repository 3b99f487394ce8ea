//! Deterministic TF-IDF search over static documentation indexes.
//!
//! A documentation generator emits a flat list of records — location, page,
//! title, category, body text. This crate validates that list into an
//! immutable [`SearchIndex`], builds an inverted index over it once, and then
//! answers repeated free-text queries with ranked results. The whole corpus
//! lives in memory; the design favors simplicity and determinism over scale.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  loader.rs  │────▶│   types.rs   │────▶│   engine.rs   │
//! │ (load,      │     │ (Entry,      │     │ (QueryEngine, │
//! │  load_json) │     │  SearchIndex)│     │  search)      │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!                            │                     │
//!                            ▼                     ▼
//!                     ┌────────────┐        ┌─────────────┐
//!                     │  utils.rs  │        │ scoring.rs  │
//!                     │ (tokenize) │        │ (idf, ...)  │
//!                     └────────────┘        └─────────────┘
//! ```
//!
//! Tokenization is shared between indexing and querying, so the two can never
//! drift apart. Scoring is length-normalized TF-IDF; no fuzzy matching, no
//! stemming, no stop words — a deliberate simplicity choice for small,
//! curated documentation corpora where exact-token ranking already surfaces
//! the right sections.
//!
//! # Usage
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docdex::{load_json, QueryEngine};
//!
//! let index = load_json(r#"{"docs": [
//!     {"location": "index.html#intro", "page": "Manual", "title": "Introduction",
//!      "category": "section", "text": "Getting started with the solver."}
//! ]}"#)?;
//!
//! let engine = QueryEngine::build(index);
//! let results = engine.search("solver", 10)?;
//! assert_eq!(results[0].location, "index.html#intro");
//! # Ok(())
//! # }
//! ```
//!
//! The engine is read-only after construction: `search` takes `&self` and
//! allocates only per-call state, so a single engine can serve concurrent
//! callers without locking. Rebuilding after a documentation change means
//! constructing a new engine and swapping the reference.

// Module declarations
mod engine;
mod error;
mod loader;
mod scoring;
mod types;
mod utils;

// Re-exports for public API
pub use engine::QueryEngine;
pub use error::{LoadError, SearchError, ValidationError};
pub use loader::{load, load_documenter_js, load_json};
pub use scoring::{idf, length_penalty};
pub use types::{
    Category, Entry, InvertedIndex, Posting, PostingList, RawEntry, SearchIndex, SearchResult,
};
pub use utils::tokenize;
