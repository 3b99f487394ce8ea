//! Index loading and validation.
//!
//! The loader is the only place raw generator output is trusted into the
//! crate: everything downstream works with a [`SearchIndex`] whose entries
//! have already passed validation. Loading is fail-fast and all-or-nothing;
//! a collection with one bad record yields an error, never a partial index.

use crate::error::{LoadError, ValidationError};
use crate::types::{Category, Entry, RawEntry, SearchIndex};
use serde::Deserialize;
use std::collections::HashMap;

/// Validate raw records and materialize the immutable [`SearchIndex`].
///
/// Checks, per record:
/// - `location`, `page`, and `category` are present and non-empty;
///   `title` and `text` are present but may be empty
/// - `category` is exactly `"page"` or `"section"`
/// - `location` is unique across the whole collection
///
/// The first offending record aborts the load with a [`ValidationError`]
/// naming its position. Cost is linear in total input length.
pub fn load(raw_entries: Vec<RawEntry>) -> Result<SearchIndex, ValidationError> {
    let mut entries = Vec::with_capacity(raw_entries.len());
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(raw_entries.len());

    for (position, raw) in raw_entries.into_iter().enumerate() {
        let location = required(position, "location", raw.location)?;
        let page = required(position, "page", raw.page)?;
        let title = present(position, "title", raw.title)?;
        let category = required(position, "category", raw.category)?;
        let text = present(position, "text", raw.text)?;

        let category = Category::parse(&category)
            .ok_or(ValidationError::InvalidCategory { position, category })?;

        if seen.insert(location.clone(), position).is_some() {
            return Err(ValidationError::DuplicateLocation { position, location });
        }

        entries.push(Entry {
            location,
            page,
            title,
            category,
            text,
        });
    }

    Ok(SearchIndex::new(entries))
}

/// A field that must be present and non-empty.
fn required(
    position: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField { position, field }),
    }
}

/// A field that must be present but may be empty.
fn present(
    position: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::MissingField { position, field })
}

/// The object form generators write: `{"docs": [...]}`.
#[derive(Deserialize)]
struct IndexDocument {
    docs: Vec<RawEntry>,
}

/// Load from a JSON document: either a bare array of records or the
/// `{"docs": [...]}` object that documentation generators emit.
pub fn load_json(json: &str) -> Result<SearchIndex, LoadError> {
    let raw = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RawEntry>>(json)?
    } else {
        serde_json::from_str::<IndexDocument>(json)?.docs
    };
    Ok(load(raw)?)
}

/// Load from the JavaScript wrapper generators write to `search_index.js`:
///
/// ```text
/// var documenterSearchIndex = {"docs": [ ... ]};
/// ```
///
/// Slices from the first `{` and trims a trailing semicolon, then parses the
/// remainder as JSON.
pub fn load_documenter_js(source: &str) -> Result<SearchIndex, LoadError> {
    let body = match source.find('{') {
        Some(start) => &source[start..],
        None => source,
    };
    load_json(body.trim_end().trim_end_matches(';'))
}
