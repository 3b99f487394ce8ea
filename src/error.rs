// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index loading and querying.
//!
//! Two failure surfaces: validation at load time and argument checks at query
//! time. Both are synchronous, non-retryable programming/data errors; nothing
//! here represents a transient fault, and no partial result accompanies any
//! of them.

use std::fmt;

/// A raw record failed validation during [`load`](crate::load).
///
/// Loading is fail-fast: the first offending record aborts the load and no
/// partial index is ever returned. `position` is the record's zero-based
/// position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two records share the same `location`.
    DuplicateLocation { position: usize, location: String },
    /// `category` was something other than `"page"` or `"section"`.
    InvalidCategory { position: usize, category: String },
    /// A required field is absent, or empty where emptiness is not allowed.
    MissingField {
        position: usize,
        field: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateLocation { position, location } => {
                write!(f, "record {}: duplicate location '{}'", position, location)
            }
            ValidationError::InvalidCategory { position, category } => {
                write!(
                    f,
                    "record {}: invalid category '{}' (expected 'page' or 'section')",
                    position, category
                )
            }
            ValidationError::MissingField { position, field } => {
                write!(f, "record {}: missing field '{}'", position, field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A malformed argument was passed to [`QueryEngine::search`](crate::QueryEngine::search).
///
/// An empty or whitespace-only query is *not* an error; it is a valid query
/// that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidArgument { argument, reason } => {
                write!(f, "invalid argument `{}`: {}", argument, reason)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Failure while reading a serialized index document.
#[derive(Debug)]
pub enum LoadError {
    /// The input was not valid JSON (or a recognizable JS wrapper around one).
    Parse(serde_json::Error),
    /// The records parsed but failed validation.
    Validation(ValidationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Parse(err) => write!(f, "malformed index document: {}", err),
            LoadError::Validation(err) => write!(f, "invalid index document: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(err) => Some(err),
            LoadError::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

impl From<ValidationError> for LoadError {
    fn from(err: ValidationError) -> Self {
        LoadError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_name_the_record_position() {
        let err = ValidationError::DuplicateLocation {
            position: 7,
            location: "index.html#intro".to_string(),
        };
        assert_eq!(err.to_string(), "record 7: duplicate location 'index.html#intro'");

        let err = ValidationError::InvalidCategory {
            position: 2,
            category: "chapter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "record 2: invalid category 'chapter' (expected 'page' or 'section')"
        );

        let err = ValidationError::MissingField {
            position: 0,
            field: "location",
        };
        assert_eq!(err.to_string(), "record 0: missing field 'location'");
    }

    #[test]
    fn load_error_preserves_the_validation_source() {
        let err = LoadError::from(ValidationError::MissingField {
            position: 3,
            field: "page",
        });
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("record 3"));
    }
}
