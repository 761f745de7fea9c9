//! Error types for parsing and typed access.
//!
//! Two disjoint error kinds exist and are deliberately not merged into one
//! type, because callers handle them differently:
//!
//! - [`ParseError`]: malformed input text rejected by the parser. Always
//!   fatal to the `from_str`/`from_reader` call; no partial tree is ever
//!   returned.
//! - [`TypeError`]: a typed accessor was called on a [`Value`](crate::Value)
//!   whose active tag does not match. This reflects consumer misuse after a
//!   successful parse, not bad input, and never occurs when predicates are
//!   checked first.
//!
//! ## Examples
//!
//! ```rust
//! use json_doc::{from_str, ParseError};
//!
//! let result = from_str("[1, 2");
//! assert!(matches!(result, Err(ParseError::Eof { .. })));
//! ```

use std::io;
use thiserror::Error;

/// An error produced while parsing a document from text.
///
/// Any `ParseError` aborts the entire load; parsing is all-or-nothing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input ended before the construct being read was complete.
    #[error("unexpected end of input while reading {expected}")]
    Eof {
        /// What was being read when the input ran out (`"a value"`,
        /// `"a string"`, `"an array"`, `"an object"`).
        expected: &'static str,
    },

    /// A digit was required at the current position but something else
    /// (or nothing) was found.
    #[error("a digit is expected")]
    ExpectedDigit,

    /// A bare literal did not spell `true`, `false`, or `null`.
    #[error("failed to read literal: expected `{expected}`")]
    BadLiteral { expected: &'static str },

    /// The accumulated numeric text could not be converted to a number.
    #[error("failed to convert `{0}` to a number")]
    BadNumber(String),

    /// Reading from the underlying stream failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Creates an end-of-input error naming the construct being read.
    pub(crate) fn eof(expected: &'static str) -> Self {
        ParseError::Eof { expected }
    }
}

/// A typed accessor was invoked against a non-matching tag.
///
/// Carries the tag the accessor required and the tag that was actually
/// active, by name.
///
/// # Examples
///
/// ```rust
/// use json_doc::Value;
///
/// let value = Value::String("hello".to_string());
/// let err = value.as_int().unwrap_err();
/// assert_eq!(err.expected, "int");
/// assert_eq!(err.found, "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeError {
    /// The tag the accessor required.
    pub expected: &'static str,
    /// The tag that was actually active.
    pub found: &'static str,
}

impl TypeError {
    pub(crate) fn new(expected: &'static str, found: &'static str) -> Self {
        TypeError { expected, found }
    }
}
