//! # json-doc
//!
//! A strictly-typed JSON document tree: a recursive-descent parser builds an
//! in-memory [`Value`] tree from text, typed accessors read it, and an
//! exact-format serializer writes it back out.
//!
//! ## Key Features
//!
//! - **Closed tagged union**: [`Value`] has exactly seven shapes — null,
//!   bool, 32-bit int, double, string, array, and key-sorted object
//! - **Observable int/double split**: integral literals that fit `i32`
//!   parse as `Int` and print without a decimal point; everything else is
//!   `Double` and always prints with one
//! - **Typed accessors**: `as_int`, `as_double`, `as_map`, … return a
//!   [`TypeError`] instead of panicking when the tag does not match
//! - **Exact output contract**: compact single-line arrays, line-broken
//!   key-sorted objects, a fixed five-entry escape table
//! - **Lenient input grammar**: a missing comma between elements is
//!   tolerated; unrecognized string escapes are dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use json_doc::{from_str, to_string};
//!
//! let doc = from_str(r#"{"name": "Alice", "scores": [95, 87, 92]}"#).unwrap();
//!
//! let map = doc.root().as_map().unwrap();
//! assert_eq!(map.get("name").unwrap().as_str().unwrap(), "Alice");
//! assert_eq!(
//!     map.get("scores").unwrap().as_array().unwrap()[0].as_int().unwrap(),
//!     95
//! );
//!
//! // Objects re-serialize line-broken and key-sorted; arrays stay compact
//! assert_eq!(to_string(&doc), "{\n\"name\": \"Alice\",\n\"scores\": [95, 87, 92]}\n");
//! ```
//!
//! ### Building Trees Programmatically
//!
//! ```rust
//! use json_doc::{json, to_string, Document};
//!
//! let tree = json!({
//!     "request_id": 7,
//!     "buses": ["114", "14"]
//! });
//! let doc = Document::new(tree);
//! assert_eq!(to_string(&doc), "{\n\"buses\": [\"114\", \"14\"],\n\"request_id\": 7}\n");
//! ```
//!
//! ## Error Model
//!
//! Two disjoint error kinds, never merged: [`ParseError`] for malformed
//! input (all-or-nothing, no partial trees) and [`TypeError`] for a typed
//! accessor called against the wrong tag. See the [`error`] module.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. A [`Document`] is
//! immutable after construction, so shared read access across threads is
//! safe; there is no API for concurrent construction or mutation.

pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use document::Document;
pub use error::{ParseError, TypeError};
pub use map::JsonMap;
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Parses one document from a string of JSON text.
///
/// Trailing text after the root value is ignored.
///
/// # Examples
///
/// ```rust
/// use json_doc::from_str;
///
/// let doc = from_str("[1, 2, 3]").unwrap();
/// assert_eq!(doc.root().as_array().unwrap().len(), 3);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] on any lexical or structural failure; parsing
/// is all-or-nothing and no partial tree is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Document, ParseError> {
    Parser::from_str(input).parse()
}

/// Parses one document from an I/O stream of JSON text.
///
/// The reader is drained into a string first; a blocked stream blocks the
/// whole call.
///
/// # Examples
///
/// ```rust
/// use json_doc::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"true")).unwrap();
/// assert!(doc.root().as_bool().unwrap());
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if reading fails or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Serializes a document to a string.
///
/// # Examples
///
/// ```rust
/// use json_doc::{to_string, Document, Value};
///
/// let doc = Document::new(Value::from(1.0));
/// assert_eq!(to_string(&doc), "1.0");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize(doc);
    serializer.into_inner()
}

/// Serializes a document to a writer.
///
/// # Examples
///
/// ```rust
/// use json_doc::{to_writer, Document, Value};
///
/// let doc = Document::new(Value::Array(vec![Value::Int(1), Value::Int(2)]));
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[1, 2]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, doc: &Document) -> io::Result<()> {
    writer.write_all(to_string(doc).as_bytes())
}
