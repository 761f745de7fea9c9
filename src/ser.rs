//! Serializing documents to text.
//!
//! This module provides the [`Serializer`], a recursive depth-first walker
//! with one emission rule per tag. The output format is an exact contract:
//!
//! - `null`, `true`, `false` literals; ints as bare decimal digits
//! - doubles in their `Display` form, with `.0` appended when the form
//!   would otherwise be indistinguishable from an int
//! - strings quoted, with `\n \r \" \t \\` escaped and everything else
//!   copied verbatim
//! - arrays compact on a single line, elements joined by `, `
//! - objects line-broken: `{` newline, entries in key-sorted order joined
//!   by `,\n`, each as `"key": value`, then `}` newline
//!
//! The compact-array/line-broken-object asymmetry is part of the wire
//! contract and reproduced bit-for-bit. No trailing separator is ever
//! emitted after the last element or entry.
//!
//! ## Usage
//!
//! Most users should use the crate-root functions:
//!
//! ```rust
//! use json_doc::{from_str, to_string};
//!
//! let doc = from_str("[1,2,3]").unwrap();
//! assert_eq!(to_string(&doc), "[1, 2, 3]");
//! ```

use crate::{Document, Value};

/// The document serializer.
///
/// Accumulates output into a `String`; retrieve it with
/// [`Serializer::into_inner`].
///
/// # Examples
///
/// ```rust
/// use json_doc::{Document, Serializer, Value};
///
/// let doc = Document::new(Value::from(true));
/// let mut serializer = Serializer::new();
/// serializer.serialize(&doc);
/// assert_eq!(serializer.into_inner(), "true");
/// ```
#[derive(Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    /// Emits the document's root value onto the output buffer.
    pub fn serialize(&mut self, doc: &Document) {
        write_value(&mut self.output, doc.root());
    }

    /// Returns the accumulated output.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }
}

/// Emits one value, recursing depth-first.
pub(crate) fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Double(d) => write_double(out, *d),
        Value::String(s) => {
            out.push('"');
            write_escaped(out, s);
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, entry)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                // keys are emitted raw, without escaping
                out.push('"');
                out.push_str(key);
                out.push_str("\": ");
                write_value(out, entry);
            }
            out.push_str("}\n");
        }
    }
}

/// Doubles keep a textual marker of their tag: if the `Display` form has
/// neither a decimal point nor an exponent, `.0` is appended so the text
/// reparses as a double, not an int.
fn write_double(out: &mut String, d: f64) {
    let text = d.to_string();
    out.push_str(&text);
    if d.is_finite() && !text.contains(['.', 'e', 'E']) {
        out.push_str(".0");
    }
}

/// The inverse of the parser's escape table; all other characters are
/// copied verbatim.
fn write_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
}
