//! The immutable document wrapper.

use crate::Value;

/// An immutable owner of one root [`Value`].
///
/// Construction takes ownership of the root; afterwards only read access is
/// exposed. There is no mutation API: to represent a changed document, build
/// a new tree and wrap it. Because documents never change after
/// construction, independent threads may hold and read them freely.
///
/// # Examples
///
/// ```rust
/// use json_doc::{Document, Value};
///
/// let doc = Document::new(Value::from(42));
/// assert_eq!(doc.root().as_int().unwrap(), 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wraps a root value into a document, taking ownership of it.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Document { root }
    }

    /// Returns a read-only view of the root value.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the document and returns its root value.
    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document::new(root)
    }
}
