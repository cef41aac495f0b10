//! Fluent construction of [`Value`] trees without the call-per-event
//! ceremony of [`TreeGenerator`](crate::TreeGenerator).
//!
//! The builders produce exactly the node types the generator produces, so
//! a hand-built tree compares equal to a generated one.

use crate::value::{Array, Map, Value};

/// Chaining builder for an object node.
///
/// `put` accepts anything that converts to [`Value`], including `Option`s
/// (where `None` stores the null marker) and nested builders. A repeated
/// name replaces the earlier value and keeps its original position.
///
/// # Examples
///
/// ```
/// use jsonloom::{ArrayBuilder, ObjectBuilder, Value};
///
/// let order = ObjectBuilder::new()
///     .put("id", 4711)
///     .put("note", Option::<&str>::None)
///     .put("lines", ArrayBuilder::new().push("first").push("second"))
///     .put_null("shipped_at")
///     .build();
///
/// assert_eq!(
///     order.keys().collect::<Vec<_>>(),
///     ["id", "note", "lines", "shipped_at"]
/// );
/// assert_eq!(order["note"], Value::Null);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectBuilder {
    entries: Map,
}

impl ObjectBuilder {
    /// Creates a builder with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field; `None` values store the null marker.
    #[must_use]
    pub fn put(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Adds a field holding the null marker.
    #[must_use]
    pub fn put_null(self, name: impl Into<String>) -> Self {
        self.put(name, Value::Null)
    }

    /// Finishes the object, with fields in the order they were added.
    #[must_use]
    pub fn build(self) -> Map {
        self.entries
    }
}

impl From<ObjectBuilder> for Value {
    fn from(builder: ObjectBuilder) -> Self {
        Value::Object(builder.build())
    }
}

/// Chaining builder for an array node.
///
/// ```
/// use jsonloom::{ArrayBuilder, Value};
///
/// let row = ArrayBuilder::new().push(1).push("mixed").push_null().build();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[2], Value::Null);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayBuilder {
    items: Array,
}

impl ArrayBuilder {
    /// Creates a builder with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element; `None` values store the null marker.
    #[must_use]
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.items.push(value.into());
        self
    }

    /// Appends the null marker.
    #[must_use]
    pub fn push_null(self) -> Self {
        self.push(Value::Null)
    }

    /// Finishes the array, with elements in the order they were pushed.
    #[must_use]
    pub fn build(self) -> Array {
        self.items
    }
}

impl From<ArrayBuilder> for Value {
    fn from(builder: ArrayBuilder) -> Self {
        Value::Array(builder.build())
    }
}
