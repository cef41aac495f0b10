//! Event-driven assembly of JSON value trees.
//!
//! A [`TreeGenerator`] consumes the flat write calls a serialization engine
//! emits (open and close containers, field names, scalars) and assembles
//! them into a [`Value`] tree held entirely in memory: objects keep their
//! fields in write order, numbers keep the width they were written with,
//! and every call is validated against the generator's structural state
//! before the tree is touched.
//!
//! ```
//! use jsonloom::{TreeGenerator, Value};
//!
//! let mut g = TreeGenerator::new();
//! g.start_object()?;
//! g.field_name("name")?;
//! g.write_string("jsonloom")?;
//! g.field_name("checks")?;
//! g.start_array()?;
//! g.write_boolean(true)?;
//! g.write_number(0.875)?;
//! g.end_array()?;
//! g.end_object()?;
//!
//! let root = g.into_root().unwrap();
//! assert_eq!(root.as_object().unwrap()["name"], Value::from("jsonloom"));
//! # Ok::<(), jsonloom::GeneratorError>(())
//! ```
//!
//! An out-of-order call fails with a [`GeneratorError`] naming the rejected
//! operation and the state it was attempted in, and leaves the tree exactly
//! as it was.
//!
//! Trees can also be built directly, without an event stream, through
//! [`ObjectBuilder`] and [`ArrayBuilder`]. The optional `serde` feature
//! adds `Serialize` for the tree types, keeping field order and numeric
//! width.

mod builder;
mod error;
mod generator;
mod number;
mod value;

#[cfg(test)]
mod tests;

pub use builder::{ArrayBuilder, ObjectBuilder};
pub use error::GeneratorError;
pub use generator::{State, TreeGenerator};
pub use number::Number;
pub use value::{Array, Map, Value};
