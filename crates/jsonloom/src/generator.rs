//! The event sink that assembles a [`Value`] tree from flat write calls.
//!
//! A driving engine emits one call per structural unit of a document, in
//! document order: containers open and close, field names arrive before
//! their values, scalars land in whatever container is open. The generator
//! validates every call against its current position before touching the
//! tree, so a malformed call sequence fails at the first offending call
//! instead of producing a silently wrong document.

use std::ptr::NonNull;

use base64::Engine;

use crate::{
    error::GeneratorError,
    number::Number,
    value::{Array, Map, Value},
};

/// Structural position of the generator, as seen by the next write call.
///
/// The generator tracks one `State` per open container plus a bottom
/// sentinel, and dispatches every operation on the current state alone;
/// it never inspects the node types on its stack to decide what is legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Nothing is open: no write has happened yet, or the document closed.
    Empty,
    /// An object is open and expects a field name or a close.
    Object,
    /// An array is open and expects a value or a close.
    Array,
    /// A field name is recorded on the open object; its value must come
    /// next.
    Field,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            State::Empty => "Empty",
            State::Object => "Object",
            State::Array => "Array",
            State::Field => "Field",
        })
    }
}

/// Assembles a [`Value`] tree from generator-style write calls.
///
/// The first top-level container becomes the root, observable through
/// [`root`](TreeGenerator::root) at any point, including while the document
/// is still open. Every write either fully succeeds, mutating exactly one
/// place in the tree, or fails with a [`GeneratorError`] and mutates
/// nothing.
///
/// A generator is single-threaded by construction (it is neither `Send`
/// nor `Sync`); one thread of control must issue every write for a
/// document.
///
/// # Examples
///
/// ```
/// use jsonloom::{TreeGenerator, Value};
///
/// let mut g = TreeGenerator::new();
/// g.start_object()?;
/// g.field_name("greeting")?;
/// g.write_string("hello")?;
/// g.field_name("count")?;
/// g.write_number(3)?;
/// g.end_object()?;
///
/// let root = g.into_root().unwrap();
/// assert_eq!(root.as_object().unwrap()["count"], Value::from(3));
/// # Ok::<(), jsonloom::GeneratorError>(())
/// ```
#[derive(Debug)]
pub struct TreeGenerator {
    /// First top-level node ever produced; never reassigned.
    root: Option<Box<Value>>,
    /// Top-level containers started after the document closed. The root
    /// accessor never shows them, but writes into them must keep working.
    detached: Vec<Box<Value>>,
    /// Write cursor: one pointer per open container, innermost last. Each
    /// target lives in a `Box` above or inside an ancestor container, and a
    /// container's storage only changes while it is the innermost open
    /// node, so outer entries stay valid.
    stack: Vec<NonNull<Value>>,
    /// One state per open container, pushed and popped in lockstep with
    /// `stack`, below them all a permanent [`State::Empty`] sentinel.
    states: Vec<State>,
    /// Current state; leaves the top of `states` only while a field name
    /// is pending.
    state: State,
    /// Field name recorded by [`field_name`](TreeGenerator::field_name),
    /// consumed by the next value write.
    pending_name: Option<String>,
}

impl TreeGenerator {
    /// Creates a generator with nothing written.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            detached: Vec::new(),
            stack: Vec::new(),
            states: vec![State::Empty],
            state: State::Empty,
            pending_name: None,
        }
    }

    /// Opens an object: at the top level, as the pending field's value, or
    /// as the next element of the open array.
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::MissingFieldName`] when an object is
    /// open but no field name is pending, and with
    /// [`GeneratorError::InvalidState`] in any other illegal position.
    pub fn start_object(&mut self) -> Result<(), GeneratorError> {
        self.start_container(Value::Object(Map::new()), State::Object, "start object")
    }

    /// Closes the open object.
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::InvalidState`] unless an object is open
    /// and expecting a field name (a pending field without a value also
    /// rejects the close).
    pub fn end_object(&mut self) -> Result<(), GeneratorError> {
        match self.state {
            State::Object => {
                self.pop_open();
                Ok(())
            }
            _ => Err(self.invalid("end object")),
        }
    }

    /// Opens an array; the same positions are legal as for
    /// [`start_object`](TreeGenerator::start_object).
    ///
    /// # Errors
    ///
    /// See [`start_object`](TreeGenerator::start_object).
    pub fn start_array(&mut self) -> Result<(), GeneratorError> {
        self.start_container(Value::Array(Array::new()), State::Array, "start array")
    }

    /// Closes the open array.
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::InvalidState`] unless an array is the
    /// innermost open container.
    pub fn end_array(&mut self) -> Result<(), GeneratorError> {
        match self.state {
            State::Array => {
                self.pop_open();
                Ok(())
            }
            _ => Err(self.invalid("end array")),
        }
    }

    /// Records the name of the next field of the open object.
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::InvalidState`] unless an object is open
    /// and no other field name is already pending.
    pub fn field_name(&mut self, name: impl Into<String>) -> Result<(), GeneratorError> {
        match self.state {
            State::Object => {
                self.pending_name = Some(name.into());
                self.state = State::Field;
                Ok(())
            }
            _ => Err(self.invalid("write field name")),
        }
    }

    /// Writes a text scalar.
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::InvalidState`] unless an array is open
    /// or a field name is pending.
    pub fn write_string(&mut self, text: impl Into<String>) -> Result<(), GeneratorError> {
        self.write_scalar(Value::String(text.into()), "write string")
    }

    /// Writes a numeric scalar of any width [`Number`] accepts; the width
    /// is preserved in the tree.
    ///
    /// # Errors
    ///
    /// Same positions as [`write_string`](TreeGenerator::write_string).
    pub fn write_number(&mut self, number: impl Into<Number>) -> Result<(), GeneratorError> {
        self.write_scalar(Value::Number(number.into()), "write number")
    }

    /// Writes a boolean scalar.
    ///
    /// # Errors
    ///
    /// Same positions as [`write_string`](TreeGenerator::write_string).
    pub fn write_boolean(&mut self, value: bool) -> Result<(), GeneratorError> {
        self.write_scalar(Value::Boolean(value), "write boolean")
    }

    /// Writes an explicit null.
    ///
    /// # Errors
    ///
    /// Same positions as [`write_string`](TreeGenerator::write_string).
    pub fn write_null(&mut self) -> Result<(), GeneratorError> {
        self.write_scalar(Value::Null, "write null")
    }

    /// Encodes `data[offset..offset + len]` with the supplied alphabet and
    /// writes the result as a text scalar.
    ///
    /// ```
    /// use base64::engine::general_purpose::STANDARD;
    /// use jsonloom::{TreeGenerator, Value};
    ///
    /// let mut g = TreeGenerator::new();
    /// g.start_array()?;
    /// g.write_binary(&STANDARD, &[0xDE, 0xAD, 0xBE, 0xEF], 0, 4)?;
    /// g.end_array()?;
    /// assert_eq!(
    ///     g.into_root().unwrap().as_array().unwrap()[0],
    ///     Value::from("3q2+7w==")
    /// );
    /// # Ok::<(), jsonloom::GeneratorError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`GeneratorError::RangeOutOfBounds`] when the range does
    /// not lie inside `data` (the generator's position is left untouched),
    /// and otherwise in the same positions as
    /// [`write_string`](TreeGenerator::write_string).
    pub fn write_binary(
        &mut self,
        alphabet: &impl Engine,
        data: &[u8],
        offset: usize,
        len: usize,
    ) -> Result<(), GeneratorError> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= data.len())
            .ok_or(GeneratorError::RangeOutOfBounds {
                offset,
                len,
                available: data.len(),
            })?;
        self.write_scalar(
            Value::String(alphabet.encode(&data[offset..end])),
            "write binary",
        )
    }

    /// Rejected: raw text cannot be spliced into an in-memory tree.
    ///
    /// # Errors
    ///
    /// Always fails with [`GeneratorError::Unsupported`].
    pub fn write_raw(&mut self, _text: &str) -> Result<(), GeneratorError> {
        Err(GeneratorError::Unsupported {
            op: "write raw text",
        })
    }

    /// Rejected: pre-encoded text spans cannot be spliced into an
    /// in-memory tree.
    ///
    /// # Errors
    ///
    /// Always fails with [`GeneratorError::Unsupported`].
    pub fn write_raw_utf8(&mut self, _bytes: &[u8]) -> Result<(), GeneratorError> {
        Err(GeneratorError::Unsupported {
            op: "write pre-encoded UTF-8 text",
        })
    }

    /// Rejected: a pre-formatted literal carries no usable numeric width.
    ///
    /// # Errors
    ///
    /// Always fails with [`GeneratorError::Unsupported`].
    pub fn write_number_literal(&mut self, _literal: &str) -> Result<(), GeneratorError> {
        Err(GeneratorError::Unsupported {
            op: "write a pre-formatted number literal",
        })
    }

    /// Does nothing. The generator holds no buffer and no external
    /// resource; the tree is its only state.
    pub fn flush(&mut self) {}

    /// Returns the root of the document, which may still be open; `None`
    /// until the first top-level container is started.
    ///
    /// Repeated calls return the same node.
    #[must_use]
    pub fn root(&self) -> Option<&Value> {
        self.root.as_deref()
    }

    /// Consumes the generator and hands the finished tree to the caller.
    #[must_use]
    pub fn into_root(self) -> Option<Value> {
        self.root.map(|root| *root)
    }

    fn start_container(
        &mut self,
        container: Value,
        opened: State,
        op: &'static str,
    ) -> Result<(), GeneratorError> {
        match self.state {
            State::Empty => {
                let slot = self.place_top_level(container);
                self.push_open(slot, opened);
                Ok(())
            }
            State::Object => Err(GeneratorError::MissingFieldName { op }),
            State::Array => {
                let slot = self.append_slot(container, op)?;
                self.push_open(slot, opened);
                Ok(())
            }
            State::Field => {
                let slot = self.insert_slot(container, op)?;
                self.push_open(slot, opened);
                Ok(())
            }
        }
    }

    fn write_scalar(&mut self, value: Value, op: &'static str) -> Result<(), GeneratorError> {
        match self.state {
            State::Array => {
                self.append_slot(value, op)?;
                Ok(())
            }
            State::Field => {
                self.insert_slot(value, op)?;
                self.state = State::Object;
                Ok(())
            }
            State::Empty | State::Object => Err(self.invalid(op)),
        }
    }

    /// Places a top-level container and returns its slot. The first one
    /// becomes the root; later ones go to `detached`, whose boxes keep the
    /// slot addresses stable.
    fn place_top_level(&mut self, container: Value) -> NonNull<Value> {
        if self.root.is_none() {
            let slot = self.root.insert(Box::new(container));
            NonNull::from(slot.as_mut())
        } else {
            self.detached.push(Box::new(container));
            let last = self.detached.len() - 1;
            NonNull::from(self.detached[last].as_mut())
        }
    }

    /// Appends `value` to the array on top of the cursor stack and returns
    /// the new element's slot.
    fn append_slot(
        &mut self,
        value: Value,
        op: &'static str,
    ) -> Result<NonNull<Value>, GeneratorError> {
        let state = self.state;
        let Some(Value::Array(items)) = self.top_mut() else {
            // The stack moves in lockstep with `state`; a mismatch here is
            // unreachable, but surfacing it beats corrupting the tree.
            return Err(GeneratorError::InvalidState { op, state });
        };
        let index = items.len();
        items.push(value);
        Ok(NonNull::from(&mut items[index]))
    }

    /// Stores `value` under the pending field name of the object on top of
    /// the cursor stack and returns the entry's slot. A repeated name
    /// replaces the previous value in place.
    fn insert_slot(
        &mut self,
        value: Value,
        op: &'static str,
    ) -> Result<NonNull<Value>, GeneratorError> {
        let state = self.state;
        let Some(name) = self.pending_name.take() else {
            return Err(GeneratorError::InvalidState { op, state });
        };
        let Some(Value::Object(map)) = self.top_mut() else {
            // Failed calls must not consume the pending name either.
            self.pending_name = Some(name);
            return Err(GeneratorError::InvalidState { op, state });
        };
        let slot = map.entry(name).or_insert(Value::Null);
        *slot = value;
        Ok(NonNull::from(slot))
    }

    fn push_open(&mut self, slot: NonNull<Value>, opened: State) {
        self.pending_name = None;
        self.stack.push(slot);
        self.states.push(opened);
        self.state = opened;
    }

    fn pop_open(&mut self) {
        self.pending_name = None;
        self.stack.pop();
        self.states.pop();
        self.state = self.states.last().copied().unwrap_or(State::Empty);
    }

    fn top_mut(&mut self) -> Option<&mut Value> {
        // SAFETY: every stack entry came from `NonNull::from` on a
        // `&mut Value` inside the tree (see `place_top_level`, `append_slot`,
        // and `insert_slot`). It is still valid here because:
        //
        //   * A container's storage is only touched while it is the innermost
        //     open node, so the slots outer entries point at have not moved,
        //     and the `Box`es behind `root` and `detached` pin the top-level
        //     slots.
        //   * We hold `&mut self`, so no other reference into the tree can
        //     exist simultaneously (unique-access rule).
        //
        // Consequently the pointer is non-null, properly aligned, and points
        // to live memory for the duration of this call.
        self.stack.last_mut().map(|slot| unsafe { slot.as_mut() })
    }

    fn invalid(&self, op: &'static str) -> GeneratorError {
        GeneratorError::InvalidState {
            op,
            state: self.state,
        }
    }
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
