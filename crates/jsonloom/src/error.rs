//! The generator's failure type.

use thiserror::Error;

use crate::generator::State;

/// Error returned by [`TreeGenerator`](crate::TreeGenerator) write calls.
///
/// There are exactly two kinds of failure, distinguished by
/// [`is_argument`](GeneratorError::is_argument) and
/// [`is_structural`](GeneratorError::is_structural): an argument the caller
/// got wrong, or an operation that is illegal at the current position in the
/// document. Both are fatal for the document being built: the generator does
/// not roll back or repair its stacks, so after an error the caller should
/// discard it. A failed call mutates nothing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The requested byte range does not lie inside the supplied data.
    #[error("binary range at offset {offset} with length {len} is out of bounds for {available} data bytes")]
    RangeOutOfBounds {
        /// First byte of the requested range.
        offset: usize,
        /// Number of bytes requested.
        len: usize,
        /// Number of bytes actually supplied.
        available: usize,
    },
    /// The operation is not legal in the generator's current state.
    #[error("cannot {op} in state <{state}>")]
    InvalidState {
        /// The attempted operation.
        op: &'static str,
        /// The state the generator was in when the call arrived.
        state: State,
    },
    /// A value was started as an object member while no field name was
    /// pending.
    #[error("cannot {op} as an object member before a field name is written")]
    MissingFieldName {
        /// The attempted operation.
        op: &'static str,
    },
    /// The operation has no meaning when the write target is an in-memory
    /// tree.
    #[error("cannot {op}: not supported when generating an in-memory tree")]
    Unsupported {
        /// The attempted operation.
        op: &'static str,
    },
}

impl GeneratorError {
    /// `true` when the caller passed a degenerate argument. Argument errors
    /// leave the generator exactly as it was, so the document remains
    /// writable; they are still programmer errors and not worth retrying.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::RangeOutOfBounds { .. })
    }

    /// `true` when the call was illegal for the current document structure:
    /// wrong call order, a mismatched close, a value without an open field
    /// or array, or an operation this target never supports.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !self.is_argument()
    }
}
