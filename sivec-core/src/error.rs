//! Error type shared by the whole crate.

use crate::dimensions::SiDimensions;

/// Result alias used throughout `sivec-core`.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Contract violations reported by the quantity engine.
///
/// Every variant is a deterministic, non-retryable programming error:
/// operations fail before touching any state, and the receiver is left
/// unchanged. Floating-point edge cases (division by zero, overflow) are
/// *not* errors; they follow IEEE-754 semantics and propagate as data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// An element index outside `[0, len)`.
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Length of the vector accessed.
        len: usize,
    },

    /// A sparse-map key at or beyond the declared vector size.
    #[error("sparse index {index} outside declared size {size}")]
    InvalidSparseIndex {
        /// Offending map key.
        index: usize,
        /// Declared vector size.
        size: usize,
    },

    /// The same index appeared twice in a sparse index→value mapping.
    #[error("duplicate sparse index {index}")]
    DuplicateSparseIndex {
        /// Repeated map key.
        index: usize,
    },

    /// Binary operation between vectors of different length.
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A mutating call on an immutable vector.
    #[error("immutability violation: vector is read-only")]
    ImmutabilityViolation,

    /// A unit or cast whose SI dimensions differ from the required ones.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensions required by the operation.
        expected: SiDimensions,
        /// Dimensions actually supplied.
        found: SiDimensions,
    },

    /// A dimension signature string that does not follow the canonical grammar.
    #[error("cannot parse dimension signature {input:?}: {reason}")]
    UnitParse {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}
