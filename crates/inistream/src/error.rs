use alloc::string::String;

use thiserror::Error;

use crate::value::ValueType;

/// Errors raised by [`Document`](crate::Document) and [`Arena`](crate::Arena)
/// operations.
///
/// Every operation that fails with one of these leaves the document exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A handle or argument did not describe something usable: a section or
    /// pair that is not linked into the document, an empty or malformed name,
    /// or an attempt to store [`Value::Invalid`](crate::Value::Invalid).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The arena could not reserve another block.
    #[error("allocation failure: could not reserve {requested} bytes")]
    AllocationFailure {
        /// Size of the block that could not be reserved.
        requested: usize,
    },

    /// A section or key with this name already exists in its container.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),

    /// A typed accessor was used on a pair holding a different type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The type the accessor asked for.
        expected: ValueType,
        /// The type stored in the pair.
        found: ValueType,
    },
}

impl Error {
    /// Returns `true` for errors that abort a stream operation outright.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. } | Self::InvalidArgument(_))
    }
}

/// Shorthand for results of document and arena operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
