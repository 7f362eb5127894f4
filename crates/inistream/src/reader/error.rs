use thiserror::Error;

use crate::error::Error;

/// Failures reported by [`StreamReader`](crate::StreamReader).
///
/// The two grammar variants are recoverable: the offending line has been
/// consumed and discarded, the document is untouched by it, and the caller
/// may keep feeding input. [`ReadError::Fatal`] ends the read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    /// A line starting with `[` is not a well-formed, unused section header.
    #[error("malformed section header at line {line}: {fault}")]
    SectionHeader {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        fault: HeaderFault,
    },
    /// A line is not a well-formed, unused key/value pair.
    #[error("malformed pair at line {line}: {fault}")]
    Pair {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        fault: PairFault,
    },
    /// The document could not be updated.
    #[error(transparent)]
    Fatal(#[from] Error),
}

impl ReadError {
    /// Returns `true` if the caller may keep feeding input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Fatal(_))
    }

    /// Line number of a grammar error.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::SectionHeader { line, .. } | Self::Pair { line, .. } => Some(*line),
            Self::Fatal(_) => None,
        }
    }
}

/// Why a section header was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    /// No closing `]` on the line.
    #[error("missing closing ']'")]
    Unterminated,
    /// Something other than whitespace follows the `]`.
    #[error("unexpected characters after ']'")]
    TrailingCharacters,
    /// `[]`.
    #[error("empty section name")]
    EmptyName,
    /// The name is not valid UTF-8.
    #[error("section name is not valid UTF-8")]
    InvalidUtf8,
    /// A section with this name already exists.
    #[error("duplicate section name")]
    Duplicate,
}

/// Why a pair line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFault {
    /// The pair precedes every section header.
    #[error("pair outside of any section")]
    NoSection,
    /// No `=` on the line.
    #[error("missing '='")]
    MissingSeparator,
    /// Nothing but whitespace before the `=`.
    #[error("empty key")]
    EmptyKey,
    /// A value opening with `"` does not close with one.
    #[error("unterminated string value")]
    UnterminatedString,
    /// An unquoted value is not a floating-point literal.
    #[error("value is neither a quoted string nor a number")]
    InvalidNumber,
    /// The line is not valid UTF-8.
    #[error("pair is not valid UTF-8")]
    InvalidUtf8,
    /// The key already exists in the current section.
    #[error("duplicate key")]
    Duplicate,
}
