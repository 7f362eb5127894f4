//! Incremental INI serializer.
//!
//! Overview
//! - [`StreamWriter`] renders one logical line at a time (a section header
//!   or a pair) into a staging buffer, then copies as much of it as fits
//!   into the caller's output chunk.
//! - When the chunk fills before the staging buffer is flushed, `drain`
//!   returns [`Drain::Continue`]. The writer remembers how far it got, and
//!   the next call with a fresh chunk resumes mid-line.
//! - The document cursor is a pair of indices (section position, next pair
//!   position), so nothing in the writer borrows the document between calls.
//! - Pairs without a value cannot be rendered. The writer steps past them and
//!   reports [`WriteError::InvalidType`]; calling `drain` again continues
//!   with the next pair.

mod float;

use alloc::string::{String, ToString};
use core::fmt;

pub(crate) use float::GeneralFloat;
use thiserror::Error;

use crate::{
    document::{Document, PairId},
    error::Error,
    value::Value,
};

/// Outcome of a successful [`StreamWriter::drain`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// The output chunk is full and more bytes are pending. Call again with
    /// a fresh chunk.
    Continue,
    /// Every section and pair has been written.
    Complete,
}

/// Failures reported by [`StreamWriter::drain`].
#[derive(Error, Debug, PartialEq)]
pub enum WriteError {
    /// A pair without a value was skipped. Recoverable: call `drain` again.
    #[error("pair {key:?} has no value and was skipped")]
    InvalidType {
        /// The skipped pair.
        pair: PairId,
        /// Its key.
        key: String,
    },
    /// The staging buffer could not grow.
    #[error(transparent)]
    Fatal(#[from] Error),
    /// A line could not be formatted.
    #[error("formatting failed")]
    Format(#[from] fmt::Error),
}

impl WriteError {
    /// Returns `true` if the caller may keep draining.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Cursor {
    #[default]
    Start,
    Pairs {
        section: usize,
        next_pair: usize,
    },
    Done,
}

/// Resumable serializer state, threaded by the caller between
/// [`drain`](StreamWriter::drain) calls.
///
/// ```rust
/// use inistream::{Document, Drain, StreamWriter};
///
/// let doc: Document = "[Section]\nKey = \"Value\"\n".parse().unwrap();
/// let mut writer = StreamWriter::new();
/// let mut rendered = Vec::new();
/// loop {
///     let mut chunk = [0u8; 4];
///     let mut out = &mut chunk[..];
///     let status = writer.drain(&doc, &mut out).unwrap();
///     let written = 4 - out.len();
///     rendered.extend_from_slice(&chunk[..written]);
///     if status == Drain::Complete {
///         break;
///     }
/// }
/// assert_eq!(rendered, b"[Section]\nKey = \"Value\"\n");
/// ```
#[derive(Debug, Default)]
pub struct StreamWriter {
    staging: String,
    flushed: usize,
    cursor: Cursor,
}

impl StreamWriter {
    /// Create a writer positioned before the first section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind to the start, dropping any staged bytes.
    pub fn reset(&mut self) {
        self.staging.clear();
        self.flushed = 0;
        self.cursor = Cursor::Start;
    }

    /// Bytes rendered but not yet copied out.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.staging.len() - self.flushed
    }

    /// Write as much of `doc` as fits into `out`, advancing `out` past the
    /// bytes written.
    ///
    /// The document must not change structurally while a rendering is in
    /// progress; the writer addresses it by position.
    ///
    /// # Errors
    ///
    /// - [`WriteError::InvalidType`] after skipping a pair without a value.
    ///   The writer has already moved past it.
    /// - [`WriteError::Fatal`] if the staging buffer cannot grow.
    pub fn drain(&mut self, doc: &Document, out: &mut &mut [u8]) -> Result<Drain, WriteError> {
        loop {
            let pending = &self.staging.as_bytes()[self.flushed..];
            if !pending.is_empty() {
                let n = pending.len().min(out.len());
                let (head, tail) = core::mem::take(out).split_at_mut(n);
                head.copy_from_slice(&pending[..n]);
                *out = tail;
                self.flushed += n;
                if self.flushed < self.staging.len() {
                    return Ok(Drain::Continue);
                }
            }
            self.staging.clear();
            self.flushed = 0;

            if !self.render_next(doc)? {
                return Ok(Drain::Complete);
            }
        }
    }

    /// Stage the next line. Returns `false` once the document is exhausted.
    fn render_next(&mut self, doc: &Document) -> Result<bool, WriteError> {
        let (section, next_pair) = match self.cursor {
            Cursor::Start => return self.begin_section(doc, 0),
            Cursor::Pairs { section, next_pair } => (section, next_pair),
            Cursor::Done => return Ok(false),
        };

        let Some(section_id) = doc.section_at(section) else {
            self.cursor = Cursor::Done;
            return Ok(false);
        };
        let Some(pair) = doc.pair_at(section_id, next_pair) else {
            return self.begin_section(doc, section + 1);
        };
        self.cursor = Cursor::Pairs {
            section,
            next_pair: next_pair + 1,
        };

        let key = doc.key(pair)?;
        let value = doc.value(pair)?;
        if value.is_invalid() {
            tracing::debug!(key, "skipping pair without a value");
            return Err(WriteError::InvalidType {
                pair,
                key: key.to_string(),
            });
        }

        self.stage(key.len() + VALUE_ESTIMATE)?;
        write_pair(&mut self.staging, key, value)?;
        Ok(true)
    }

    fn begin_section(&mut self, doc: &Document, section: usize) -> Result<bool, WriteError> {
        let Some(section_id) = doc.section_at(section) else {
            self.cursor = Cursor::Done;
            return Ok(false);
        };
        self.cursor = Cursor::Pairs {
            section,
            next_pair: 0,
        };

        let name = doc.section_name(section_id)?;
        self.stage(name.len() + 3)?;
        write_header(&mut self.staging, name)?;
        Ok(true)
    }

    fn stage(&mut self, additional: usize) -> Result<(), Error> {
        self.staging
            .try_reserve(additional)
            .map_err(|_| Error::AllocationFailure {
                requested: additional,
            })
    }
}

/// Room for the separator, quotes, newline and a rendered float.
const VALUE_ESTIMATE: usize = 32;

/// Write `[name]` and a newline.
pub(crate) fn write_header<W: fmt::Write + ?Sized>(out: &mut W, name: &str) -> fmt::Result {
    writeln!(out, "[{name}]")
}

/// Write `key = value` and a newline. Nothing is written for a pair without
/// a value.
pub(crate) fn write_pair<W: fmt::Write + ?Sized>(
    out: &mut W,
    key: &str,
    value: Value<'_>,
) -> fmt::Result {
    match value {
        Value::Invalid => Ok(()),
        Value::String(s) => writeln!(out, "{key} = \"{s}\""),
        Value::Float(f) => writeln!(out, "{key} = {}", GeneralFloat(f)),
        Value::Int(i) => writeln!(out, "{key} = {i}"),
    }
}

#[cfg(test)]
mod tests;
