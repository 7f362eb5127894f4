//! Incremental INI reader.
//!
//! Overview
//! - [`StreamReader`] consumes input in arbitrary chunks and applies each
//!   complete line to a [`Document`] as soon as its newline arrives.
//! - A line that lies entirely inside the current chunk is applied straight
//!   from the chunk. Only a line that straddles chunks is copied into the
//!   line buffer, which carries it over to the next `feed`.
//! - Chunk boundaries never complete a line. The last line of an input that
//!   does not end in a newline is applied by [`StreamReader::finish`]. This
//!   makes the resulting document independent of how the input was split.
//! - Each line is validated as a whole before the document is touched, so a
//!   rejected line leaves no trace, and UTF-8 sequences split across chunks
//!   are handled for free.
//!
//! Grammar, per line, after leading whitespace (space, tab, CR):
//! - empty, or starting with `#`: ignored
//! - `[name]` plus optional whitespace: section header
//! - `key = value`: pair in the last section. A value wrapped in `"` is a
//!   string, anything else must be a float literal. An unquoted value that
//!   does not parse as a whole, such as `abc` or `12abc`, rejects the line
//!   with [`PairFault::InvalidNumber`] rather than storing `0` or the numeric
//!   prefix.

mod error;

use alloc::vec::Vec;

use bstr::ByteSlice;
pub use error::{HeaderFault, PairFault, ReadError};

use crate::{document::Document, error::Error, value::Value};

/// Resumable reader state, threaded by the caller between
/// [`feed`](StreamReader::feed) calls.
///
/// ```rust
/// use inistream::{Document, StreamReader};
///
/// let mut doc = Document::new();
/// let mut reader = StreamReader::new();
/// for chunk in ["[Sec", "tion]\nKey = \"Va", "lue\"\nNumber = 1"] {
///     let mut input = chunk.as_bytes();
///     reader.feed(&mut doc, &mut input).unwrap();
/// }
/// reader.finish(&mut doc).unwrap();
///
/// let section = doc.find_section("Section").unwrap();
/// assert_eq!(doc.find_string(section, "Key").unwrap(), Some("Value"));
/// assert_eq!(doc.find_float(section, "Number").unwrap(), Some(1.0));
/// ```
#[derive(Debug, Default)]
pub struct StreamReader {
    line: Vec<u8>,
    lines_read: usize,
}

impl StreamReader {
    /// Create a reader at the start of an input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines applied or rejected so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Bytes of an incomplete line carried over from earlier chunks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.line.len()
    }

    /// Consume `input`, applying every line it completes to `doc`.
    ///
    /// On success all of `input` has been consumed. On error `input` is left
    /// pointing just past the offending line, so a caller that recovers can
    /// pass the same slice again.
    ///
    /// # Errors
    ///
    /// - [`ReadError::SectionHeader`] or [`ReadError::Pair`] for a malformed
    ///   line. Recoverable.
    /// - [`ReadError::Fatal`] if the document or the line buffer could not
    ///   grow.
    pub fn feed(&mut self, doc: &mut Document, input: &mut &[u8]) -> Result<(), ReadError> {
        while !input.is_empty() {
            let current = *input;
            let Some(end) = memchr::memchr(b'\n', current) else {
                self.carry(current)?;
                *input = &[];
                break;
            };
            let line = &current[..end];
            *input = &current[end + 1..];

            if self.line.is_empty() {
                self.apply(doc, line)?;
            } else {
                self.carry(line)?;
                let line = core::mem::take(&mut self.line);
                let result = self.apply(doc, &line);
                self.line = line;
                self.line.clear();
                result?;
            }
        }
        Ok(())
    }

    /// Apply a final line that was not terminated by a newline.
    ///
    /// # Errors
    ///
    /// As [`StreamReader::feed`].
    pub fn finish(&mut self, doc: &mut Document) -> Result<(), ReadError> {
        if self.line.is_empty() {
            return Ok(());
        }
        let line = core::mem::take(&mut self.line);
        let result = self.apply(doc, &line);
        self.line = line;
        self.line.clear();
        result
    }

    /// Drop any carried-over bytes and restart line numbering.
    pub fn reset(&mut self) {
        self.line.clear();
        self.lines_read = 0;
    }

    fn carry(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.line
            .try_reserve(bytes.len())
            .map_err(|_| Error::AllocationFailure {
                requested: bytes.len(),
            })?;
        self.line.extend_from_slice(bytes);
        Ok(())
    }

    fn apply(&mut self, doc: &mut Document, line: &[u8]) -> Result<(), ReadError> {
        self.lines_read += 1;
        let number = self.lines_read;
        let result = apply_line(doc, line, number);
        match &result {
            Ok(()) => tracing::trace!(line = number, "applied line"),
            Err(err) => tracing::debug!(line = number, error = %err, "rejected line"),
        }
        result
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn apply_line(doc: &mut Document, line: &[u8], number: usize) -> Result<(), ReadError> {
    let line = line.trim_start_with(is_blank);
    match line.first() {
        None | Some(b'#') => Ok(()),
        Some(b'[') => apply_header(doc, &line[1..]).map_err(|fault| match fault {
            Fault::Grammar(fault) => ReadError::SectionHeader {
                line: number,
                fault,
            },
            Fault::Fatal(err) => ReadError::Fatal(err),
        }),
        Some(_) => apply_pair(doc, line).map_err(|fault| match fault {
            Fault::Grammar(fault) => ReadError::Pair {
                line: number,
                fault,
            },
            Fault::Fatal(err) => ReadError::Fatal(err),
        }),
    }
}

enum Fault<F> {
    Grammar(F),
    Fatal(Error),
}

impl<F> From<F> for Fault<F> {
    fn from(fault: F) -> Self {
        Self::Grammar(fault)
    }
}

fn apply_header(doc: &mut Document, rest: &[u8]) -> Result<(), Fault<HeaderFault>> {
    let close = rest.find_byte(b']').ok_or(HeaderFault::Unterminated)?;
    if !rest[close + 1..].trim_with(is_blank).is_empty() {
        return Err(HeaderFault::TrailingCharacters.into());
    }
    let name = rest[..close]
        .to_str()
        .map_err(|_| HeaderFault::InvalidUtf8)?;
    if name.is_empty() {
        return Err(HeaderFault::EmptyName.into());
    }

    match doc.add_section(name) {
        Ok(_) => Ok(()),
        Err(Error::DuplicateKey(_)) => Err(HeaderFault::Duplicate.into()),
        Err(err) => Err(Fault::Fatal(err)),
    }
}

fn apply_pair(doc: &mut Document, line: &[u8]) -> Result<(), Fault<PairFault>> {
    let section = doc.last_section().ok_or(PairFault::NoSection)?;
    let separator = line.find_byte(b'=').ok_or(PairFault::MissingSeparator)?;

    let key = line[..separator]
        .trim_with(is_blank)
        .to_str()
        .map_err(|_| PairFault::InvalidUtf8)?;
    if key.is_empty() {
        return Err(PairFault::EmptyKey.into());
    }
    let raw = line[separator + 1..]
        .trim_with(is_blank)
        .to_str()
        .map_err(|_| PairFault::InvalidUtf8)?;

    let value = match raw.strip_prefix('"') {
        Some(quoted) => Value::String(
            quoted
                .strip_suffix('"')
                .ok_or(PairFault::UnterminatedString)?,
        ),
        None => Value::Float(raw.parse().map_err(|_| PairFault::InvalidNumber)?),
    };

    match doc.add_value(section, key, value) {
        Ok(_) => Ok(()),
        Err(Error::DuplicateKey(_)) => Err(PairFault::Duplicate.into()),
        Err(err) => Err(Fault::Fatal(err)),
    }
}
