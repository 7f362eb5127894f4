//! File driver: moves fixed-size buffers between `std::io` and the stream
//! engine.
//!
//! Reading is best effort. A malformed section header is replaced by a
//! placeholder section (`ParseFailed_0`, `ParseFailed_1`, ...) so that the
//! pairs following it still have a home, and a malformed pair line is
//! skipped. Both are recorded in the returned [`ReadReport`]. Only I/O
//! errors and arena exhaustion abort a read.

use alloc::{format, string::String, vec, vec::Vec};
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use thiserror::Error;

use crate::{
    document::Document,
    error::Error,
    options::DriverOptions,
    reader::{ReadError, StreamReader},
    writer::{Drain, StreamWriter, WriteError},
};

/// Failures that abort a driver operation.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Reading or writing the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The document could not be updated or rendered.
    #[error(transparent)]
    Fatal(#[from] Error),
}

/// What a best-effort read had to repair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Placeholder sections created for malformed headers, in order.
    pub placeholders: Vec<String>,
    /// Line numbers of skipped pair lines.
    pub skipped_pairs: Vec<usize>,
}

impl ReadReport {
    /// Returns `true` if the input had no malformed lines.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.placeholders.is_empty() && self.skipped_pairs.is_empty()
    }
}

/// What a write had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Keys of pairs skipped because they hold no value.
    pub skipped_keys: Vec<String>,
}

/// Read a document from `source`, repairing malformed lines.
///
/// # Errors
///
/// [`DriverError::Io`] if `source` fails, [`DriverError::Fatal`] if the
/// document cannot grow.
pub fn read_from<R: Read>(
    mut source: R,
    options: &DriverOptions,
) -> Result<(Document, ReadReport), DriverError> {
    let mut doc = Document::with_options(options.arena);
    let mut reader = StreamReader::new();
    let mut report = ReadReport::default();
    let mut buffer = vec![0u8; options.buffer_size.max(1)];

    loop {
        let read = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };

        let mut input = &buffer[..read];
        while let Err(err) = reader.feed(&mut doc, &mut input) {
            recover(&mut doc, &mut report, options, err)?;
        }
    }
    if let Err(err) = reader.finish(&mut doc) {
        recover(&mut doc, &mut report, options, err)?;
    }

    tracing::debug!(
        sections = doc.len(),
        lines = reader.lines_read(),
        placeholders = report.placeholders.len(),
        skipped_pairs = report.skipped_pairs.len(),
        "read document"
    );
    Ok((doc, report))
}

fn recover(
    doc: &mut Document,
    report: &mut ReadReport,
    options: &DriverOptions,
    err: ReadError,
) -> Result<(), DriverError> {
    match err {
        ReadError::SectionHeader { line, fault } => {
            let mut counter = report.placeholders.len();
            let name = loop {
                let name = format!("{}{counter}", options.placeholder_prefix);
                if doc.find_section(&name).is_none() {
                    break name;
                }
                counter += 1;
            };
            doc.add_section(&name)?;
            tracing::warn!(line, %fault, placeholder = %name, "replaced malformed section header");
            report.placeholders.push(name);
        }
        ReadError::Pair { line, fault } => {
            tracing::warn!(line, %fault, "skipped malformed pair");
            report.skipped_pairs.push(line);
        }
        ReadError::Fatal(err) => return Err(err.into()),
    }
    Ok(())
}

/// Write `doc` to `sink` through a fixed-size buffer.
///
/// # Errors
///
/// [`DriverError::Io`] if `sink` fails, [`DriverError::Fatal`] if the
/// staging buffer cannot grow.
pub fn write_to<W: Write>(
    doc: &Document,
    mut sink: W,
    options: &DriverOptions,
) -> Result<WriteReport, DriverError> {
    let mut writer = StreamWriter::new();
    let mut report = WriteReport::default();
    let mut buffer = vec![0u8; options.buffer_size.max(1)];

    loop {
        let mut out = &mut buffer[..];
        let status = loop {
            match writer.drain(doc, &mut out) {
                Ok(status) => break status,
                Err(WriteError::InvalidType { key, .. }) => {
                    tracing::warn!(key = %key, "skipped pair without a value");
                    report.skipped_keys.push(key);
                }
                Err(WriteError::Fatal(err)) => return Err(err.into()),
                Err(WriteError::Format(err)) => return Err(io::Error::other(err).into()),
            }
        };
        let remaining = out.len();
        let written = buffer.len() - remaining;
        sink.write_all(&buffer[..written])?;
        if status == Drain::Complete {
            break;
        }
    }
    sink.flush()?;
    Ok(report)
}

/// Read the file at `path`. See [`read_from`].
///
/// # Errors
///
/// As [`read_from`], plus failures opening the file.
pub fn read_file(
    path: impl AsRef<Path>,
    options: &DriverOptions,
) -> Result<(Document, ReadReport), DriverError> {
    read_from(File::open(path)?, options)
}

/// Create or truncate the file at `path` and write `doc` to it. See
/// [`write_to`].
///
/// # Errors
///
/// As [`write_to`], plus failures creating the file.
pub fn write_file(
    doc: &Document,
    path: impl AsRef<Path>,
    options: &DriverOptions,
) -> Result<WriteReport, DriverError> {
    write_to(doc, File::create(path)?, options)
}
