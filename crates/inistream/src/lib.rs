//! An INI document store with incremental reading and writing.
//!
//! A [`Document`] owns an [`Arena`] holding every section name, key and
//! value. [`StreamReader`] builds a document from input delivered in chunks
//! of any size, and [`StreamWriter`] renders one into output chunks of any
//! size, each suspending between calls without buffering the whole file.
//!
//! ```rust
//! use inistream::{Document, Value};
//!
//! let doc: Document = "[Section]\nKey = \"Value\"\nNumber = 1\n".parse().unwrap();
//! let section = doc.find_section("Section").unwrap();
//! assert_eq!(doc.find_value(section, "Number"), Some(Value::Float(1.0)));
//! assert_eq!(doc.to_string(), "[Section]\nKey = \"Value\"\nNumber = 1\n");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod arena;
mod chunk_utils;
mod document;
mod error;
mod options;
mod reader;
mod value;
mod writer;

#[cfg(feature = "std")]
pub mod driver;

#[cfg(test)]
mod tests;

pub use arena::{Arena, Span, StrSpan};
pub use chunk_utils::{produce_chunks, produce_prefixes};
pub use document::{Document, Pair, PairId, Section, SectionId};
pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use options::DriverOptions;
pub use options::ArenaOptions;
pub use reader::{HeaderFault, PairFault, ReadError, StreamReader};
pub use value::{Value, ValueType};
pub use writer::{Drain, StreamWriter, WriteError};
