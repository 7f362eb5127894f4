//! Pair values.
//!
//! [`Value`] is the borrowed view handed out by the document and accepted by
//! its setters. Internally a pair stores a [`Stored`] tag plus arena spans.

use core::fmt;

use crate::arena::{Arena, Span, StrSpan};

/// The type tag of a pair value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The pair was added without a value.
    Invalid,
    /// A double-quoted string.
    String,
    /// A 64-bit float. Every unquoted value read from a stream is a float.
    Float,
    /// A 64-bit integer. Only produced by the explicit integer setters.
    Int,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "invalid",
            Self::String => "string",
            Self::Float => "float",
            Self::Int => "int",
        })
    }
}

/// A pair value borrowed from a [`Document`](crate::Document).
///
/// # Examples
///
/// ```
/// use inistream::{Document, Value};
///
/// let mut doc = Document::new();
/// let section = doc.add_section("Section").unwrap();
/// let pair = doc.add_value(section, "Key", Value::String("Value")).unwrap();
/// assert_eq!(doc.value(pair).unwrap(), Value::String("Value"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// No value has been set.
    Invalid,
    /// String contents, without quotes.
    String(&'a str),
    /// Floating-point number.
    Float(f64),
    /// Integer set through the explicit integer API.
    Int(i64),
}

impl Value<'_> {
    /// The type tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Invalid => ValueType::Invalid,
            Self::String(_) => ValueType::String,
            Self::Float(_) => ValueType::Float,
            Self::Int(_) => ValueType::Int,
        }
    }

    /// Returns `true` if the value is [`Invalid`].
    ///
    /// [`Invalid`]: Value::Invalid
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Self::String(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

/// Value storage of a pair: the tag plus the arena span holding the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stored {
    Invalid,
    String(StrSpan),
    Float(Span),
    Int(Span),
}

impl Stored {
    pub(crate) fn load(self, arena: &Arena) -> Value<'_> {
        match self {
            Self::Invalid => Value::Invalid,
            Self::String(span) => Value::String(arena.str(span)),
            Self::Float(span) => Value::Float(f64::from_le_bytes(word(arena, span))),
            Self::Int(span) => Value::Int(i64::from_le_bytes(word(arena, span))),
        }
    }
}

fn word(arena: &Arena, span: Span) -> [u8; 8] {
    let mut out = [0; 8];
    out.copy_from_slice(arena.bytes(span));
    out
}
