//! The document model: ordered sections of ordered key/value pairs.
//!
//! Every name, key and value payload is copied into the document's
//! [`Arena`]. Sections and pairs are records in append-only tables addressed
//! by [`SectionId`] and [`PairId`]; removing one only unlinks it from its
//! owner's ordered list, the record and its arena bytes stay until the whole
//! document is dropped.

use alloc::{string::ToString, vec::Vec};
use core::fmt;

use crate::{
    arena::{Arena, StrSpan},
    error::{Error, Result},
    options::ArenaOptions,
    reader::{ReadError, StreamReader},
    value::{Stored, Value, ValueType},
    writer,
};

/// Handle to a section of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u32);

/// Handle to a pair of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(u32);

#[derive(Debug)]
struct SectionRecord {
    name: StrSpan,
    pairs: Vec<PairId>,
    linked: bool,
}

#[derive(Debug)]
struct PairRecord {
    key: StrSpan,
    value: Stored,
    linked: bool,
}

/// An INI document backed by a single arena.
///
/// ```rust
/// use inistream::Document;
///
/// let mut doc = Document::new();
/// let section = doc.add_section("Section").unwrap();
/// doc.add_string(section, "Key", "Value").unwrap();
/// doc.add_float(section, "Number", 1.0).unwrap();
///
/// assert_eq!(doc.to_string(), "[Section]\nKey = \"Value\"\nNumber = 1\n");
/// ```
pub struct Document {
    arena: Arena,
    sections: Vec<SectionRecord>,
    pairs: Vec<PairRecord>,
    order: Vec<SectionId>,
}

impl Document {
    /// Create an empty document with a default arena.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ArenaOptions::default())
    }

    /// Create an empty document whose arena uses `options`.
    #[must_use]
    pub fn with_options(options: ArenaOptions) -> Self {
        Self {
            arena: Arena::new(options),
            sections: Vec::new(),
            pairs: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Parse a complete text, failing on the first malformed line.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReadError`] the reader reports.
    pub fn parse(text: &str) -> Result<Self, ReadError> {
        let mut doc = Self::new();
        let mut reader = StreamReader::new();
        let mut input = text.as_bytes();
        reader.feed(&mut doc, &mut input)?;
        reader.finish(&mut doc)?;
        Ok(doc)
    }

    /// The arena owning this document's data.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Number of linked sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // --------------------------------------------------------------------------------------------
    // Sections
    // --------------------------------------------------------------------------------------------

    /// Find the section named `name`.
    #[must_use]
    pub fn find_section(&self, name: &str) -> Option<SectionId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.arena.str(self.sections[id.0 as usize].name) == name)
    }

    /// Append a new, empty section.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` is empty or contains `]` or a
    ///   newline.
    /// - [`Error::DuplicateKey`] if a section named `name` exists.
    /// - [`Error::AllocationFailure`] if the arena is exhausted.
    pub fn add_section(&mut self, name: &str) -> Result<SectionId> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("section name is empty"));
        }
        if name.contains([']', '\n']) {
            return Err(Error::InvalidArgument(
                "section name contains ']' or a newline",
            ));
        }
        if self.find_section(name).is_some() {
            return Err(Error::DuplicateKey(name.to_string()));
        }

        let id = SectionId(next_index(self.sections.len())?);
        reserve_one(&mut self.sections)?;
        reserve_one(&mut self.order)?;
        let name = self.arena.alloc_str(name)?;

        self.sections.push(SectionRecord {
            name,
            pairs: Vec::new(),
            linked: true,
        });
        self.order.push(id);
        Ok(id)
    }

    /// Unlink a section and its pairs from the document. Their arena storage
    /// is not reclaimed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the section is not linked into this
    /// document.
    pub fn remove_section(&mut self, section: SectionId) -> Result<()> {
        let position = self
            .order
            .iter()
            .position(|id| *id == section)
            .ok_or(Error::InvalidArgument("section is not part of this document"))?;
        self.order.remove(position);
        let record = &mut self.sections[section.0 as usize];
        record.linked = false;
        for pair in &record.pairs {
            self.pairs[pair.0 as usize].linked = false;
        }
        Ok(())
    }

    /// The section at `section`, if it is linked.
    #[must_use]
    pub fn section(&self, section: SectionId) -> Option<Section<'_>> {
        self.section_record(section).ok().map(|_| Section {
            doc: self,
            id: section,
        })
    }

    /// The most recently appended linked section.
    #[must_use]
    pub fn last_section(&self) -> Option<SectionId> {
        self.order.last().copied()
    }

    /// Iterate the sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.order.iter().map(move |id| Section { doc: self, id: *id })
    }

    /// Name of a section.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the section is not linked.
    pub fn section_name(&self, section: SectionId) -> Result<&str> {
        Ok(self.arena.str(self.section_record(section)?.name))
    }

    pub(crate) fn section_at(&self, index: usize) -> Option<SectionId> {
        self.order.get(index).copied()
    }

    pub(crate) fn pair_at(&self, section: SectionId, index: usize) -> Option<PairId> {
        self.sections
            .get(section.0 as usize)
            .and_then(|record| record.pairs.get(index))
            .copied()
    }

    // --------------------------------------------------------------------------------------------
    // Pairs
    // --------------------------------------------------------------------------------------------

    /// Find the pair keyed `key` in `section`.
    #[must_use]
    pub fn find_pair(&self, section: SectionId, key: &str) -> Option<PairId> {
        let record = self.section_record(section).ok()?;
        record
            .pairs
            .iter()
            .copied()
            .find(|id| self.arena.str(self.pairs[id.0 as usize].key) == key)
    }

    /// Append a pair without a value. Its type is [`ValueType::Invalid`]
    /// until one of the setters is called.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the section is not linked, or `key` is
    ///   empty, contains `=` or a newline, starts with `#` or `[`, or has
    ///   leading or trailing whitespace. Such keys would not read back.
    /// - [`Error::DuplicateKey`] if `key` exists in the section.
    /// - [`Error::AllocationFailure`] if the arena is exhausted.
    pub fn add_pair(&mut self, section: SectionId, key: &str) -> Result<PairId> {
        self.insert_pair(section, key, Value::Invalid)
    }

    /// Unlink `pair` from `section`. Its arena storage is not reclaimed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the section is not linked or `pair` is
    /// not one of its pairs.
    pub fn remove_pair(&mut self, section: SectionId, pair: PairId) -> Result<()> {
        self.section_record(section)?;
        let record = &mut self.sections[section.0 as usize];
        let position = record
            .pairs
            .iter()
            .position(|id| *id == pair)
            .ok_or(Error::InvalidArgument("pair is not part of this section"))?;
        record.pairs.remove(position);
        self.pairs[pair.0 as usize].linked = false;
        Ok(())
    }

    /// Find and unlink the pair keyed `key` in `section`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the section is not linked or holds no
    /// such key.
    pub fn find_and_remove_pair(&mut self, section: SectionId, key: &str) -> Result<()> {
        let pair = self
            .find_pair(section, key)
            .ok_or(Error::InvalidArgument("no pair with this key"))?;
        self.remove_pair(section, pair)
    }

    /// Iterate the pairs of `section` in declaration order. Empty if the
    /// section is not linked.
    pub fn pairs(&self, section: SectionId) -> impl Iterator<Item = Pair<'_>> {
        let ids: &[PairId] = match self.section_record(section) {
            Ok(record) => &record.pairs,
            Err(_) => &[],
        };
        ids.iter().map(move |id| Pair { doc: self, id: *id })
    }

    /// Key of a pair.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the pair is not linked.
    pub fn key(&self, pair: PairId) -> Result<&str> {
        Ok(self.arena.str(self.pair_record(pair)?.key))
    }

    // --------------------------------------------------------------------------------------------
    // Values
    // --------------------------------------------------------------------------------------------

    /// Value of a pair, of whatever type is stored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the pair is not linked.
    pub fn value(&self, pair: PairId) -> Result<Value<'_>> {
        Ok(self.pair_record(pair)?.value.load(&self.arena))
    }

    /// Value of the pair keyed `key` in `section`, if there is one.
    #[must_use]
    pub fn find_value(&self, section: SectionId, key: &str) -> Option<Value<'_>> {
        let pair = self.find_pair(section, key)?;
        self.value(pair).ok()
    }

    /// Append a pair holding `value`.
    ///
    /// # Errors
    ///
    /// As [`Document::add_pair`], plus [`Error::InvalidArgument`] when
    /// `value` is [`Value::Invalid`] or a string containing a newline. The
    /// document is unchanged on error.
    pub fn add_value(&mut self, section: SectionId, key: &str, value: Value<'_>) -> Result<PairId> {
        if value.is_invalid() {
            return Err(Error::InvalidArgument("cannot store an invalid value"));
        }
        self.insert_pair(section, key, value)
    }

    /// Replace the value of a pair.
    ///
    /// Storing a float over a float (or an int over an int) rewrites the
    /// existing arena bytes; anything else allocates fresh storage.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the pair is not linked, or `value` is
    /// [`Value::Invalid`] or a string containing a newline.
    pub fn set_value(&mut self, pair: PairId, value: Value<'_>) -> Result<()> {
        let previous = self.pair_record(pair)?.value;
        let stored = self.store(previous, value)?;
        self.pairs[pair.0 as usize].value = stored;
        Ok(())
    }

    /// Replace the value of the pair keyed `key` in `section`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there is no such pair, otherwise as
    /// [`Document::set_value`].
    pub fn find_and_set_value(
        &mut self,
        section: SectionId,
        key: &str,
        value: Value<'_>,
    ) -> Result<()> {
        let pair = self
            .find_pair(section, key)
            .ok_or(Error::InvalidArgument("no pair with this key"))?;
        self.set_value(pair, value)
    }

    /// String value of a pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold a string.
    pub fn get_string(&self, pair: PairId) -> Result<&str> {
        match self.value(pair)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch(ValueType::String, &other)),
        }
    }

    /// Float value of a pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold a float.
    pub fn get_float(&self, pair: PairId) -> Result<f64> {
        match self.value(pair)? {
            Value::Float(f) => Ok(f),
            other => Err(mismatch(ValueType::Float, &other)),
        }
    }

    /// Integer value of a pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold an integer.
    pub fn get_int(&self, pair: PairId) -> Result<i64> {
        match self.value(pair)? {
            Value::Int(i) => Ok(i),
            other => Err(mismatch(ValueType::Int, &other)),
        }
    }

    /// String value of the pair keyed `key`, `None` if there is no such pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold a string.
    pub fn find_string(&self, section: SectionId, key: &str) -> Result<Option<&str>> {
        self.find_pair(section, key)
            .map(|pair| self.get_string(pair))
            .transpose()
    }

    /// Float value of the pair keyed `key`, `None` if there is no such pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold a float.
    pub fn find_float(&self, section: SectionId, key: &str) -> Result<Option<f64>> {
        self.find_pair(section, key)
            .map(|pair| self.get_float(pair))
            .transpose()
    }

    /// Integer value of the pair keyed `key`, `None` if there is no such pair.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the pair does not hold an integer.
    pub fn find_int(&self, section: SectionId, key: &str) -> Result<Option<i64>> {
        self.find_pair(section, key)
            .map(|pair| self.get_int(pair))
            .transpose()
    }

    /// Append a string pair. See [`Document::add_value`].
    ///
    /// # Errors
    ///
    /// As [`Document::add_value`].
    pub fn add_string(&mut self, section: SectionId, key: &str, value: &str) -> Result<PairId> {
        self.add_value(section, key, Value::String(value))
    }

    /// Append a float pair. See [`Document::add_value`].
    ///
    /// # Errors
    ///
    /// As [`Document::add_value`].
    pub fn add_float(&mut self, section: SectionId, key: &str, value: f64) -> Result<PairId> {
        self.add_value(section, key, Value::Float(value))
    }

    /// Append an integer pair. See [`Document::add_value`].
    ///
    /// Integers render as plain decimals, which the reader reads back as
    /// floats: `n = 5` becomes [`Value::Float`]`(5.0)`.
    ///
    /// # Errors
    ///
    /// As [`Document::add_value`].
    pub fn add_int(&mut self, section: SectionId, key: &str, value: i64) -> Result<PairId> {
        self.add_value(section, key, Value::Int(value))
    }

    /// Store a string in a pair. See [`Document::set_value`].
    ///
    /// # Errors
    ///
    /// As [`Document::set_value`].
    pub fn set_string(&mut self, pair: PairId, value: &str) -> Result<()> {
        self.set_value(pair, Value::String(value))
    }

    /// Store a float in a pair. See [`Document::set_value`].
    ///
    /// # Errors
    ///
    /// As [`Document::set_value`].
    pub fn set_float(&mut self, pair: PairId, value: f64) -> Result<()> {
        self.set_value(pair, Value::Float(value))
    }

    /// Store an integer in a pair. See [`Document::set_value`].
    ///
    /// # Errors
    ///
    /// As [`Document::set_value`].
    pub fn set_int(&mut self, pair: PairId, value: i64) -> Result<()> {
        self.set_value(pair, Value::Int(value))
    }

    /// Store a string in the pair keyed `key`.
    ///
    /// # Errors
    ///
    /// As [`Document::find_and_set_value`].
    pub fn find_and_set_string(&mut self, section: SectionId, key: &str, value: &str) -> Result<()> {
        self.find_and_set_value(section, key, Value::String(value))
    }

    /// Store a float in the pair keyed `key`.
    ///
    /// # Errors
    ///
    /// As [`Document::find_and_set_value`].
    pub fn find_and_set_float(&mut self, section: SectionId, key: &str, value: f64) -> Result<()> {
        self.find_and_set_value(section, key, Value::Float(value))
    }

    /// Store an integer in the pair keyed `key`.
    ///
    /// # Errors
    ///
    /// As [`Document::find_and_set_value`].
    pub fn find_and_set_int(&mut self, section: SectionId, key: &str, value: i64) -> Result<()> {
        self.find_and_set_value(section, key, Value::Int(value))
    }

    /// Panic if the record tables disagree with the ordered lists: every
    /// listed section and pair must be linked, listed once, and uniquely
    /// named within its owner.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let mut names = Vec::new();
        for id in &self.order {
            let record = &self.sections[id.0 as usize];
            assert!(record.linked, "listed section {id:?} is unlinked");
            let name = self.arena.str(record.name);
            assert!(!names.contains(&name), "duplicate section {name:?}");
            names.push(name);

            let mut keys = Vec::new();
            for pair in &record.pairs {
                let pair = &self.pairs[pair.0 as usize];
                assert!(pair.linked, "listed pair in {name:?} is unlinked");
                let key = self.arena.str(pair.key);
                assert!(!keys.contains(&key), "duplicate key {key:?} in {name:?}");
                keys.push(key);
            }
        }
        let linked = self.sections.iter().filter(|record| record.linked).count();
        assert_eq!(linked, self.order.len(), "unlisted linked section");
    }

    // --------------------------------------------------------------------------------------------
    // Internals
    // --------------------------------------------------------------------------------------------

    fn section_record(&self, section: SectionId) -> Result<&SectionRecord> {
        self.sections
            .get(section.0 as usize)
            .filter(|record| record.linked)
            .ok_or(Error::InvalidArgument("section is not part of this document"))
    }

    fn pair_record(&self, pair: PairId) -> Result<&PairRecord> {
        self.pairs
            .get(pair.0 as usize)
            .filter(|record| record.linked)
            .ok_or(Error::InvalidArgument("pair is not part of this document"))
    }

    /// Validate everything, allocate, and only then link the new pair, so a
    /// failure leaves the document untouched.
    fn insert_pair(&mut self, section: SectionId, key: &str, value: Value<'_>) -> Result<PairId> {
        self.section_record(section)?;
        if key.is_empty() {
            return Err(Error::InvalidArgument("key is empty"));
        }
        if key.contains(['=', '\n']) {
            return Err(Error::InvalidArgument("key contains '=' or a newline"));
        }
        if key.starts_with(['#', '[']) {
            return Err(Error::InvalidArgument("key starts with '#' or '['"));
        }
        if key.starts_with(BLANKS) || key.ends_with(BLANKS) {
            return Err(Error::InvalidArgument(
                "key has leading or trailing whitespace",
            ));
        }
        if let Value::String(s) = value {
            check_string(s)?;
        }
        if self.find_pair(section, key).is_some() {
            return Err(Error::DuplicateKey(key.to_string()));
        }

        let id = PairId(next_index(self.pairs.len())?);
        reserve_one(&mut self.pairs)?;
        reserve_one(&mut self.sections[section.0 as usize].pairs)?;
        let key = self.arena.alloc_str(key)?;
        let value = match value {
            Value::Invalid => Stored::Invalid,
            value => self.store(Stored::Invalid, value)?,
        };

        self.pairs.push(PairRecord {
            key,
            value,
            linked: true,
        });
        self.sections[section.0 as usize].pairs.push(id);
        Ok(id)
    }

    fn store(&mut self, previous: Stored, value: Value<'_>) -> Result<Stored> {
        Ok(match (previous, value) {
            (_, Value::Invalid) => {
                return Err(Error::InvalidArgument("cannot store an invalid value"));
            }
            (_, Value::String(s)) => {
                check_string(s)?;
                Stored::String(self.arena.alloc_str(s)?)
            }
            (Stored::Float(span), Value::Float(f)) => {
                self.arena.bytes_mut(span).copy_from_slice(&f.to_le_bytes());
                Stored::Float(span)
            }
            (_, Value::Float(f)) => Stored::Float(self.arena.alloc_bytes(&f.to_le_bytes())?),
            (Stored::Int(span), Value::Int(i)) => {
                self.arena.bytes_mut(span).copy_from_slice(&i.to_le_bytes());
                Stored::Int(span)
            }
            (_, Value::Int(i)) => Stored::Int(self.arena.alloc_bytes(&i.to_le_bytes())?),
        })
    }
}

fn mismatch(expected: ValueType, found: &Value<'_>) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.value_type(),
    }
}

/// Characters the reader trims around keys.
const BLANKS: [char; 3] = [' ', '\t', '\r'];

fn check_string(s: &str) -> Result<()> {
    if s.contains('\n') {
        return Err(Error::InvalidArgument("string value contains a newline"));
    }
    Ok(())
}

fn next_index(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::AllocationFailure { requested: len })
}

fn reserve_one<T>(table: &mut Vec<T>) -> Result<()> {
    table
        .try_reserve(1)
        .map_err(|_| Error::AllocationFailure {
            requested: core::mem::size_of::<T>(),
        })
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections().eq(other.sections())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sections()).finish()
    }
}

/// Renders the document in INI syntax. Pairs without a value are skipped.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            writer::write_header(f, section.name())?;
            for pair in section.pairs() {
                writer::write_pair(f, pair.key(), pair.value())?;
            }
        }
        Ok(())
    }
}

impl core::str::FromStr for Document {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Borrowed view of a linked section.
#[derive(Clone, Copy)]
pub struct Section<'a> {
    doc: &'a Document,
    id: SectionId,
}

impl<'a> Section<'a> {
    /// Handle of this section.
    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Section name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.doc
            .arena
            .str(self.doc.sections[self.id.0 as usize].name)
    }

    /// Pairs in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<'a>> + use<'a> {
        let doc = self.doc;
        doc.sections[self.id.0 as usize]
            .pairs
            .iter()
            .map(move |id| Pair { doc, id: *id })
    }

    /// The pair keyed `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Pair<'a>> {
        self.doc
            .find_pair(self.id, key)
            .map(|id| Pair { doc: self.doc, id })
    }

    /// Number of linked pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.sections[self.id.0 as usize].pairs.len()
    }

    /// Returns `true` if the section has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for Section<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.pairs().eq(other.pairs())
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name())
            .field("pairs", &PairsDebug(*self))
            .finish()
    }
}

struct PairsDebug<'a>(Section<'a>);

impl fmt::Debug for PairsDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.pairs().map(|pair| (pair.key(), pair.value())))
            .finish()
    }
}

/// Borrowed view of a linked pair.
#[derive(Clone, Copy)]
pub struct Pair<'a> {
    doc: &'a Document,
    id: PairId,
}

impl<'a> Pair<'a> {
    /// Handle of this pair.
    #[must_use]
    pub fn id(&self) -> PairId {
        self.id
    }

    /// Pair key.
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.doc.arena.str(self.doc.pairs[self.id.0 as usize].key)
    }

    /// Pair value.
    #[must_use]
    pub fn value(&self) -> Value<'a> {
        self.doc.pairs[self.id.0 as usize].value.load(&self.doc.arena)
    }
}

impl PartialEq for Pair<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.value() == other.value()
    }
}

impl fmt::Debug for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("key", &self.key())
            .field("value", &self.value())
            .finish()
    }
}
