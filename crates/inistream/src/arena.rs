//! Append-only block arena backing every [`Document`](crate::Document).
//!
//! Overview
//! - Storage is a chain of byte blocks. Each block reserves its capacity once
//!   and is never grown past it, so bytes handed out by the arena never move.
//! - When the newest block cannot fit a request, a new block is chained behind
//!   it. The new block is at least twice the size of the previous one and is
//!   doubled further until the request fits, which keeps the amortized cost
//!   per allocated byte constant.
//! - Allocations are addressed with [`Span`] handles (block index, offset,
//!   length) rather than pointers. Handles stay valid for the lifetime of the
//!   arena and need no fixups.
//! - Nothing is ever freed individually. Dropping the arena releases every
//!   block at once.

use alloc::vec::Vec;

use crate::{
    error::{Error, Result},
    options::ArenaOptions,
};

/// Location of an allocation inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    block: u32,
    start: u32,
    len: u32,
}

impl Span {
    /// Length of the allocation in bytes.
    #[must_use]
    pub fn len(self) -> usize {
        self.len as usize
    }

    /// Returns `true` for zero-length allocations.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// A [`Span`] whose bytes are known to be valid UTF-8.
///
/// Only [`Arena::alloc_str`] creates these, and the underlying [`Span`] is
/// never exposed, so [`Arena::bytes_mut`] cannot reach string bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrSpan(Span);

impl StrSpan {
    /// Length of the text in bytes.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty string.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

/// Bump allocator made of chained, never-relocated blocks.
///
/// ```rust
/// use inistream::{Arena, ArenaOptions};
///
/// let mut arena = Arena::new(ArenaOptions::default());
/// let name = arena.alloc_str("Section").unwrap();
/// let number = arena.alloc_bytes(&1.5f64.to_le_bytes()).unwrap();
/// assert_eq!(arena.str(name), "Section");
/// assert_eq!(arena.bytes(number), &1.5f64.to_le_bytes());
/// ```
#[derive(Debug)]
pub struct Arena {
    blocks: Vec<Vec<u8>>,
    options: ArenaOptions,
    /// Nominal size of the newest block.
    last_block_size: usize,
    reserved: usize,
    allocated: usize,
}

impl Arena {
    /// Create an empty arena. No memory is reserved until the first
    /// allocation.
    #[must_use]
    pub fn new(options: ArenaOptions) -> Self {
        Self {
            blocks: Vec::new(),
            options,
            last_block_size: 0,
            reserved: 0,
            allocated: 0,
        }
    }

    /// Allocate `len` zeroed bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a new block is needed and
    /// cannot be reserved.
    pub fn alloc_zeroed(&mut self, len: usize) -> Result<Span> {
        let (block, start) = self.reserve(len)?;
        self.blocks[block].resize(start + len, 0);
        Ok(self.finish(block, start, len))
    }

    /// Copy `bytes` into the arena.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a new block is needed and
    /// cannot be reserved.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<Span> {
        let (block, start) = self.reserve(bytes.len())?;
        self.blocks[block].extend_from_slice(bytes);
        Ok(self.finish(block, start, bytes.len()))
    }

    /// Copy `text` into the arena.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a new block is needed and
    /// cannot be reserved.
    pub fn alloc_str(&mut self, text: &str) -> Result<StrSpan> {
        self.alloc_bytes(text.as_bytes()).map(StrSpan)
    }

    /// Bytes of an allocation.
    ///
    /// # Panics
    ///
    /// Panics if `span` was not issued by this arena.
    #[must_use]
    pub fn bytes(&self, span: Span) -> &[u8] {
        let start = span.start as usize;
        &self.blocks[span.block as usize][start..start + span.len()]
    }

    /// Mutable bytes of an allocation, for in-place overwrites.
    ///
    /// # Panics
    ///
    /// Panics if `span` was not issued by this arena.
    pub fn bytes_mut(&mut self, span: Span) -> &mut [u8] {
        let start = span.start as usize;
        &mut self.blocks[span.block as usize][start..start + span.len()]
    }

    /// Text of a string allocation.
    ///
    /// # Panics
    ///
    /// Panics if `span` was not issued by this arena.
    #[must_use]
    pub fn str(&self, span: StrSpan) -> &str {
        let bytes = self.bytes(span.0);
        // SAFETY: `StrSpan` is only built by `alloc_str` from a `&str`, and
        // its inner `Span` never leaves this module, so `bytes_mut` cannot
        // overwrite it.
        unsafe { core::str::from_utf8_unchecked(bytes) }
    }

    /// Bytes handed out so far, across every block.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated
    }

    /// Bytes reserved from the system allocator, across every block.
    #[must_use]
    pub fn reserved_bytes(&self) -> usize {
        self.reserved
    }

    /// Number of chained blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Find room for `len` bytes, chaining a new block if the newest one is
    /// too full. Returns the block index and the start offset.
    fn reserve(&mut self, len: usize) -> Result<(usize, usize)> {
        if let Some(last) = self.blocks.last() {
            if last.capacity() - last.len() >= len {
                return Ok((self.blocks.len() - 1, last.len()));
            }
        }

        let size = self.next_block_size(len)?;
        let mut block = Vec::new();
        block
            .try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailure { requested: size })?;
        self.blocks
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure { requested: size })?;

        tracing::debug!(
            block = self.blocks.len(),
            size,
            reserved = self.reserved + size,
            "chaining arena block"
        );

        self.reserved += block.capacity();
        self.last_block_size = size;
        self.blocks.push(block);
        Ok((self.blocks.len() - 1, 0))
    }

    fn next_block_size(&self, len: usize) -> Result<usize> {
        let mut size = if self.blocks.is_empty() {
            self.options.block_size.max(1)
        } else {
            self.last_block_size.saturating_mul(2)
        };
        while size < len {
            size = size.saturating_mul(2);
        }

        if let Some(limit) = self.options.byte_limit {
            let available = limit.saturating_sub(self.reserved);
            if available < len {
                return Err(Error::AllocationFailure { requested: size });
            }
            size = size.min(available);
        }

        if u32::try_from(size).is_err() {
            return Err(Error::AllocationFailure { requested: size });
        }
        Ok(size)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn finish(&mut self, block: usize, start: usize, len: usize) -> Span {
        self.allocated += len;
        // Block sizes are checked against `u32` when the block is reserved.
        Span {
            block: block as u32,
            start: start as u32,
            len: len as u32,
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaOptions::default())
    }
}
