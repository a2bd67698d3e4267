//! Allocation handles and rewind checkpoints.
//!
//! An [`ArenaHandle`] encodes the physical location of an allocation within
//! the block chain. Blocks never move, so a handle resolves to the same
//! storage for as long as the allocation is live.

use std::fmt;

/// Physical location of an allocation within the arena.
///
/// Handles are plain values: copying one does not copy the storage it
/// names. They encode enough information to resolve a `&[f32]` in O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArenaHandle {
    /// Index of the block in the chain.
    pub(crate) block: u16,
    /// Element offset within the block.
    pub(crate) offset: u32,
    /// Length of the allocation in f32 elements.
    pub(crate) len: u32,
}

impl ArenaHandle {
    pub(crate) fn new(block: u16, offset: u32, len: u32) -> Self {
        Self { block, offset, len }
    }

    /// Index of the block holding this allocation.
    pub fn block(&self) -> u16 {
        self.block
    }

    /// Element offset of the allocation within its block.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the allocation in f32 elements.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The checkpoint marking the start of this allocation.
    ///
    /// Rewinding to it releases this allocation and everything made after it.
    pub fn watermark(&self) -> Checkpoint {
        Checkpoint {
            block: self.block,
            offset: self.offset,
        }
    }

    /// Whether two handles name at least one common element.
    ///
    /// Zero-length handles overlap nothing.
    pub fn overlaps(&self, other: &ArenaHandle) -> bool {
        self.block == other.block
            && !self.is_empty()
            && !other.is_empty()
            && self.offset < other.end()
            && other.offset < self.end()
    }

    pub(crate) fn start(&self) -> usize {
        self.offset as usize
    }

    pub(crate) fn end(&self) -> u32 {
        self.offset + self.len
    }
}

impl fmt::Display for ArenaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArenaHandle(block={}, off={}, len={})",
            self.block, self.offset, self.len
        )
    }
}

/// A position in the block chain to rewind to.
///
/// Checkpoints order by block, then offset, which is also allocation
/// order: allocation only ever moves forward through the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint {
    pub(crate) block: u16,
    pub(crate) offset: u32,
}

impl Checkpoint {
    /// The position of an empty arena.
    pub const START: Checkpoint = Checkpoint {
        block: 0,
        offset: 0,
    };

    /// Index of the block this checkpoint points into.
    pub fn block(&self) -> u16 {
        self.block
    }

    /// Element offset within the block.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.offset)
    }
}
