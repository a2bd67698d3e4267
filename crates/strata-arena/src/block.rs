//! Fixed-size memory blocks and the non-moving chain that links them.
//!
//! A [`Block`] is a contiguous `Vec<f32>` with a bump cursor. A
//! [`BlockChain`] appends new blocks when the current one is full; it never
//! resizes or relocates a block, so every live [`ArenaHandle`] keeps
//! resolving to the same storage.

use smallvec::SmallVec;

use crate::error::ArenaError;
use crate::handle::{ArenaHandle, Checkpoint};

const ELEM_BYTES: usize = std::mem::size_of::<f32>();

/// A single contiguous memory block with bump allocation.
///
/// The backing vector is allocated to full capacity at creation and is
/// never grown afterwards.
pub struct Block {
    /// Backing storage.
    data: Vec<f32>,
    /// Bump pointer: next free position (in f32 elements).
    cursor: usize,
}

impl Block {
    /// Create a zero-initialised block of `capacity` f32 elements.
    ///
    /// Uses fallible reservation: an allocator refusal becomes
    /// [`ArenaError::AllocationFailed`] rather than an abort.
    pub fn try_new(capacity: usize) -> Result<Self, ArenaError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArenaError::AllocationFailed {
                requested: capacity.saturating_mul(ELEM_BYTES),
            })?;
        data.resize(capacity, 0.0);
        Ok(Self { data, cursor: 0 })
    }

    /// Bump-allocate `len` f32 elements from this block.
    ///
    /// Returns the starting offset, or `None` if there is insufficient
    /// remaining capacity. The region is zeroed before it is handed out
    /// since it may hold data from a rewound allocation.
    pub fn alloc(&mut self, len: usize) -> Option<usize> {
        let new_cursor = self.cursor.checked_add(len)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let offset = self.cursor;
        self.data[offset..new_cursor].fill(0.0);
        self.cursor = new_cursor;
        Some(offset)
    }

    /// Move the bump pointer back to `offset`.
    ///
    /// Callers guarantee `offset <= used()`.
    pub(crate) fn rewind_to(&mut self, offset: usize) {
        debug_assert!(offset <= self.cursor);
        self.cursor = offset;
    }

    /// Number of f32 elements currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in f32 elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in f32 elements.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * ELEM_BYTES
    }
}

/// A growable chain of [`Block`]s with forward-only bump allocation.
///
/// When the current block is full, allocation moves on to the next block
/// with enough room, appending a new one (sized by the growth factor) if
/// none exists. Allocations never straddle blocks. Every block after
/// `current` is empty.
pub struct BlockChain {
    blocks: Vec<Block>,
    /// Index of the block currently being filled.
    current: usize,
    growth_factor: f64,
    /// Ceiling on the summed capacity of all blocks, in f32 elements.
    ceiling: usize,
}

impl BlockChain {
    /// Create a chain holding one block of `initial_capacity` elements.
    pub fn new(
        initial_capacity: usize,
        growth_factor: f64,
        ceiling: usize,
    ) -> Result<Self, ArenaError> {
        let first = Block::try_new(initial_capacity)?;
        Ok(Self {
            blocks: vec![first],
            current: 0,
            growth_factor,
            ceiling,
        })
    }

    /// Bump-allocate `len` zeroed f32 elements, growing the chain if needed.
    pub fn alloc(&mut self, len: usize) -> Result<ArenaHandle, ArenaError> {
        let len32 = u32::try_from(len).map_err(|_| self.exceeded(len))?;

        if let Some(offset) = self.blocks[self.current].alloc(len) {
            return Ok(self.handle(self.current, offset, len32));
        }

        // Later blocks are empty (a rewind reset them); reuse the first that fits.
        let reusable = (self.current + 1..self.blocks.len())
            .find(|&idx| self.blocks[idx].remaining() >= len);
        let idx = match reusable {
            Some(idx) => idx,
            None => {
                let block = self.grow(len)?;
                self.blocks.push(block);
                self.blocks.len() - 1
            }
        };

        self.current = idx;
        let offset = self.blocks[idx].alloc(len).ok_or_else(|| self.exceeded(len))?;
        Ok(self.handle(idx, offset, len32))
    }

    /// Build a new block large enough for `len` more elements.
    fn grow(&self, len: usize) -> Result<Block, ArenaError> {
        if self.blocks.len() > u16::MAX as usize {
            return Err(self.exceeded(len));
        }
        let tail = self.blocks.last().map_or(0, Block::capacity);
        let needed = tail.saturating_add(len);
        let mut size = scale(tail, self.growth_factor);
        if size < needed {
            size = scale(needed, self.growth_factor);
        }
        let room = self.ceiling.saturating_sub(self.capacity());
        let size = size.min(room);
        if size < len {
            return Err(self.exceeded(len));
        }
        Block::try_new(size)
    }

    fn exceeded(&self, len: usize) -> ArenaError {
        ArenaError::CapacityExceeded {
            requested: len.saturating_mul(ELEM_BYTES),
            capacity: self.ceiling.saturating_mul(ELEM_BYTES),
        }
    }

    fn handle(&self, block: usize, offset: usize, len: u32) -> ArenaHandle {
        // Offsets fit: block capacity is bounded by the ceiling, itself <= u32::MAX.
        ArenaHandle::new(block as u16, offset as u32, len)
    }

    /// The position the next allocation will start from.
    pub fn position(&self) -> Checkpoint {
        Checkpoint {
            block: self.current as u16,
            offset: self.blocks[self.current].used() as u32,
        }
    }

    /// Release everything allocated at or after `checkpoint`.
    ///
    /// Fails with [`ArenaError::InvalidCheckpoint`] if the checkpoint lies
    /// beyond the current cursor, i.e. it was already released.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ArenaError> {
        let cursor = self.position();
        let block = checkpoint.block as usize;
        let valid = checkpoint <= cursor
            && block < self.blocks.len()
            && checkpoint.offset as usize <= self.blocks[block].used();
        if !valid {
            return Err(ArenaError::InvalidCheckpoint { checkpoint, cursor });
        }
        for later in &mut self.blocks[block + 1..=self.current] {
            later.rewind_to(0);
        }
        self.blocks[block].rewind_to(checkpoint.offset as usize);
        self.current = block;
        Ok(())
    }

    /// Rewind to the start of the first block, keeping every block.
    pub fn reset(&mut self) {
        for block in &mut self.blocks {
            block.rewind_to(0);
        }
        self.current = 0;
    }

    fn check(&self, handle: ArenaHandle) -> Result<&Block, ArenaError> {
        match self.blocks.get(handle.block as usize) {
            Some(block) if handle.end() as usize <= block.used() => Ok(block),
            _ => Err(ArenaError::ReleasedHandle { handle }),
        }
    }

    /// Get a shared slice for a live handle.
    pub fn slice(&self, handle: ArenaHandle) -> Result<&[f32], ArenaError> {
        let block = self.check(handle)?;
        Ok(&block.data[handle.start()..handle.end() as usize])
    }

    /// Get a mutable slice for a live handle.
    pub fn slice_mut(&mut self, handle: ArenaHandle) -> Result<&mut [f32], ArenaError> {
        self.check(handle)?;
        let block = &mut self.blocks[handle.block as usize];
        Ok(&mut block.data[handle.start()..handle.end() as usize])
    }

    /// Resolve one mutable output range alongside shared input ranges.
    ///
    /// Inputs may overlap each other but not the output. The chain is split
    /// around the output block, and that block around the output range, so
    /// every returned slice is an ordinary disjoint borrow.
    pub fn split_mut<const N: usize>(
        &mut self,
        output: ArenaHandle,
        inputs: [ArenaHandle; N],
    ) -> Result<(&mut [f32], [&[f32]; N]), ArenaError> {
        self.check(output)?;
        for &input in &inputs {
            self.check(input)?;
            if input.overlaps(&output) {
                return Err(ArenaError::Overlap { output, input });
            }
        }

        let out_block = output.block as usize;
        let (before, rest) = self.blocks.split_at_mut(out_block);
        let (target, after) = rest
            .split_first_mut()
            .ok_or(ArenaError::ReleasedHandle { handle: output })?;
        let (lo, rest) = target.data.split_at_mut(output.start());
        let (out, hi) = rest.split_at_mut(output.len());
        let (before, after, lo, hi) = (&*before, &*after, &*lo, &*hi);
        let hi_start = output.end() as usize;

        let shared = inputs.map(|input| {
            let (start, end) = (input.start(), input.end() as usize);
            let block = input.block as usize;
            if input.is_empty() {
                &[][..]
            } else if block < out_block {
                &before[block].data[start..end]
            } else if block > out_block {
                &after[block - out_block - 1].data[start..end]
            } else if end <= output.start() {
                &lo[start..end]
            } else {
                &hi[start - hi_start..end - hi_start]
            }
        });
        Ok((out, shared))
    }

    /// Resolve `N` pairwise-disjoint handles as mutable slices at once.
    ///
    /// Slices come back in argument order. Fails with
    /// [`ArenaError::Overlap`] if any two handles share an element.
    pub fn disjoint_mut<const N: usize>(
        &mut self,
        handles: [ArenaHandle; N],
    ) -> Result<[&mut [f32]; N], ArenaError> {
        for (i, &a) in handles.iter().enumerate() {
            self.check(a)?;
            if let Some(&b) = handles[i + 1..].iter().find(|b| a.overlaps(b)) {
                return Err(ArenaError::Overlap {
                    output: a,
                    input: b,
                });
            }
        }

        let mut order: SmallVec<[usize; 4]> =
            (0..N).filter(|&i| !handles[i].is_empty()).collect();
        order.sort_by_key(|&i| handles[i].watermark());

        let mut out: [&mut [f32]; N] = std::array::from_fn(|_| Default::default());
        let mut blocks = self.blocks.iter_mut().enumerate();
        let mut rest: &mut [f32] = &mut [];
        let mut rest_block = usize::MAX;
        let mut consumed = 0;

        for i in order {
            let handle = handles[i];
            let block = handle.block as usize;
            if block != rest_block {
                let (_, next) = blocks
                    .find(|(idx, _)| *idx == block)
                    .ok_or(ArenaError::ReleasedHandle { handle })?;
                rest = &mut next.data[..];
                rest_block = block;
                consumed = 0;
            }
            let tail = std::mem::take(&mut rest);
            let (_, tail) = tail.split_at_mut(handle.start() - consumed);
            let (piece, tail) = tail.split_at_mut(handle.len());
            rest = tail;
            consumed = handle.end() as usize;
            out[i] = piece;
        }
        Ok(out)
    }

    /// Total number of blocks in the chain.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Summed capacity of every block, in f32 elements.
    pub fn capacity(&self) -> usize {
        self.blocks.iter().map(Block::capacity).sum()
    }

    /// Total memory usage across all blocks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(Block::memory_bytes).sum()
    }

    /// Total used f32 elements across all blocks.
    pub fn total_used(&self) -> usize {
        self.blocks.iter().map(Block::used).sum()
    }

    /// Elements the current block can still hand out before growth.
    pub fn remaining(&self) -> usize {
        self.blocks[self.current].remaining()
    }

    /// Iterate over the blocks, oldest first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }
}

impl Drop for BlockChain {
    fn drop(&mut self) {
        // Most recently added block first.
        while self.blocks.pop().is_some() {}
    }
}

fn scale(len: usize, factor: f64) -> usize {
    (len as f64 * factor).ceil() as usize
}
