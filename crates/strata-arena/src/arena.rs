//! The arena: a validated [`BlockChain`] plus the allocation API.

use crate::block::{Block, BlockChain};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{ArenaHandle, Checkpoint};
use crate::scratch::Scratch;

/// Region allocator handing out f32 storage by bump allocation.
///
/// Storage is addressed through [`ArenaHandle`]s. Growth appends a block
/// and never relocates an existing one, so a handle resolves to the same
/// elements until a [`rewind`](Arena::rewind) releases it. Not safe for
/// concurrent use; temporary allocations must be released in LIFO order,
/// which [`Scratch`] enforces by scope.
pub struct Arena {
    config: ArenaConfig,
    chain: BlockChain,
}

impl Arena {
    /// Create an arena from a validated configuration.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidConfig`] if validation fails, or
    /// [`ArenaError::AllocationFailed`] if the first block cannot be obtained.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let chain = BlockChain::new(
            config.initial_capacity,
            config.growth_factor,
            config.capacity_ceiling,
        )?;
        Ok(Self { config, chain })
    }

    /// Create an arena whose first block holds `capacity` f32 elements,
    /// with default growth settings.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Allocate `len` zero-initialised f32 elements.
    pub fn allocate(&mut self, len: usize) -> Result<ArenaHandle, ArenaError> {
        self.chain.alloc(len)
    }

    /// Allocate storage pre-filled with a copy of `data`.
    pub fn allocate_with(&mut self, data: &[f32]) -> Result<ArenaHandle, ArenaError> {
        let handle = self.chain.alloc(data.len())?;
        self.chain.slice_mut(handle)?.copy_from_slice(data);
        Ok(handle)
    }

    /// Allocate a copy of an existing allocation.
    pub fn duplicate(&mut self, source: ArenaHandle) -> Result<ArenaHandle, ArenaError> {
        self.chain.slice(source)?;
        let handle = self.chain.alloc(source.len())?;
        let (dst, src) = self.chain.split_mut(handle, [source])?;
        dst.copy_from_slice(src[0]);
        Ok(handle)
    }

    /// Resolve a handle to its elements.
    pub fn get(&self, handle: ArenaHandle) -> Result<&[f32], ArenaError> {
        self.chain.slice(handle)
    }

    /// Resolve a handle to its elements, mutably.
    pub fn get_mut(&mut self, handle: ArenaHandle) -> Result<&mut [f32], ArenaError> {
        self.chain.slice_mut(handle)
    }

    /// Resolve a mutable output alongside shared inputs.
    ///
    /// See [`BlockChain::split_mut`].
    pub fn split_mut<const N: usize>(
        &mut self,
        output: ArenaHandle,
        inputs: [ArenaHandle; N],
    ) -> Result<(&mut [f32], [&[f32]; N]), ArenaError> {
        self.chain.split_mut(output, inputs)
    }

    /// Resolve several pairwise-disjoint handles mutably at once.
    ///
    /// See [`BlockChain::disjoint_mut`].
    pub fn disjoint_mut<const N: usize>(
        &mut self,
        handles: [ArenaHandle; N],
    ) -> Result<[&mut [f32]; N], ArenaError> {
        self.chain.disjoint_mut(handles)
    }

    /// The position the next allocation will start from.
    pub fn checkpoint(&self) -> Checkpoint {
        self.chain.position()
    }

    /// Release everything allocated at or after `checkpoint`.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ArenaError> {
        self.chain.rewind(checkpoint)
    }

    /// Release `watermark` and everything allocated after it.
    ///
    /// Only correct when `watermark` is the oldest allocation that is no
    /// longer wanted; anything allocated later is released with it.
    pub fn release_from(&mut self, watermark: ArenaHandle) -> Result<(), ArenaError> {
        self.chain.rewind(watermark.watermark())
    }

    /// Open a scratch scope that rewinds to the current position on drop.
    pub fn scratch(&mut self) -> Scratch<'_> {
        Scratch::new(self)
    }

    /// Release every allocation, keeping the blocks for reuse.
    pub fn reset(&mut self) {
        self.chain.reset();
    }

    /// Free every block, newest first. Equivalent to dropping the arena.
    pub fn destroy(self) {
        drop(self);
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of blocks in the chain.
    pub fn block_count(&self) -> usize {
        self.chain.block_count()
    }

    /// Summed capacity of every block, in f32 elements.
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Elements currently allocated across all blocks.
    pub fn used(&self) -> usize {
        self.chain.total_used()
    }

    /// Elements the current block can still hand out without moving on to
    /// a later block or growing.
    pub fn remaining(&self) -> usize {
        self.chain.remaining()
    }

    /// Memory held by the block chain, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.chain.memory_bytes()
    }

    /// Iterate over the blocks, oldest first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.chain.blocks()
    }
}
