//! Non-moving region allocator for strata matrices.
//!
//! Hands out f32 storage by bump allocation from a chain of fixed blocks.
//! Growth appends a block instead of relocating memory, so a handle issued
//! before growth still resolves to the same, unchanged elements afterwards.
//!
//! # Architecture
//!
//! ```text
//! Arena (validated config + allocation API)
//! ├── BlockChain (forward-only cursor over the chain)
//! │   └── Block[] (fixed Vec<f32>, bump-allocated, never resized)
//! ├── ArenaHandle (block, offset, len): resolves in O(1)
//! ├── Checkpoint (block, offset): rewind target
//! └── Scratch (guard: rewinds to its checkpoint on drop)
//! ```
//!
//! # Release discipline
//!
//! There is no per-allocation free. Storage is released in bulk by
//! rewinding to a [`Checkpoint`], which frees everything allocated at or
//! after it. Temporary work should run inside a [`Scratch`] scope so the
//! rewind happens on every exit path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod config;
pub mod error;
pub mod handle;
pub mod scratch;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{ArenaHandle, Checkpoint};
pub use scratch::Scratch;
