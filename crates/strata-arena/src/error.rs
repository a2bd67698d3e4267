//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::handle::{ArenaHandle, Checkpoint};

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Growing the block chain would pass the configured capacity ceiling.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Configured ceiling in bytes.
        capacity: usize,
    },
    /// The system allocator could not provide a new block.
    AllocationFailed {
        /// Size of the block that could not be obtained, in bytes.
        requested: usize,
    },
    /// A checkpoint that does not mark a live position in the chain.
    InvalidCheckpoint {
        /// The rejected checkpoint.
        checkpoint: Checkpoint,
        /// The arena's current cursor position.
        cursor: Checkpoint,
    },
    /// A handle whose storage was released by a rewind, or that was never
    /// issued by this arena.
    ReleasedHandle {
        /// The handle that could not be resolved.
        handle: ArenaHandle,
    },
    /// A mutable output range overlaps one of the ranges it was split from.
    Overlap {
        /// The mutable range.
        output: ArenaHandle,
        /// The range that overlaps it.
        input: ArenaHandle,
    },
    /// Configuration rejected at construction time.
    InvalidConfig {
        /// Why the configuration is invalid.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, ceiling {capacity} bytes"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "system allocation of {requested} bytes failed")
            }
            Self::InvalidCheckpoint { checkpoint, cursor } => {
                write!(
                    f,
                    "invalid checkpoint {checkpoint}: arena cursor is at {cursor}"
                )
            }
            Self::ReleasedHandle { handle } => {
                write!(f, "handle {handle} refers to released storage")
            }
            Self::Overlap { output, input } => {
                write!(f, "output {output} overlaps input {input}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
