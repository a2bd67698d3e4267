//! Scoped scratch space with guaranteed rewind.
//!
//! [`Scratch`] records the arena's position when it is created and rewinds
//! to it when dropped, so temporary allocations are released on every exit
//! path, including early `?` returns. Guards nest: a guard taken from a
//! guard releases only what was allocated inside it.

use std::ops::{Deref, DerefMut};

use crate::arena::Arena;
use crate::handle::Checkpoint;

/// Rewind-on-drop guard over an [`Arena`].
///
/// Dereferences to the arena, so it can be passed anywhere a
/// `&mut Arena` is expected. Call [`keep`](Scratch::keep) to retain
/// everything allocated through the guard.
///
/// ```
/// use strata_arena::Arena;
///
/// let mut arena = Arena::with_capacity(64).unwrap();
/// let kept = arena.allocate(4).unwrap();
/// {
///     let mut scratch = arena.scratch();
///     let _temp = scratch.allocate(16).unwrap();
/// } // `_temp` released here
/// assert_eq!(arena.used(), 4);
/// assert!(arena.get(kept).is_ok());
/// ```
#[must_use]
pub struct Scratch<'a> {
    arena: &'a mut Arena,
    checkpoint: Checkpoint,
    armed: bool,
}

impl<'a> Scratch<'a> {
    pub(crate) fn new(arena: &'a mut Arena) -> Self {
        let checkpoint = arena.checkpoint();
        Self {
            arena,
            checkpoint,
            armed: true,
        }
    }

    /// The position this guard rewinds to.
    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }

    /// Disarm the guard: allocations made through it outlive it.
    pub fn keep(mut self) {
        self.armed = false;
    }
}

impl Deref for Scratch<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        self.arena
    }
}

impl DerefMut for Scratch<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        self.arena
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(_err) = self.arena.rewind(self.checkpoint) {
            #[cfg(debug_assertions)]
            eprintln!("strata: scratch guard could not rewind: {_err}");
        }
    }
}
