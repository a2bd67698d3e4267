//! Strata: dense f32 matrices on a non-moving bump arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut arena = Arena::with_capacity(256).unwrap();
//! let a = Matrix::from_rows(&[[0.0, 1.0, 3.0], [2.0, -10.0, 2.0], [1.0, -3.0, 0.0]], &mut arena)
//!     .unwrap();
//! let b = Matrix::from_data(3, 1, &[-1.0, -20.0, -5.0], &mut arena).unwrap();
//!
//! // Temporaries are released before lu_solve returns; only x remains.
//! let before = arena.used();
//! let x = a.lu_solve(&b, &mut arena).unwrap();
//! assert_eq!(arena.used(), before + 3);
//!
//! let x = x.to_row_major(&arena).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-5 && (x[1] - 2.0).abs() < 1e-5 && (x[2] + 1.0).abs() < 1e-5);
//!
//! // Transposing is O(1) and shares storage.
//! let t = a.transposed();
//! assert_eq!(t.get(0, 1, &arena).unwrap(), 2.0);
//! assert_eq!(arena.used(), before + 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strata-arena` | Block-chained arena, handles, checkpoints, scratch guards |
//! | [`matrix`] | `strata-matrix` | Matrix values, views, arithmetic, elimination, PLU |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Non-moving region allocator (`strata-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::Scratch`]; both are
/// in the [`prelude`].
pub use strata_arena as arena;

/// Arena-backed matrices and algorithms (`strata-matrix`).
///
/// [`matrix::Matrix`] carries every operation as a method; results of
/// decompositions are [`matrix::Plu`] and [`matrix::Subspace`].
pub use strata_matrix as matrix;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use strata_arena::{Arena, ArenaConfig, ArenaError, ArenaHandle, Checkpoint, Scratch};

    // Matrices
    pub use strata_matrix::{Layout, MatMut, MatRef, Matrix, Plu, Subspace};

    // Errors
    pub use strata_matrix::{Axis, MatrixError};
}
