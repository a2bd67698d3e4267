//! Dense f32 matrices stored in a strata arena.
//!
//! A [`Matrix`] is a small `Copy` value: a [`Layout`] (shape plus an
//! orientation flag) and an arena handle. Transposing flips the flag and
//! never moves data, so every algorithm reads elements through the layout
//! rather than assuming row-major storage.
//!
//! # Architecture
//!
//! ```text
//! Matrix (layout + ArenaHandle)
//! ├── constructors, copy, transpose views      matrix.rs
//! ├── add / subtract / scale / multiply        arith.rs
//! ├── row and column elementary operations     elementary.rs
//! ├── pivot search, determinant, inverse       elimination.rs
//! ├── column / row space bases                 space.rs
//! └── PLU factorization and solves             lu.rs
//! MatRef / MatMut (layout + borrowed slice)    view.rs
//! ```
//!
//! # Memory discipline
//!
//! Operations allocate their results in the caller's arena and release
//! their own temporaries before returning, on success and on failure.
//! Callers own everything an operation returns and release it by
//! rewinding the arena.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arith;
mod elementary;
mod elimination;
pub mod error;
pub mod layout;
pub mod lu;
pub mod matrix;
pub mod space;
pub mod view;

pub use error::{Axis, MatrixError};
pub use layout::Layout;
pub use lu::Plu;
pub use matrix::Matrix;
pub use space::Subspace;
pub use view::{MatMut, MatRef};
