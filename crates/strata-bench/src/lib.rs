//! Benchmark workloads for the strata arena and matrix algorithms.
//!
//! Provides seeded matrix builders shared by the criterion benches:
//!
//! - [`random_matrix`]: entries uniform in `[-1, 1)`
//! - [`diagonally_dominant`]: random but guaranteed invertible, so
//!   elimination benches never hit a singular input
//! - [`bench_arena`]: an arena sized to hold a whole bench iteration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_arena::{Arena, ArenaError};
use strata_matrix::{Matrix, MatrixError};

/// Uniform sample in `[-1, 1)` from the top 24 bits of a `u32`.
fn unit(rng: &mut ChaCha8Rng) -> f32 {
    let bits = rng.next_u32() >> 8;
    bits as f32 / (1u32 << 23) as f32 - 1.0
}

/// Deterministic `rows * cols` entries for `seed`.
pub fn random_data(rows: usize, cols: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows * cols).map(|_| unit(&mut rng)).collect()
}

/// A `rows x cols` matrix of seeded uniform entries.
pub fn random_matrix(
    rows: usize,
    cols: usize,
    seed: u64,
    arena: &mut Arena,
) -> Result<Matrix, MatrixError> {
    Matrix::from_data(rows, cols, &random_data(rows, cols, seed), arena)
}

/// An `n x n` matrix whose diagonal outweighs the rest of its row.
///
/// Strict diagonal dominance guarantees a non-zero determinant.
pub fn diagonally_dominant(n: usize, seed: u64, arena: &mut Arena) -> Result<Matrix, MatrixError> {
    let mut data = random_data(n, n, seed);
    for i in 0..n {
        let off: f32 = (0..n).filter(|&j| j != i).map(|j| data[i * n + j].abs()).sum();
        data[i * n + i] = off + 1.0;
    }
    Matrix::from_data(n, n, &data, arena)
}

/// An arena whose first block holds `elements` f32s.
pub fn bench_arena(elements: usize) -> Result<Arena, ArenaError> {
    Arena::with_capacity(elements)
}
