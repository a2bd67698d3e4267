//! Column and row space bases by elimination with column pivoting.

use smallvec::SmallVec;
use strata_arena::Arena;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::MatMut;

/// Basis of a column or row space, with the rank and the source indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Subspace {
    /// The basis vectors as columns (column space) or rows (row space).
    /// A `1 x 1` zero matrix when the rank is zero.
    pub basis: Matrix,
    /// Number of basis vectors.
    pub rank: usize,
    /// Which columns (or rows) of the input make up the basis, in order.
    pub indices: SmallVec<[usize; 8]>,
}

impl Matrix {
    /// A basis for the column space, drawn from this matrix's columns.
    ///
    /// Eliminates a scratch copy row by row. A column without a pivot is
    /// free; when a later column yields a pivot it is swapped with the
    /// oldest free column, so pivot columns collect at the front. The
    /// basis is the first `rank` columns under that permutation, taken
    /// from `self` unmodified. The result is row-major; everything else
    /// is released.
    pub fn column_space(&self, arena: &mut Arena) -> Result<Subspace, MatrixError> {
        let mut perm: SmallVec<[usize; 8]> = (0..self.cols()).collect();
        let mut scope = arena.scratch();
        let rank = {
            let mut inner = scope.scratch();
            let work = self.copy(&mut inner)?;
            let mut m = work.view_mut(&mut inner)?;
            reduce_columns(&mut m, &mut perm)?
        };
        perm.truncate(rank);
        let basis = if rank == 0 {
            Matrix::zero(1, 1, &mut scope)?
        } else {
            self.gather_columns(&perm, &mut scope)?
        };
        scope.keep();
        Ok(Subspace {
            basis,
            rank,
            indices: perm,
        })
    }

    /// A basis for the row space: the column space of the transpose,
    /// transposed back. The basis vectors are its rows.
    pub fn row_space(&self, arena: &mut Arena) -> Result<Subspace, MatrixError> {
        let mut space = self.transposed().column_space(arena)?;
        space.basis.transpose_in_place();
        Ok(space)
    }

    /// The rank, computed the same way as [`column_space`](Self::column_space)
    /// but without building a basis.
    pub fn rank(&self, arena: &mut Arena) -> Result<usize, MatrixError> {
        let mut perm: SmallVec<[usize; 8]> = (0..self.cols()).collect();
        let mut scope = arena.scratch();
        let work = self.copy(&mut scope)?;
        let mut m = work.view_mut(&mut scope)?;
        reduce_columns(&mut m, &mut perm)
    }
}

/// Row-reduce `m` in place, swapping pivot columns to the front.
///
/// Returns the rank; `perm[k]` ends up naming the original column now at
/// position `k`.
fn reduce_columns(m: &mut MatMut<'_>, perm: &mut [usize]) -> Result<usize, MatrixError> {
    let (rows, cols) = (m.rows(), m.cols());
    let mut check_row = 0;
    let mut swap_col = 0;
    let mut has_free = false;

    for col in 0..cols {
        let Some(pivot_row) = m.find_pivot(check_row, col) else {
            if !has_free {
                has_free = true;
                swap_col = col;
            }
            continue;
        };
        if pivot_row != check_row {
            m.row_swap(check_row, pivot_row)?;
        }
        let pivot = m.get(check_row, col);
        for row in check_row + 1..rows {
            let rv = m.get(row, col);
            if rv != 0.0 {
                m.row_linear_combination(row, pivot, check_row, -rv)?;
            }
        }
        if has_free {
            m.col_swap(swap_col, col)?;
            perm.swap(swap_col, col);
            swap_col += 1;
        }
        check_row += 1;
    }
    Ok(check_row)
}
