//! Gaussian elimination: pivot search, determinant, and inverse.
//!
//! Pivoting is by the first non-zero entry, compared exactly against zero.
//! There is no partial pivoting by magnitude and no epsilon threshold.

use strata_arena::Arena;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::MatMut;

impl Matrix {
    /// First row at or below `from_row` with a non-zero entry in `col`.
    ///
    /// `Ok(None)` when there is none, including when `from_row` is past
    /// the last row.
    pub fn find_pivot(
        &self,
        from_row: usize,
        col: usize,
        arena: &Arena,
    ) -> Result<Option<usize>, MatrixError> {
        self.layout().check_col(col)?;
        Ok(self.view(arena)?.find_pivot(from_row, col))
    }

    /// The determinant, by fraction-free (Bareiss) elimination on a
    /// scratch copy.
    ///
    /// Each step replaces every row `j` below the pivot with
    /// `(pivot * row_j - row_j[i] * row_i) / previous_pivot`. The division
    /// is exact in real arithmetic, so every working entry is a minor of
    /// the input and the last diagonal entry is the determinant itself.
    /// `track` carries the sign flipped by each row swap. Returns `0.0` as
    /// soon as a column has no pivot. The scratch copy is released on
    /// every path.
    pub fn determinant(&self, arena: &mut Arena) -> Result<f32, MatrixError> {
        self.layout()
            .check_square("determinant requires a square matrix")?;
        let mut scope = arena.scratch();
        let work = self.copy(&mut scope)?;
        let mut m = work.view_mut(&mut scope)?;
        let n = m.rows();
        if n == 0 {
            return Ok(1.0);
        }
        let mut track = 1.0f32;
        let mut previous = 1.0f32;

        for i in 0..n {
            let Some(pivot_row) = m.find_pivot(i, i) else {
                return Ok(0.0);
            };
            if pivot_row != i {
                m.row_swap(i, pivot_row)?;
                track = -track;
            }
            let pivot = m.get(i, i);
            for j in i + 1..n {
                let rv = m.get(j, i);
                for k in i + 1..n {
                    let v = (pivot * m.get(j, k) - rv * m.get(i, k)) / previous;
                    m.set(j, k, v);
                }
                m.set(j, i, 0.0);
            }
            previous = pivot;
        }

        Ok(track * m.get(n - 1, n - 1))
    }

    /// The inverse, by Gauss-Jordan elimination.
    ///
    /// Runs the same row operations on a scratch copy of `self` and on an
    /// identity that becomes the result. Fails with
    /// [`MatrixError::Singular`] when a column has no pivot, releasing
    /// both.
    pub fn inverse(&self, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout()
            .check_square("inverse requires a square matrix")?;
        let n = self.rows();
        let mut outer = arena.scratch();
        let result = Matrix::identity(n, &mut outer)?;
        {
            let mut inner = outer.scratch();
            let work = self.copy(&mut inner)?;
            let [w, r] = inner.disjoint_mut([work.handle(), result.handle()])?;
            let mut w = MatMut::from_parts(work.layout(), w);
            let mut r = MatMut::from_parts(result.layout(), r);
            gauss_jordan(&mut w, &mut r)?;
        }
        outer.keep();
        Ok(result)
    }
}

/// Reduce `w` to the identity, mirroring every row operation on `r`.
fn gauss_jordan(w: &mut MatMut<'_>, r: &mut MatMut<'_>) -> Result<(), MatrixError> {
    let n = w.rows();
    for i in 0..n {
        let pivot_row = w
            .find_pivot(i, i)
            .ok_or(MatrixError::Singular { column: i })?;
        if pivot_row != i {
            w.row_swap(i, pivot_row)?;
            r.row_swap(i, pivot_row)?;
        }
        let inv = 1.0 / w.get(i, i);
        w.row_scale(i, inv)?;
        r.row_scale(i, inv)?;
        for j in 0..n {
            if j == i {
                continue;
            }
            let rv = w.get(j, i);
            if rv == 0.0 {
                continue;
            }
            w.row_linear_combination(j, 1.0, i, -rv)?;
            r.row_linear_combination(j, 1.0, i, -rv)?;
        }
    }
    Ok(())
}
