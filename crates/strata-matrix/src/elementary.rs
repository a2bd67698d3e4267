//! Elementary row and column operations.
//!
//! In-place forms mutate the matrix's storage; copying forms validate
//! their indices, then copy and apply the in-place form to the copy.
//! Column operations transpose the view, apply the row operation and
//! transpose back, so they work on either orientation.

use strata_arena::Arena;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// Multiply row `row` by `c`.
    pub fn row_scale_in_place(&self, row: usize, c: f32, arena: &mut Arena) -> Result<(), MatrixError> {
        self.view_mut(arena)?.row_scale(row, c)
    }

    /// Copy with row `row` multiplied by `c`.
    pub fn row_scale(&self, row: usize, c: f32, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout().check_row(row)?;
        self.copy_then(arena, |m, arena| m.row_scale_in_place(row, c, arena))
    }

    /// Exchange rows `a` and `b`.
    pub fn row_swap_in_place(&self, a: usize, b: usize, arena: &mut Arena) -> Result<(), MatrixError> {
        self.view_mut(arena)?.row_swap(a, b)
    }

    /// Copy with rows `a` and `b` exchanged.
    pub fn row_swap(&self, a: usize, b: usize, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout().check_row(a)?;
        self.layout().check_row(b)?;
        self.copy_then(arena, |m, arena| m.row_swap_in_place(a, b, arena))
    }

    /// `row[dest] <- c1 * row[dest] + c2 * row[src]`.
    pub fn row_linear_combination_in_place(
        &self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
        arena: &mut Arena,
    ) -> Result<(), MatrixError> {
        self.view_mut(arena)?
            .row_linear_combination(dest, c1, src, c2)
    }

    /// Copy with `row[dest] <- c1 * row[dest] + c2 * row[src]`.
    pub fn row_linear_combination(
        &self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
        arena: &mut Arena,
    ) -> Result<Matrix, MatrixError> {
        self.layout().check_row(dest)?;
        self.layout().check_row(src)?;
        self.copy_then(arena, |m, arena| {
            m.row_linear_combination_in_place(dest, c1, src, c2, arena)
        })
    }

    /// Multiply column `col` by `c`.
    pub fn col_scale_in_place(&self, col: usize, c: f32, arena: &mut Arena) -> Result<(), MatrixError> {
        self.layout().check_col(col)?;
        self.transposed().row_scale_in_place(col, c, arena)
    }

    /// Copy with column `col` multiplied by `c`.
    pub fn col_scale(&self, col: usize, c: f32, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout().check_col(col)?;
        self.copy_then(arena, |m, arena| m.col_scale_in_place(col, c, arena))
    }

    /// Exchange columns `a` and `b`.
    pub fn col_swap_in_place(&self, a: usize, b: usize, arena: &mut Arena) -> Result<(), MatrixError> {
        self.layout().check_col(a)?;
        self.layout().check_col(b)?;
        self.transposed().row_swap_in_place(a, b, arena)
    }

    /// Copy with columns `a` and `b` exchanged.
    pub fn col_swap(&self, a: usize, b: usize, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout().check_col(a)?;
        self.layout().check_col(b)?;
        self.copy_then(arena, |m, arena| m.col_swap_in_place(a, b, arena))
    }

    /// `col[dest] <- c1 * col[dest] + c2 * col[src]`.
    pub fn col_linear_combination_in_place(
        &self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
        arena: &mut Arena,
    ) -> Result<(), MatrixError> {
        self.layout().check_col(dest)?;
        self.layout().check_col(src)?;
        self.transposed()
            .row_linear_combination_in_place(dest, c1, src, c2, arena)
    }

    /// Copy with `col[dest] <- c1 * col[dest] + c2 * col[src]`.
    pub fn col_linear_combination(
        &self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
        arena: &mut Arena,
    ) -> Result<Matrix, MatrixError> {
        self.layout().check_col(dest)?;
        self.layout().check_col(src)?;
        self.copy_then(arena, |m, arena| {
            m.col_linear_combination_in_place(dest, c1, src, c2, arena)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;

    fn sample(arena: &mut Arena) -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], arena).unwrap()
    }

    #[test]
    fn row_ops_copy_leaves_input() {
        let mut arena = Arena::with_capacity(128).unwrap();
        let m = sample(&mut arena);
        let swapped = m.row_swap(0, 1, &mut arena).unwrap();
        let scaled = m.row_scale(1, 0.5, &mut arena).unwrap();
        let combined = m.row_linear_combination(1, 1.0, 0, -4.0, &mut arena).unwrap();
        assert_eq!(m.to_row_major(&arena).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(swapped.to_row_major(&arena).unwrap(), vec![4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
        assert_eq!(scaled.to_row_major(&arena).unwrap(), vec![1.0, 2.0, 3.0, 2.0, 2.5, 3.0]);
        assert_eq!(combined.to_row_major(&arena).unwrap(), vec![1.0, 2.0, 3.0, 0.0, -3.0, -6.0]);
    }

    #[test]
    fn col_ops_copy_leaves_input() {
        let mut arena = Arena::with_capacity(128).unwrap();
        let m = sample(&mut arena);
        let swapped = m.col_swap(0, 2, &mut arena).unwrap();
        let scaled = m.col_scale(1, 2.0, &mut arena).unwrap();
        let combined = m.col_linear_combination(2, 1.0, 0, -3.0, &mut arena).unwrap();
        assert_eq!(m.to_row_major(&arena).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(swapped.to_row_major(&arena).unwrap(), vec![3.0, 2.0, 1.0, 6.0, 5.0, 4.0]);
        assert_eq!(scaled.to_row_major(&arena).unwrap(), vec![1.0, 4.0, 3.0, 4.0, 10.0, 6.0]);
        assert_eq!(combined.to_row_major(&arena).unwrap(), vec![1.0, 2.0, 0.0, 4.0, 5.0, -6.0]);
        assert!(!swapped.is_transposed());
    }

    #[test]
    fn col_index_is_checked_against_column_count() {
        let mut arena = Arena::with_capacity(128).unwrap();
        let m = sample(&mut arena);
        let used = arena.used();
        // 2 is a valid column but not a valid row
        assert!(m.col_swap_in_place(0, 2, &mut arena).is_ok());
        assert_eq!(
            m.col_swap(0, 3, &mut arena),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                bound: 3,
            })
        );
        assert_eq!(arena.used(), used);
    }

    #[test]
    fn row_ops_on_transposed_matrix() {
        let mut arena = Arena::with_capacity(128).unwrap();
        let t = sample(&mut arena).transposed();
        t.row_swap_in_place(0, 2, &mut arena).unwrap();
        assert_eq!(t.to_row_major(&arena).unwrap(), vec![3.0, 6.0, 2.0, 5.0, 1.0, 4.0]);
        assert!(t.row_scale_in_place(3, 1.0, &mut arena).is_err());
    }

    #[test]
    fn same_row_combination_scales() {
        let mut arena = Arena::with_capacity(128).unwrap();
        let m = sample(&mut arena);
        m.row_linear_combination_in_place(0, 1.0, 0, 1.0, &mut arena).unwrap();
        assert_eq!(m.to_row_major(&arena).unwrap()[..3], [2.0, 4.0, 6.0]);
    }
}
