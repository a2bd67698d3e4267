//! Logical shape and orientation of a matrix over flat storage.

use crate::error::{Axis, MatrixError};

/// How a matrix's `rows * cols` stored elements map to logical positions.
///
/// Storage is always a flat run of elements. With the transposed flag
/// clear, logical `(i, j)` lives at offset `i * cols + j`; with it set,
/// at `j * rows + i`. Flipping the flag and swapping the dimensions is a
/// transpose that moves no data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    rows: usize,
    cols: usize,
    transposed: bool,
}

impl Layout {
    /// A row-major layout with the given dimensions.
    ///
    /// Fails with [`MatrixError::InvalidShape`] if `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        rows.checked_mul(cols).ok_or(MatrixError::InvalidShape {
            rows,
            cols,
            reason: "element count overflows usize",
        })?;
        Ok(Self {
            rows,
            cols,
            transposed: false,
        })
    }

    /// Logical row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Logical column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether storage is read column-wise.
    #[inline]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether rows equal columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Storage offset of logical element `(i, j)`.
    ///
    /// Does not bounds-check; callers index storage with the result.
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        if self.transposed {
            j * self.rows + i
        } else {
            i * self.cols + j
        }
    }

    /// Swap the dimensions and flip the orientation flag.
    #[inline]
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.transposed = !self.transposed;
    }

    /// The transposed layout.
    #[inline]
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        check(Axis::Row, row, self.rows)
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<(), MatrixError> {
        check(Axis::Column, col, self.cols)
    }

    pub(crate) fn check_square(&self, reason: &'static str) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
                reason,
            })
        }
    }
}

fn check(axis: Axis, index: usize, bound: usize) -> Result<(), MatrixError> {
    if index < bound {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfBounds { axis, index, bound })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_offsets() {
        let layout = Layout::new(2, 3).unwrap();
        assert_eq!(layout.offset(0, 2), 2);
        assert_eq!(layout.offset(1, 0), 3);
        assert_eq!(layout.len(), 6);
    }

    #[test]
    fn transposed_offsets_read_columns() {
        // 2 x 3 storage [a b c; d e f] viewed as 3 x 2 [a d; b e; c f]
        let layout = Layout::new(2, 3).unwrap().transposed();
        assert_eq!(layout.shape(), (3, 2));
        assert!(layout.is_transposed());
        assert_eq!(layout.offset(0, 1), 3);
        assert_eq!(layout.offset(2, 0), 2);
        assert_eq!(layout.offset(2, 1), 5);
    }

    #[test]
    fn double_transpose_restores_layout() {
        let layout = Layout::new(4, 7).unwrap();
        assert_eq!(layout.transposed().transposed(), layout);
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        assert!(matches!(
            Layout::new(usize::MAX, 2),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn zero_sized_shapes_are_valid() {
        let layout = Layout::new(0, 5).unwrap();
        assert!(layout.is_empty());
        assert!(layout.check_col(4).is_ok());
        assert!(layout.check_row(0).is_err());
    }

    #[test]
    fn index_checks_name_the_axis() {
        let layout = Layout::new(2, 3).unwrap();
        assert_eq!(
            layout.check_col(3),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                bound: 3,
            })
        );
        assert!(layout.check_square("needs square").is_err());
    }
}
