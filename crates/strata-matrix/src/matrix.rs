//! The arena-backed matrix value and its constructors.

use strata_arena::{Arena, ArenaHandle};

use crate::error::{Axis, MatrixError};
use crate::layout::Layout;
use crate::view::{MatMut, MatRef};

/// A dense f32 matrix whose elements live in an [`Arena`].
///
/// The value itself is a [`Layout`] plus an [`ArenaHandle`], so it is
/// `Copy` and owns nothing: two copies of a `Matrix` share storage, and
/// rewinding the arena past its handle invalidates both. Element access
/// goes through the arena, either per element with [`get`](Self::get)
/// and [`set`](Self::set) or in bulk through [`view`](Self::view).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    layout: Layout,
    handle: ArenaHandle,
}

impl Matrix {
    /// Allocate a zero-filled `rows x cols` matrix.
    pub fn zero(rows: usize, cols: usize, arena: &mut Arena) -> Result<Self, MatrixError> {
        let layout = Layout::new(rows, cols)?;
        let handle = arena.allocate(layout.len())?;
        Ok(Self { layout, handle })
    }

    /// Build a matrix from `rows * cols` elements in row-major order.
    pub fn from_data(
        rows: usize,
        cols: usize,
        data: &[f32],
        arena: &mut Arena,
    ) -> Result<Self, MatrixError> {
        let layout = Layout::new(rows, cols)?;
        if data.len() != layout.len() {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                reason: "data length does not match rows * cols",
            });
        }
        let handle = arena.allocate_with(data)?;
        Ok(Self { layout, handle })
    }

    /// Build a matrix from a slice of equal-length rows.
    ///
    /// ```
    /// use strata_arena::Arena;
    /// use strata_matrix::Matrix;
    ///
    /// let mut arena = Arena::with_capacity(64).unwrap();
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]], &mut arena).unwrap();
    /// assert_eq!(m.get(1, 0, &arena).unwrap(), 3.0);
    /// ```
    pub fn from_rows<const N: usize>(
        rows: &[[f32; N]],
        arena: &mut Arena,
    ) -> Result<Self, MatrixError> {
        let layout = Layout::new(rows.len(), N)?;
        let handle = arena.allocate(layout.len())?;
        let storage = arena.get_mut(handle)?;
        for (dst, row) in storage.chunks_exact_mut(N.max(1)).zip(rows) {
            dst.copy_from_slice(row);
        }
        Ok(Self { layout, handle })
    }

    /// The `n x n` identity.
    pub fn identity(n: usize, arena: &mut Arena) -> Result<Self, MatrixError> {
        Self::identity_rect(n, n, arena)
    }

    /// A `rows x cols` matrix with ones on the main diagonal.
    pub fn identity_rect(
        rows: usize,
        cols: usize,
        arena: &mut Arena,
    ) -> Result<Self, MatrixError> {
        let m = Self::zero(rows, cols, arena)?;
        let mut view = m.view_mut(arena)?;
        for k in 0..rows.min(cols) {
            view.set(k, k, 1.0);
        }
        Ok(m)
    }

    /// Logical row count.
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Logical column count.
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.layout.shape()
    }

    /// Whether rows equal columns.
    pub fn is_square(&self) -> bool {
        self.layout.is_square()
    }

    /// Whether storage is read column-wise.
    pub fn is_transposed(&self) -> bool {
        self.layout.is_transposed()
    }

    /// The layout mapping logical positions to storage.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The arena allocation backing this matrix.
    pub fn handle(&self) -> ArenaHandle {
        self.handle
    }

    /// Resolve to a shared view.
    pub fn view<'a>(&self, arena: &'a Arena) -> Result<MatRef<'a>, MatrixError> {
        Ok(MatRef::from_parts(self.layout, arena.get(self.handle)?))
    }

    /// Resolve to an exclusive view.
    pub fn view_mut<'a>(&self, arena: &'a mut Arena) -> Result<MatMut<'a>, MatrixError> {
        Ok(MatMut::from_parts(self.layout, arena.get_mut(self.handle)?))
    }

    /// Element at logical `(i, j)`.
    pub fn get(&self, i: usize, j: usize, arena: &Arena) -> Result<f32, MatrixError> {
        self.view(arena)?.try_get(i, j)
    }

    /// Overwrite logical `(i, j)`.
    pub fn set(&self, i: usize, j: usize, value: f32, arena: &mut Arena) -> Result<(), MatrixError> {
        self.layout.check_row(i)?;
        self.layout.check_col(j)?;
        self.view_mut(arena)?.set(i, j, value);
        Ok(())
    }

    /// Elements in logical row-major order.
    pub fn to_row_major(&self, arena: &Arena) -> Result<Vec<f32>, MatrixError> {
        Ok(self.view(arena)?.to_row_major())
    }

    /// Allocate an independent copy with the same shape and orientation.
    pub fn copy(&self, arena: &mut Arena) -> Result<Self, MatrixError> {
        let handle = arena.duplicate(self.handle)?;
        Ok(Self {
            layout: self.layout,
            handle,
        })
    }

    /// Transpose in O(1) by swapping dimensions and flipping orientation.
    ///
    /// Storage is untouched; other copies of this value keep their own
    /// orientation.
    pub fn transpose_in_place(&mut self) {
        self.layout.transpose();
    }

    /// The transposed view of the same storage.
    pub fn transposed(mut self) -> Self {
        self.transpose_in_place();
        self
    }

    /// Allocate a copy and transpose it.
    pub fn transpose_copy(&self, arena: &mut Arena) -> Result<Self, MatrixError> {
        Ok(self.copy(arena)?.transposed())
    }

    /// Allocate a `rows x count` matrix holding the first `count` columns.
    ///
    /// The result is always row-major regardless of this matrix's
    /// orientation.
    pub fn leading_columns(&self, count: usize, arena: &mut Arena) -> Result<Self, MatrixError> {
        if count > self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: count,
                bound: self.cols(),
            });
        }
        self.gather_columns(&(0..count).collect::<Vec<_>>(), arena)
    }

    /// Allocate a row-major matrix whose column `k` is column `columns[k]`
    /// of this one. Indices must be in range.
    pub(crate) fn gather_columns(
        &self,
        columns: &[usize],
        arena: &mut Arena,
    ) -> Result<Self, MatrixError> {
        arena.get(self.handle)?;
        let mut scope = arena.scratch();
        let out = Self::zero(self.rows(), columns.len(), &mut scope)?;
        let (dst, [data]) = scope.split_mut(out.handle, [self.handle])?;
        let src = MatRef::from_parts(self.layout, data);
        let mut dst = MatMut::from_parts(out.layout, dst);
        for (k, &col) in columns.iter().enumerate() {
            for row in 0..self.rows() {
                dst.set(row, k, src.get(row, col));
            }
        }
        scope.keep();
        Ok(out)
    }
}
