//! Borrowed views over resolved matrix storage.
//!
//! A [`Matrix`](crate::Matrix) is only a layout plus an arena handle; to
//! read or write elements it is resolved into a [`MatRef`] or [`MatMut`],
//! which pair the layout with a slice borrowed from the arena. All
//! element-level algorithms run on these views.

use std::fmt;

use crate::error::MatrixError;
use crate::layout::Layout;

/// Shared view of a matrix's elements.
#[derive(Clone, Copy)]
pub struct MatRef<'a> {
    layout: Layout,
    data: &'a [f32],
}

impl<'a> MatRef<'a> {
    pub(crate) fn from_parts(layout: Layout, data: &'a [f32]) -> Self {
        debug_assert_eq!(layout.len(), data.len());
        Self { layout, data }
    }

    /// Logical row count.
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Logical column count.
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// The layout this view reads through.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether the view reads storage column-wise.
    pub fn is_transposed(&self) -> bool {
        self.layout.is_transposed()
    }

    /// Element at logical `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the storage. Use
    /// [`try_get`](Self::try_get) for a checked read.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.layout.offset(i, j)]
    }

    /// Element at logical `(i, j)`, bounds-checked.
    pub fn try_get(&self, i: usize, j: usize) -> Result<f32, MatrixError> {
        self.layout.check_row(i)?;
        self.layout.check_col(j)?;
        Ok(self.get(i, j))
    }

    /// Raw storage in physical order, ignoring orientation.
    pub fn as_storage(&self) -> &'a [f32] {
        self.data
    }

    /// Elements in logical row-major order.
    pub fn to_row_major(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                out.push(self.get(i, j));
            }
        }
        out
    }

    /// First row at or below `from_row` whose entry in `col` is non-zero.
    ///
    /// Returns `None` when every such entry is exactly zero, or when
    /// `from_row` is past the last row. `col` must be in range.
    pub fn find_pivot(&self, from_row: usize, col: usize) -> Option<usize> {
        (from_row..self.rows()).find(|&row| self.get(row, col) != 0.0)
    }
}

impl fmt::Display for MatRef<'_> {
    /// One line per row, each element with three decimals and a trailing
    /// space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                write!(f, "{:.3} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MatRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatRef")
            .field("layout", &self.layout)
            .field("row_major", &self.to_row_major())
            .finish()
    }
}

/// Exclusive view of a matrix's elements.
///
/// Row operations are implemented here directly; column operations are
/// the row operations applied through a transposed layout.
pub struct MatMut<'a> {
    layout: Layout,
    data: &'a mut [f32],
}

impl<'a> MatMut<'a> {
    pub(crate) fn from_parts(layout: Layout, data: &'a mut [f32]) -> Self {
        debug_assert_eq!(layout.len(), data.len());
        Self { layout, data }
    }

    /// Logical row count.
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Logical column count.
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Reborrow as a shared view.
    pub fn view(&self) -> MatRef<'_> {
        MatRef::from_parts(self.layout, &*self.data)
    }

    /// Element at logical `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the storage.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.layout.offset(i, j)]
    }

    /// Overwrite logical `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the storage.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.data[self.layout.offset(i, j)] = value;
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Flip this view's orientation without touching storage.
    pub fn transpose(&mut self) {
        self.layout.transpose();
    }

    /// See [`MatRef::find_pivot`].
    pub fn find_pivot(&self, from_row: usize, col: usize) -> Option<usize> {
        self.view().find_pivot(from_row, col)
    }

    /// Multiply every element of `row` by `c`.
    pub fn row_scale(&mut self, row: usize, c: f32) -> Result<(), MatrixError> {
        self.layout.check_row(row)?;
        if c == 1.0 {
            return Ok(());
        }
        for j in 0..self.cols() {
            let v = if c == 0.0 { 0.0 } else { c * self.get(row, j) };
            self.set(row, j, v);
        }
        Ok(())
    }

    /// Exchange rows `a` and `b`.
    pub fn row_swap(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.layout.check_row(a)?;
        self.layout.check_row(b)?;
        if a == b {
            return Ok(());
        }
        for j in 0..self.cols() {
            let (x, y) = (self.layout.offset(a, j), self.layout.offset(b, j));
            self.data.swap(x, y);
        }
        Ok(())
    }

    /// `dest <- c1 * dest + c2 * src`, element-wise along the row.
    ///
    /// A zero coefficient drops its term entirely, so `dest` and `src` may
    /// be the same row.
    pub fn row_linear_combination(
        &mut self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
    ) -> Result<(), MatrixError> {
        self.layout.check_row(dest)?;
        self.layout.check_row(src)?;
        for j in 0..self.cols() {
            let mut v = 0.0;
            if c1 != 0.0 {
                v += c1 * self.get(dest, j);
            }
            if c2 != 0.0 {
                v += c2 * self.get(src, j);
            }
            self.set(dest, j, v);
        }
        Ok(())
    }

    /// Multiply every element of `col` by `c`.
    pub fn col_scale(&mut self, col: usize, c: f32) -> Result<(), MatrixError> {
        self.layout.check_col(col)?;
        self.transposed_then(|m| m.row_scale(col, c))
    }

    /// Exchange columns `a` and `b`.
    pub fn col_swap(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.layout.check_col(a)?;
        self.layout.check_col(b)?;
        self.transposed_then(|m| m.row_swap(a, b))
    }

    /// `dest <- c1 * dest + c2 * src`, element-wise down the column.
    pub fn col_linear_combination(
        &mut self,
        dest: usize,
        c1: f32,
        src: usize,
        c2: f32,
    ) -> Result<(), MatrixError> {
        self.layout.check_col(dest)?;
        self.layout.check_col(src)?;
        self.transposed_then(|m| m.row_linear_combination(dest, c1, src, c2))
    }

    fn transposed_then(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<(), MatrixError>,
    ) -> Result<(), MatrixError> {
        self.transpose();
        let result = op(self);
        self.transpose();
        result
    }
}

impl fmt::Display for MatMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}
