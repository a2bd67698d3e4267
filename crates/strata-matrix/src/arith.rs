//! Element-wise arithmetic and matrix multiplication.
//!
//! Each operation comes in an in-place form that overwrites the left
//! operand and a copying form that allocates its result. Copying forms
//! validate shapes before allocating and copy the left operand first, so
//! the result keeps its orientation.

use strata_arena::Arena;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::{MatMut, MatRef};

impl Matrix {
    /// `self <- self + rhs`.
    pub fn add_in_place(&self, rhs: &Matrix, arena: &mut Arena) -> Result<(), MatrixError> {
        self.zip_in_place(rhs, "add", arena, |a, b| a + b)
    }

    /// `self + rhs` as a new matrix.
    pub fn add(&self, rhs: &Matrix, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs, "add")?;
        self.copy_then(arena, |out, arena| out.add_in_place(rhs, arena))
    }

    /// `self <- self - rhs`.
    pub fn subtract_in_place(&self, rhs: &Matrix, arena: &mut Arena) -> Result<(), MatrixError> {
        self.zip_in_place(rhs, "subtract", arena, |a, b| a - b)
    }

    /// `self - rhs` as a new matrix.
    pub fn subtract(&self, rhs: &Matrix, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs, "subtract")?;
        self.copy_then(arena, |out, arena| out.subtract_in_place(rhs, arena))
    }

    /// `self <- c * self`.
    ///
    /// Scaling by one leaves storage untouched; scaling by zero writes
    /// exact zeros.
    pub fn scale_in_place(&self, c: f32, arena: &mut Arena) -> Result<(), MatrixError> {
        let data = arena.get_mut(self.handle())?;
        if c == 1.0 {
            return Ok(());
        }
        if c == 0.0 {
            data.fill(0.0);
        } else {
            data.iter_mut().for_each(|v| *v *= c);
        }
        Ok(())
    }

    /// `c * self` as a new matrix.
    pub fn scale(&self, c: f32, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.copy_then(arena, |out, arena| out.scale_in_place(c, arena))
    }

    /// The matrix product `self * rhs`, as a new row-major matrix.
    pub fn multiply(&self, rhs: &Matrix, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut scope = arena.scratch();
        let out = Matrix::zero(self.rows(), rhs.cols(), &mut scope)?;
        let (dst, [lhs_data, rhs_data]) =
            scope.split_mut(out.handle(), [self.handle(), rhs.handle()])?;
        let (a, b) = (
            MatRef::from_parts(self.layout(), lhs_data),
            MatRef::from_parts(rhs.layout(), rhs_data),
        );
        let mut c = MatMut::from_parts(out.layout(), dst);
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let dot = (0..a.cols()).map(|k| a.get(i, k) * b.get(k, j)).sum();
                c.set(i, j, dot);
            }
        }
        scope.keep();
        Ok(out)
    }

    fn check_same_shape(&self, rhs: &Matrix, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            })
        }
    }

    /// Copy `self`, run `op` on the copy, and keep it only if `op` succeeds.
    pub(crate) fn copy_then(
        &self,
        arena: &mut Arena,
        op: impl FnOnce(&Matrix, &mut Arena) -> Result<(), MatrixError>,
    ) -> Result<Matrix, MatrixError> {
        let mut scope = arena.scratch();
        let out = self.copy(&mut scope)?;
        op(&out, &mut scope)?;
        scope.keep();
        Ok(out)
    }

    fn zip_in_place(
        &self,
        rhs: &Matrix,
        op: &'static str,
        arena: &mut Arena,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<(), MatrixError> {
        self.check_same_shape(rhs, op)?;
        if !self.handle().overlaps(&rhs.handle()) {
            return zip_disjoint(self, rhs, arena, f);
        }
        // Aliased operands: read rhs from a snapshot.
        let mut scope = arena.scratch();
        let snapshot = rhs.copy(&mut scope)?;
        zip_disjoint(self, &snapshot, &mut scope, f)
    }
}

fn zip_disjoint(
    lhs: &Matrix,
    rhs: &Matrix,
    arena: &mut Arena,
    f: impl Fn(f32, f32) -> f32,
) -> Result<(), MatrixError> {
    let (dst, [src]) = arena.split_mut(lhs.handle(), [rhs.handle()])?;
    let b = MatRef::from_parts(rhs.layout(), src);
    let mut a = MatMut::from_parts(lhs.layout(), dst);
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            a.set(i, j, f(a.get(i, j), b.get(i, j)));
        }
    }
    Ok(())
}
