//! LU factorization with row pivoting, and linear solves through it.

use strata_arena::Arena;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::{MatMut, MatRef};

/// A factorization `P * A = L * U` of a square matrix `A`.
///
/// `P` is a permutation matrix, `L` is unit lower-triangular and `U` is
/// upper-triangular. All three live in the arena they were factored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plu {
    /// Row permutation.
    pub p: Matrix,
    /// Unit lower-triangular factor.
    pub l: Matrix,
    /// Upper-triangular factor.
    pub u: Matrix,
}

impl Matrix {
    /// Factor `P * self = L * U` by Gaussian elimination.
    ///
    /// Pivots on the first non-zero entry at or below the diagonal. When
    /// rows are exchanged, the multipliers already recorded in `L` for
    /// those rows are exchanged with them. Fails with
    /// [`MatrixError::RankDeficient`] if some column has no pivot, in
    /// which case nothing stays allocated.
    pub fn lu_factorize(&self, arena: &mut Arena) -> Result<Plu, MatrixError> {
        self.layout()
            .check_square("LU factorization requires a square matrix")?;
        let n = self.rows();
        let mut scope = arena.scratch();
        let p = Matrix::identity(n, &mut scope)?;
        let l = Matrix::identity(n, &mut scope)?;
        let u = self.copy(&mut scope)?;
        {
            let [ps, ls, us] = scope.disjoint_mut([p.handle(), l.handle(), u.handle()])?;
            let mut pm = MatMut::from_parts(p.layout(), ps);
            let mut lm = MatMut::from_parts(l.layout(), ls);
            let mut um = MatMut::from_parts(u.layout(), us);
            eliminate(&mut pm, &mut lm, &mut um)?;
        }
        scope.keep();
        Ok(Plu { p, l, u })
    }

    /// Solve `self * x = b` for a column vector `b` via LU factorization.
    ///
    /// Only `x` stays allocated; the factors and intermediates are
    /// released on every path.
    pub fn lu_solve(&self, b: &Matrix, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        self.layout()
            .check_square("LU solve requires a square matrix")?;
        check_rhs(self.rows(), b)?;
        let mut outer = arena.scratch();
        let x = Matrix::zero(self.rows(), 1, &mut outer)?;
        {
            let mut inner = outer.scratch();
            let plu = self.lu_factorize(&mut inner)?;
            plu.substitute(b, &x, &mut inner)?;
        }
        outer.keep();
        Ok(x)
    }
}

impl Plu {
    /// Order of the factored matrix.
    pub fn order(&self) -> usize {
        self.u.rows()
    }

    /// Solve `A * x = b` with this factorization of `A`.
    pub fn solve(&self, b: &Matrix, arena: &mut Arena) -> Result<Matrix, MatrixError> {
        check_rhs(self.order(), b)?;
        let mut scope = arena.scratch();
        let x = Matrix::zero(self.order(), 1, &mut scope)?;
        self.substitute(b, &x, &mut scope)?;
        scope.keep();
        Ok(x)
    }

    /// Forward-substitute `L * y = P * b`, then back-substitute
    /// `U * x = y` into `x`.
    fn substitute(&self, b: &Matrix, x: &Matrix, arena: &mut Arena) -> Result<(), MatrixError> {
        let n = self.order();
        let mut scope = arena.scratch();
        let pb = self.p.multiply(b, &mut scope)?;
        let y = Matrix::zero(n, 1, &mut scope)?;

        let (ys, [pb_data, l_data]) =
            scope.split_mut(y.handle(), [pb.handle(), self.l.handle()])?;
        let pb_v = MatRef::from_parts(pb.layout(), pb_data);
        let l = MatRef::from_parts(self.l.layout(), l_data);
        let mut yv = MatMut::from_parts(y.layout(), ys);
        for r in 0..n {
            let acc: f32 = (0..r).map(|c| l.get(r, c) * yv.get(c, 0)).sum();
            yv.set(r, 0, pb_v.get(r, 0) - acc);
        }

        let (xs, [y_data, u_data]) =
            scope.split_mut(x.handle(), [y.handle(), self.u.handle()])?;
        let yv = MatRef::from_parts(y.layout(), y_data);
        let u = MatRef::from_parts(self.u.layout(), u_data);
        let mut xv = MatMut::from_parts(x.layout(), xs);
        for r in (0..n).rev() {
            let acc: f32 = (r + 1..n).map(|c| u.get(r, c) * xv.get(c, 0)).sum();
            xv.set(r, 0, (yv.get(r, 0) - acc) / u.get(r, r));
        }
        Ok(())
    }
}

fn check_rhs(n: usize, b: &Matrix) -> Result<(), MatrixError> {
    if b.shape() == (n, 1) {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            op: "lu_solve",
            left: (n, n),
            right: b.shape(),
        })
    }
}

fn eliminate(p: &mut MatMut<'_>, l: &mut MatMut<'_>, u: &mut MatMut<'_>) -> Result<(), MatrixError> {
    let n = u.rows();
    for i in 0..n {
        let pivot_row = u
            .find_pivot(i, i)
            .ok_or(MatrixError::RankDeficient { column: i })?;
        if pivot_row != i {
            u.row_swap(i, pivot_row)?;
            p.row_swap(i, pivot_row)?;
            for c in 0..i {
                let (a, b) = (l.get(i, c), l.get(pivot_row, c));
                l.set(i, c, b);
                l.set(pivot_row, c, a);
            }
        }
        let pivot = u.get(i, i);
        for j in i + 1..n {
            let rv = u.get(j, i);
            if rv == 0.0 {
                continue;
            }
            let k = rv / pivot;
            u.row_linear_combination(j, 1.0, i, -k)?;
            u.set(j, i, 0.0);
            l.set(j, i, k);
        }
    }
    Ok(())
}
