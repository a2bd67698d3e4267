//! Error types for matrix operations.
//!
//! Every fallible operation returns [`MatrixError`]; none of them panic
//! or exit on bad input. In-place operations validate before writing, so
//! an error leaves their operands untouched.

use std::error::Error;
use std::fmt;

use strata_arena::ArenaError;

/// Which index of a matrix an [`MatrixError::IndexOutOfBounds`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A row index.
    Row,
    /// A column index.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Errors from matrix construction, arithmetic, and elimination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation.
    DimensionMismatch {
        /// The operation that was attempted.
        op: &'static str,
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },
    /// A row or column argument outside `[0, bound)`.
    IndexOutOfBounds {
        /// Whether `index` is a row or a column.
        axis: Axis,
        /// The rejected index.
        index: usize,
        /// The row or column count it was checked against.
        bound: usize,
    },
    /// A shape the operation cannot accept, such as a non-square input to
    /// an operation defined only for square matrices.
    InvalidShape {
        /// Rows of the offending shape.
        rows: usize,
        /// Columns of the offending shape.
        cols: usize,
        /// What the operation required.
        reason: &'static str,
    },
    /// No pivot exists in `column`: the matrix has no inverse.
    Singular {
        /// The column where elimination found no pivot.
        column: usize,
    },
    /// No pivot exists in `column`: the matrix has no LU factorization.
    RankDeficient {
        /// The column where elimination found no pivot.
        column: usize,
    },
    /// The backing arena could not allocate or resolve storage.
    Arena(ArenaError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { op, left, right } => {
                write!(
                    f,
                    "dimension mismatch in {op}: left is {} x {}, right is {} x {}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::IndexOutOfBounds { axis, index, bound } => {
                write!(f, "{axis} {index} out of bounds (0-indexed, {bound} total)")
            }
            Self::InvalidShape { rows, cols, reason } => {
                write!(f, "invalid shape {rows} x {cols}: {reason}")
            }
            Self::Singular { column } => {
                write!(f, "matrix is singular: no pivot in column {column}")
            }
            Self::RankDeficient { column } => {
                write!(f, "matrix is rank-deficient: no pivot in column {column}")
            }
            Self::Arena(err) => write!(f, "arena error: {err}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for MatrixError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}
