//! Reference matrices with known properties.
//!
//! Each constant documents the property tests rely on.

/// Non-square 3 x 4 sample; prints as `1.500 2.500 3.500 5.000 ` on its
/// first row.
pub const PRINT_SAMPLE: [[f32; 4]; 3] = [
    [1.5, 2.5, 3.5, 5.0],
    [4.0, 5.0, 6.0, 5.0],
    [7.0, 8.0, 9.0, 5.0],
];

/// Invertible without any row swap; determinant 230.
pub const MULTIPLY_A: [[f32; 3]; 3] = [[1.0, 5.0, -3.0], [-1.0, 0.0, 4.0], [12.0, 5.0, -1.0]];

/// Right-hand operand for [`MULTIPLY_A`].
pub const MULTIPLY_B: [[f32; 3]; 3] = [[7.0, -2.0, 4.0], [-1.0, -1.0, 3.0], [1.0, 2.0, -3.0]];

/// `MULTIPLY_A * MULTIPLY_B`, row-major.
pub const MULTIPLY_AB: [f32; 9] = [-1.0, -13.0, 28.0, -3.0, 10.0, -16.0, 78.0, -31.0, 66.0];

/// Column vector `x` with `MULTIPLY_A * x = MULTIPLY_AX`.
pub const MULTIPLY_X: [f32; 3] = [1.0, -2.0, 4.0];

/// `MULTIPLY_A * MULTIPLY_X`.
pub const MULTIPLY_AX: [f32; 3] = [-21.0, 15.0, -2.0];

/// Row 1 is three times row 0: determinant 0, rank 2.
pub const DEPENDENT_ROWS: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [3.0, 3.0, 3.0], [0.0, 4.5, -4.0]];

/// Row 2 is the sum of rows 0 and 1; elimination finds no pivot in
/// column 2.
pub const SINGULAR: [[f32; 3]; 3] = [[1.0, 3.0, -1.0], [-4.0, 2.0, 2.0], [-3.0, 5.0, 1.0]];

/// Needs row swaps in columns 0 and 1, then has no pivot in column 2.
pub const RANK_DEFICIENT: [[f32; 3]; 3] = [[0.0, 2.0, 1.0], [0.0, 0.0, 0.0], [2.0, 1.0, 1.0]];

/// Needs a row swap in column 0; `SOLVE_A * x = SOLVE_B` has solution
/// [`SOLVE_X`].
pub const SOLVE_A: [[f32; 3]; 3] = [[0.0, 1.0, 3.0], [2.0, -10.0, 2.0], [1.0, -3.0, 0.0]];

/// Right-hand side for [`SOLVE_A`].
pub const SOLVE_B: [f32; 3] = [-1.0, -20.0, -5.0];

/// Solution of `SOLVE_A * x = SOLVE_B`.
pub const SOLVE_X: [f32; 3] = [1.0, 2.0, -1.0];

/// First two columns are zero; the column space is spanned by columns 2
/// and 3, found only after two free-column swaps.
pub const LEADING_FREE: [[f32; 4]; 3] = [
    [0.0, 0.0, 1.0, 2.0],
    [0.0, 0.0, 3.0, 4.0],
    [0.0, 0.0, 5.0, 6.0],
];
