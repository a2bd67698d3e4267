//! Integration tests for the matrix algorithms through the facade.
//!
//! Each section checks one algebraic property on the reference fixtures,
//! plus the arena accounting: every operation leaves only its result
//! allocated.

use strata::prelude::*;
use strata_test_utils::{assert_close, fixtures, flatten, roomy_arena};

// ---------- Helpers ----------

fn rows(m: &Matrix, arena: &Arena) -> Vec<f32> {
    m.to_row_major(arena).unwrap()
}

fn identity_rows(n: usize) -> Vec<f32> {
    (0..n * n)
        .map(|k| if k / n == k % n { 1.0 } else { 0.0 })
        .collect()
}

// ---------- Test 1: double transpose ----------

#[test]
fn double_transpose_restores_shape_flag_and_values() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::PRINT_SAMPLE, &mut arena).unwrap();
    let mut t = a;
    t.transpose_in_place();
    assert_eq!(t.shape(), (4, 3));
    assert!(t.is_transposed());
    t.transpose_in_place();
    assert_eq!(t, a);
    assert_eq!(rows(&t, &arena), flatten(&fixtures::PRINT_SAMPLE));
}

// ---------- Test 2: multiplicative identity ----------

#[test]
fn multiply_by_identity_is_identity() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::PRINT_SAMPLE, &mut arena).unwrap();
    let i = Matrix::identity(a.cols(), &mut arena).unwrap();
    let p = a.multiply(&i, &mut arena).unwrap();
    assert_eq!(rows(&p, &arena), rows(&a, &arena));

    let at = a.transposed();
    let i = Matrix::identity(at.cols(), &mut arena).unwrap();
    let p = at.multiply(&i, &mut arena).unwrap();
    assert_eq!(rows(&p, &arena), rows(&at, &arena));
}

#[test]
fn multiply_reference_product() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::MULTIPLY_A, &mut arena).unwrap();
    let b = Matrix::from_rows(&fixtures::MULTIPLY_B, &mut arena).unwrap();
    let x = Matrix::from_data(3, 1, &fixtures::MULTIPLY_X, &mut arena).unwrap();
    let ab = a.multiply(&b, &mut arena).unwrap();
    let ax = a.multiply(&x, &mut arena).unwrap();
    assert_eq!(rows(&ab, &arena), fixtures::MULTIPLY_AB);
    assert_eq!(rows(&ax, &arena), fixtures::MULTIPLY_AX);
}

// ---------- Test 3: additive inverse ----------

#[test]
fn adding_negation_gives_zero() {
    let mut arena = roomy_arena();
    for a in [
        Matrix::from_rows(&fixtures::PRINT_SAMPLE, &mut arena).unwrap(),
        Matrix::from_rows(&fixtures::MULTIPLY_A, &mut arena).unwrap(),
    ] {
        let neg = a.scale(-1.0, &mut arena).unwrap();
        let sum = a.add(&neg, &mut arena).unwrap();
        let zero = Matrix::zero(a.rows(), a.cols(), &mut arena).unwrap();
        assert_close(&rows(&sum, &arena), &rows(&zero, &arena), 1e-6);
    }
}

// ---------- Test 4: determinant ----------

#[test]
fn determinant_of_proportional_rows_is_zero() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::DEPENDENT_ROWS, &mut arena).unwrap();
    assert_eq!(a.determinant(&mut arena).unwrap(), 0.0);
}

#[test]
fn determinant_matches_hand_computation() {
    let mut arena = roomy_arena();
    // no pivoting needed
    let a = Matrix::from_rows(&fixtures::MULTIPLY_A, &mut arena).unwrap();
    assert_eq!(a.determinant(&mut arena).unwrap(), 230.0);
    // one swap in column 0
    let b = Matrix::from_rows(&[[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [2.0, 0.0, 3.0]], &mut arena)
        .unwrap();
    assert_eq!(b.determinant(&mut arena).unwrap(), -4.0);
    // two swaps cancel
    let c = Matrix::from_rows(&[[0.0, 0.0, 2.0], [3.0, 0.0, 0.0], [0.0, 5.0, 0.0]], &mut arena)
        .unwrap();
    assert_eq!(c.determinant(&mut arena).unwrap(), 30.0);
    // block-diagonal, one swap
    let d = Matrix::from_rows(
        &[
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 1.0],
            [0.0, 0.0, 1.0, 2.0],
        ],
        &mut arena,
    )
    .unwrap();
    assert_close(&[d.determinant(&mut arena).unwrap()], &[-3.0], 1e-6);
}

#[test]
fn determinant_of_non_square_is_an_error() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::PRINT_SAMPLE, &mut arena).unwrap();
    assert!(matches!(
        a.determinant(&mut arena),
        Err(MatrixError::InvalidShape { rows: 3, cols: 4, .. })
    ));
}

// ---------- Test 5: inverse ----------

#[test]
fn inverse_round_trips_to_identity() {
    let mut arena = roomy_arena();
    for a in [
        Matrix::from_rows(&fixtures::MULTIPLY_A, &mut arena).unwrap(),
        Matrix::from_rows(&fixtures::SOLVE_A, &mut arena).unwrap(),
    ] {
        let inv = a.inverse(&mut arena).unwrap();
        let p = a.multiply(&inv, &mut arena).unwrap();
        assert_close(&rows(&p, &arena), &identity_rows(3), 1e-4);
    }
}

#[test]
fn inverse_of_singular_is_an_error() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::SINGULAR, &mut arena).unwrap();
    let used = arena.used();
    assert!(matches!(
        a.inverse(&mut arena),
        Err(MatrixError::Singular { .. })
    ));
    assert_eq!(arena.used(), used);
}

// ---------- Test 6: LU factorization ----------

#[test]
fn lu_factors_reproduce_permuted_input() {
    let mut arena = roomy_arena();
    for fixture in [fixtures::SOLVE_A, fixtures::MULTIPLY_A, fixtures::MULTIPLY_B] {
        let a = Matrix::from_rows(&fixture, &mut arena).unwrap();
        let Plu { p, l, u } = a.lu_factorize(&mut arena).unwrap();
        let pa = p.multiply(&a, &mut arena).unwrap();
        let lu = l.multiply(&u, &mut arena).unwrap();
        assert_close(&rows(&pa, &arena), &rows(&lu, &arena), 1e-4);
        for i in 0..3 {
            assert_eq!(l.get(i, i, &arena).unwrap(), 1.0);
            for j in i + 1..3 {
                assert_eq!(l.get(i, j, &arena).unwrap(), 0.0);
                assert_eq!(u.get(j, i, &arena).unwrap(), 0.0);
            }
        }
    }
}

#[test]
fn lu_of_rank_deficient_fails_and_releases() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::RANK_DEFICIENT, &mut arena).unwrap();
    let used = arena.used();
    assert!(matches!(
        a.lu_factorize(&mut arena),
        Err(MatrixError::RankDeficient { .. })
    ));
    assert_eq!(arena.used(), used);
}

// ---------- Test 7: LU solve ----------

#[test]
fn lu_solve_round_trip() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::SOLVE_A, &mut arena).unwrap();
    let b = Matrix::from_data(3, 1, &fixtures::SOLVE_B, &mut arena).unwrap();
    let x = a.lu_solve(&b, &mut arena).unwrap();
    assert_close(&rows(&x, &arena), &fixtures::SOLVE_X, 1e-5);
    let ax = a.multiply(&x, &mut arena).unwrap();
    assert_close(&rows(&ax, &arena), &fixtures::SOLVE_B, 1e-4);
}

// ---------- Test 8: column and row space ----------

#[test]
fn column_space_of_zero_matrix_is_the_unit_zero() {
    let mut arena = roomy_arena();
    let z = Matrix::zero(3, 3, &mut arena).unwrap();
    let space = z.column_space(&mut arena).unwrap();
    assert_eq!(space.rank, 0);
    assert_eq!(space.basis.shape(), (1, 1));
    assert_eq!(rows(&space.basis, &arena), vec![0.0]);
}

#[test]
fn column_space_of_full_rank_keeps_all_columns() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::MULTIPLY_A, &mut arena).unwrap();
    let space = a.column_space(&mut arena).unwrap();
    assert_eq!(space.rank, 3);
    assert_eq!(space.basis.shape(), (3, 3));
    assert_eq!(rows(&space.basis, &arena), flatten(&fixtures::MULTIPLY_A));
}

#[test]
fn column_space_after_two_free_column_swaps() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::LEADING_FREE, &mut arena).unwrap();
    let space = a.column_space(&mut arena).unwrap();
    assert_eq!(space.rank, 2);
    assert_eq!(space.indices.as_slice(), &[2, 3]);
    // every basis column is an unmodified column of the input
    for (k, &col) in space.indices.iter().enumerate() {
        for row in 0..a.rows() {
            assert_eq!(
                space.basis.get(row, k, &arena).unwrap(),
                a.get(row, col, &arena).unwrap()
            );
        }
    }
}

#[test]
fn row_space_is_drawn_from_input_rows() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::DEPENDENT_ROWS, &mut arena).unwrap();
    let space = a.row_space(&mut arena).unwrap();
    assert_eq!(space.rank, 2);
    assert!(!a.is_transposed());
    for (k, &row) in space.indices.iter().enumerate() {
        for col in 0..a.cols() {
            assert_eq!(
                space.basis.get(k, col, &arena).unwrap(),
                a.get(row, col, &arena).unwrap()
            );
        }
    }
}

// ---------- Test 9: print convention ----------

#[test]
fn display_prints_three_decimals_per_element() {
    let mut arena = roomy_arena();
    let a = Matrix::from_rows(&fixtures::PRINT_SAMPLE, &mut arena).unwrap();
    let text = a.view(&arena).unwrap().to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "1.500 2.500 3.500 5.000 ");
    assert_eq!(text.lines().count(), 3);

    let t = a.transposed().view(&arena).unwrap().to_string();
    assert_eq!(t.lines().next().unwrap(), "1.500 4.000 7.000 ");
}

// ---------- Test 10: randomized properties ----------

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_data() -> impl Strategy<Value = (usize, usize, Vec<f32>)> {
        (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
            (
                Just(r),
                Just(c),
                proptest::collection::vec(-50.0f32..50.0, r * c),
            )
        })
    }

    /// Row-major `n x n` entries whose diagonal outweighs the rest of its
    /// row, so elimination never meets a zero pivot.
    fn dominant_data() -> impl Strategy<Value = (usize, Vec<f32>)> {
        (2usize..9).prop_flat_map(|n| {
            proptest::collection::vec(-1.0f32..1.0, n * n).prop_map(move |mut data| {
                for i in 0..n {
                    let off: f32 = (0..n)
                        .filter(|&j| j != i)
                        .map(|j| data[i * n + j].abs())
                        .sum();
                    data[i * n + i] = off + 1.0;
                }
                (n, data)
            })
        })
    }

    proptest! {
        #[test]
        fn lu_factors_and_inverse_hold_on_dominant_inputs((n, data) in dominant_data()) {
            let mut arena = roomy_arena();
            let stored = Matrix::from_data(n, n, &data, &mut arena).unwrap();
            for a in [stored, stored.transposed()] {
                let base = arena.used();
                let Plu { p, l, u } = a.lu_factorize(&mut arena).unwrap();
                prop_assert_eq!(arena.used(), base + 3 * n * n);
                let pa = p.multiply(&a, &mut arena).unwrap();
                let lu = l.multiply(&u, &mut arena).unwrap();
                assert_close(&rows(&pa, &arena), &rows(&lu, &arena), 1e-4);

                let inv = a.inverse(&mut arena).unwrap();
                let product = a.multiply(&inv, &mut arena).unwrap();
                assert_close(&rows(&product, &arena), &identity_rows(n), 1e-4);

                // dominance rules out row swaps, so det is the U diagonal
                let expected: f32 = (0..n).map(|k| u.get(k, k, &arena).unwrap()).product();
                let det = a.determinant(&mut arena).unwrap();
                prop_assert!(det.is_finite());
                prop_assert!((det - expected).abs() <= 1e-3 * expected.abs());
            }
        }

        #[test]
        fn double_transpose_is_identity((r, c, data) in matrix_data()) {
            let mut arena = roomy_arena();
            let a = Matrix::from_data(r, c, &data, &mut arena).unwrap();
            let back = a.transposed().transposed();
            prop_assert_eq!(back, a);
            prop_assert_eq!(rows(&back, &arena), data);
        }

        #[test]
        fn transpose_copy_reads_as_transpose((r, c, data) in matrix_data()) {
            let mut arena = roomy_arena();
            let a = Matrix::from_data(r, c, &data, &mut arena).unwrap();
            let t = a.transpose_copy(&mut arena).unwrap();
            for i in 0..r {
                for j in 0..c {
                    prop_assert_eq!(t.get(j, i, &arena).unwrap(), data[i * c + j]);
                }
            }
        }

        #[test]
        fn add_negation_is_zero((r, c, data) in matrix_data()) {
            let mut arena = roomy_arena();
            let a = Matrix::from_data(r, c, &data, &mut arena).unwrap();
            let neg = a.scale(-1.0, &mut arena).unwrap();
            let sum = a.add(&neg, &mut arena).unwrap();
            prop_assert!(rows(&sum, &arena).iter().all(|v| *v == 0.0));
        }

        #[test]
        fn determinant_of_triangular_is_diagonal_product(
            diag in proptest::collection::vec(1.0f32..4.0, 4),
            upper in proptest::collection::vec(-3.0f32..3.0, 6),
        ) {
            let mut arena = roomy_arena();
            let mut data = [0.0f32; 16];
            let mut k = 0;
            for i in 0..4 {
                data[i * 4 + i] = diag[i];
                for j in i + 1..4 {
                    data[i * 4 + j] = upper[k];
                    k += 1;
                }
            }
            let a = Matrix::from_data(4, 4, &data, &mut arena).unwrap();
            let expected: f32 = diag.iter().product();
            let det = a.determinant(&mut arena).unwrap();
            prop_assert!((det - expected).abs() <= 1e-3 * expected.abs());
            // lower-triangular reads the same storage through the flag
            let det_t = a.transposed().determinant(&mut arena).unwrap();
            prop_assert!((det_t - expected).abs() <= 1e-3 * expected.abs());
        }
    }
}
