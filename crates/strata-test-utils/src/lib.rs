//! Shared fixtures and float-comparison helpers for strata tests.
//!
//! Fixtures are plain row arrays so they can feed any crate's tests
//! without tying this crate to a particular matrix type. Arena helpers
//! build the small and growth-prone arenas most tests start from.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_arena::{Arena, ArenaConfig};

/// An arena large enough that typical tests never grow it.
pub fn roomy_arena() -> Arena {
    Arena::with_capacity(4096).expect("4096-element arena")
}

/// An arena whose first block holds only `initial` elements, so almost
/// any test workload forces growth.
pub fn tight_arena(initial: usize) -> Arena {
    Arena::new(ArenaConfig::new(initial)).expect("valid tight arena config")
}

/// Whether `a` and `b` differ by at most `tol`, absolutely.
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Assert two element sequences have equal length and agree within `tol`.
///
/// A `tol` of zero demands exact equality.
#[track_caller]
pub fn assert_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: actual {actual:?}, expected {expected:?}"
    );
    for (k, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(a, e, tol),
            "element {k}: {a} vs {e} (tol {tol})\n  actual:   {actual:?}\n  expected: {expected:?}"
        );
    }
}

/// Row-major elements of a fixed-width row array.
pub fn flatten<const N: usize>(rows: &[[f32; N]]) -> Vec<f32> {
    rows.iter().flatten().copied().collect()
}
