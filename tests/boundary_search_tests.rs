#![cfg(feature = "search")]
//! Unit tests for integer and real bisection.
//!
//! Tests cover:
//! - Exact integer boundaries, empty intervals, and extreme bounds
//! - Real convergence within tolerance
//! - Argument validation (tolerance, NaN bounds, unbounded ranges)
//! - Degenerate infinite intervals

use ordkit::error::{AlgorithmError, Bound, ErrorKind};
use ordkit::search::{find_least_true, find_least_true_real};
use rstest::rstest;

fn integer_square_root(x: i32) -> i32 {
    find_least_true(0, x, |n| n * n >= x)
}

fn real_square_root(x: f64) -> f64 {
    find_least_true_real(0.0, x, |n| n * n >= x, 1e-7).unwrap()
}

// =============================================================================
// Integer Variant
// =============================================================================

#[rstest]
#[case(100, 10)]
#[case(101, 11)]
#[case(1, 1)]
#[case(2, 2)]
#[case(10_000, 100)]
fn test_integer_square_root(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(integer_square_root(input), expected);
}

#[rstest]
fn test_integer_empty_interval_returns_right_endpoint() {
    assert_eq!(integer_square_root(-3), -3);
    assert_eq!(find_least_true(5, 5, |_: i32| true), 5);
    assert_eq!(find_least_true(9, 2, |_: i32| true), 2);
}

#[rstest]
fn test_integer_never_true_returns_right_endpoint() {
    assert_eq!(find_least_true(-50, 50, |_: i64| false), 50);
}

#[rstest]
fn test_integer_always_true_returns_left_endpoint() {
    assert_eq!(find_least_true(-50, 50, |_: i64| true), -50);
}

#[rstest]
fn test_integer_does_not_evaluate_outside_interval() {
    let mut visited = Vec::new();
    let result = find_least_true(10, 20, |n: i32| {
        visited.push(n);
        n >= 17
    });

    assert_eq!(result, 17);
    assert!(visited.iter().all(|n| (10..20).contains(n)));
}

#[rstest]
fn test_integer_full_signed_range_does_not_overflow() {
    assert_eq!(find_least_true(i32::MIN, i32::MAX, |n| n >= 0), 0);
    assert_eq!(find_least_true(i32::MIN, i32::MAX, |n| n >= i32::MAX - 1), i32::MAX - 1);
    assert_eq!(find_least_true(i64::MIN, i64::MAX, |_| true), i64::MIN);
}

#[rstest]
fn test_integer_full_unsigned_range_does_not_overflow() {
    assert_eq!(find_least_true(0_u64, u64::MAX, |n| n > u64::MAX / 3), u64::MAX / 3 + 1);
    assert_eq!(find_least_true(0_u8, u8::MAX, |n| n >= 200), 200);
}

#[rstest]
fn test_integer_works_for_usize() {
    let sorted = [1, 3, 3, 5, 8, 13];
    let first_at_least_four = find_least_true(0, sorted.len(), |index| sorted[index] >= 4);
    assert_eq!(first_at_least_four, 3);
}

// =============================================================================
// Real Variant
// =============================================================================

#[rstest]
#[case(2.0)]
#[case(5.0)]
#[case(1000.0)]
#[case(1.0)]
fn test_real_square_root_within_tolerance(#[case] input: f64) {
    assert!((real_square_root(input) - input.sqrt()).abs() <= 1e-7);
}

#[rstest]
fn test_real_negative_input_returns_right_endpoint() {
    assert!((real_square_root(-std::f64::consts::PI) + std::f64::consts::PI).abs() < 1e-12);
}

#[rstest]
fn test_real_zero_tolerance_runs_to_precision_limit() {
    let root = find_least_true_real(0.0, 2.0, |n: f64| n * n >= 2.0, 0.0).unwrap();
    assert!((root - std::f64::consts::SQRT_2).abs() <= f64::EPSILON * 4.0);
}

#[rstest]
fn test_real_supports_f32() {
    let root = find_least_true_real(0.0_f32, 10.0, |n| n * n >= 10.0, 1e-4).unwrap();
    assert!((root - 10.0_f32.sqrt()).abs() <= 1e-4);
}

#[rstest]
fn test_real_result_satisfies_predicate() {
    let root = find_least_true_real(-10.0, 10.0, |x: f64| x >= 1.5, 1e-9).unwrap();
    assert!(root >= 1.5);
    assert!(root - 1.5 <= 1e-9);
}

#[rstest]
fn test_real_equal_infinite_bounds_are_returned() {
    let low = find_least_true_real(f64::NEG_INFINITY, f64::NEG_INFINITY, |_| true, 1e-7);
    let high = find_least_true_real(f64::INFINITY, f64::INFINITY, |_| true, 1e-7);

    assert_eq!(low, Ok(f64::NEG_INFINITY));
    assert_eq!(high, Ok(f64::INFINITY));
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
fn test_real_negative_tolerance_is_invalid_argument() {
    let error = find_least_true_real(-5.0, 3.0, |x: f64| x > 0.0, -1e-7).unwrap_err();
    assert_eq!(error, AlgorithmError::InvalidTolerance { eps: -1e-7 });
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[rstest]
fn test_real_nan_tolerance_is_invalid_argument() {
    let error = find_least_true_real(0.0, 3.0, |x: f64| x > 0.0, f64::NAN).unwrap_err();
    assert!(matches!(error, AlgorithmError::InvalidTolerance { eps } if eps.is_nan()));
}

#[rstest]
#[case(f64::NAN, 3.0, Bound::Lower)]
#[case(0.0, f64::NAN, Bound::Upper)]
fn test_real_nan_bound_is_invalid_domain(
    #[case] low: f64,
    #[case] high: f64,
    #[case] bound: Bound,
) {
    let error = find_least_true_real(low, high, |x| x > 0.0, 1e-7).unwrap_err();
    assert_eq!(error, AlgorithmError::NanBound { bound });
    assert_eq!(error.kind(), ErrorKind::InvalidDomain);
}

#[rstest]
#[case(f64::NEG_INFINITY, 3.0)]
#[case(0.0, f64::INFINITY)]
#[case(f64::NEG_INFINITY, f64::INFINITY)]
#[case(-f64::MAX, f64::MAX)]
fn test_real_unbounded_range_is_invalid_domain(#[case] low: f64, #[case] high: f64) {
    let error = find_least_true_real(low, high, |x| x > 0.0, 1e-7).unwrap_err();
    assert_eq!(error, AlgorithmError::UnboundedRange { low, high });
    assert_eq!(error.kind(), ErrorKind::InvalidDomain);
}

#[rstest]
fn test_real_validation_does_not_call_predicate() {
    let mut calls = 0;
    let result = find_least_true_real(
        0.0,
        f64::INFINITY,
        |_: f64| {
            calls += 1;
            true
        },
        1e-7,
    );
    assert!(result.is_err());
    assert_eq!(calls, 0);
}
