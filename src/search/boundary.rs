//! Integer and real bisection over half-open intervals.

use num_traits::Float;

use crate::error::{AlgorithmError, Bound};

/// Primitive integers that can be bisected without overflow.
///
/// The midpoint of `[low, high)` is computed by reinterpreting the span
/// `high - low` as the unsigned type of the same width, halving it, and adding
/// it back to `low`. This is exact for every `low < high`, including spans that
/// do not fit in the signed type.
///
/// The trait is implemented for every primitive integer type and is not meant
/// to be implemented outside this crate.
pub trait BisectInteger: Copy + Ord {
    /// Returns the midpoint of `[low, high)`, rounded toward `low`.
    ///
    /// Requires `low < high`.
    fn midpoint(low: Self, high: Self) -> Self;

    /// Returns `self + 1`.
    ///
    /// Only called on values strictly below some other value, so it never
    /// overflows.
    fn successor(self) -> Self;
}

macro_rules! impl_bisect_integer {
    ($($integer:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl BisectInteger for $integer {
                #[inline]
                #[allow(
                    clippy::cast_sign_loss,
                    clippy::cast_possible_wrap,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn midpoint(low: Self, high: Self) -> Self {
                    let span = high.wrapping_sub(low) as $unsigned;
                    low.wrapping_add((span / 2) as Self)
                }

                #[inline]
                fn successor(self) -> Self {
                    self + 1
                }
            }
        )*
    };
}

impl_bisect_integer!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

/// Finds the least integer `n` in `[low, high)` such that `predicate(n)` holds.
///
/// The predicate must be monotonic over the interval: for all `a > b` in
/// `[low, high)`, `predicate(b)` implies `predicate(a)`. If it is not, the
/// result is unspecified.
///
/// Returns `high` when no point satisfies the predicate or when the interval is
/// empty (`low >= high`).
///
/// # Examples
///
/// ```rust
/// use ordkit::search::find_least_true;
///
/// let square_root = |x: i32| find_least_true(0, x, |n| n * n >= x);
///
/// assert_eq!(square_root(100), 10);
/// assert_eq!(square_root(101), 11);
/// // Empty interval: the right endpoint comes back unchanged.
/// assert_eq!(square_root(-3), -3);
/// ```
pub fn find_least_true<N, P>(mut low: N, mut high: N, mut predicate: P) -> N
where
    N: BisectInteger,
    P: FnMut(N) -> bool,
{
    let mut iterations: u32 = 0;

    while low < high {
        let middle = N::midpoint(low, high);
        if predicate(middle) {
            high = middle;
        } else {
            low = middle.successor();
        }
        iterations += 1;
    }

    tracing::trace!(iterations, "integer bisection finished");
    high
}

/// Finds the least real `x` in `[low, high)` such that `predicate(x)` holds,
/// to within `eps`.
///
/// The predicate must be monotonic over the interval, as for
/// [`find_least_true`]. The search narrows the interval until it is no wider
/// than `eps`, or until the floating-point midpoint can no longer be
/// distinguished from an endpoint, and then returns the right endpoint.
///
/// With `eps > 0` this takes `O(log((high - low) / eps))` predicate calls; with
/// `eps == 0` it runs until floating-point precision is exhausted.
///
/// Returns `high` when the interval is empty (`low >= high - eps`). Equal
/// infinite bounds are accepted and returned unchanged.
///
/// # Errors
///
/// - [`AlgorithmError::InvalidTolerance`] if `eps` is negative or NaN.
/// - [`AlgorithmError::NanBound`] if `low` or `high` is NaN.
/// - [`AlgorithmError::UnboundedRange`] if `high - low` is positive infinity.
///
/// # Examples
///
/// ```rust
/// use ordkit::search::find_least_true_real;
///
/// let square_root = |x: f64| find_least_true_real(0.0, x, |n| n * n >= x, 1e-7);
///
/// assert!((square_root(5.0).unwrap() - 5.0_f64.sqrt()).abs() < 1e-7);
/// assert_eq!(square_root(-3.0).unwrap(), -3.0);
///
/// let unbounded = find_least_true_real(0.0, f64::INFINITY, |x| x > 1.0, 1e-7);
/// assert!(unbounded.is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn find_least_true_real<F, P>(
    mut low: F,
    mut high: F,
    mut predicate: P,
    eps: F,
) -> Result<F, AlgorithmError>
where
    F: Float,
    P: FnMut(F) -> bool,
{
    validate_real_range(low, high, eps)?;

    let two = F::one() + F::one();
    let mut iterations: u32 = 0;

    while low < high - eps {
        let middle = low + (high - low) / two;
        if middle == low || middle == high {
            break;
        }
        if predicate(middle) {
            high = middle;
        } else {
            low = middle;
        }
        iterations += 1;
    }

    tracing::trace!(iterations, "real bisection finished");
    Ok(high)
}

fn validate_real_range<F: Float>(low: F, high: F, eps: F) -> Result<(), AlgorithmError> {
    let error = if eps.is_nan() || eps < F::zero() {
        Some(AlgorithmError::InvalidTolerance {
            eps: widen(eps),
        })
    } else if low.is_nan() {
        Some(AlgorithmError::NanBound {
            bound: Bound::Lower,
        })
    } else if high.is_nan() {
        Some(AlgorithmError::NanBound {
            bound: Bound::Upper,
        })
    } else if high - low == F::infinity() {
        Some(AlgorithmError::UnboundedRange {
            low: widen(low),
            high: widen(high),
        })
    } else {
        None
    };

    match error {
        Some(error) => {
            tracing::debug!(%error, "rejected real bisection arguments");
            Err(error)
        }
        None => Ok(()),
    }
}

fn widen<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
