//! Bisection search for the boundary of a monotonic predicate.
//!
//! A predicate is monotonic over `[low, high)` when it is false-then-true:
//! once it holds at some point it holds at every greater point. The functions
//! here find the least point where it holds.
//!
//! - [`find_least_true`]: exact search over any primitive integer type
//! - [`find_least_true_real`]: tolerance-bounded search over `f32`/`f64`
//!
//! # Examples
//!
//! ```rust
//! use ordkit::search::{find_least_true, find_least_true_real};
//!
//! // Integer square root (rounded up).
//! assert_eq!(find_least_true(0, 100, |n: i32| n * n >= 10), 4);
//!
//! // Real square root.
//! let root = find_least_true_real(0.0, 2.0, |x: f64| x * x >= 2.0, 1e-9).unwrap();
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

mod boundary;

pub use boundary::{BisectInteger, find_least_true, find_least_true_real};
