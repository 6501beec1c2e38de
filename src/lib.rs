//! # ordkit
//!
//! Small, generic algorithms over ordered domains.
//!
//! ## Overview
//!
//! - **Boundary search**: bisection for the least point where a monotonic
//!   predicate holds, over integers and reals
//! - **Iterated sequences**: lazy `x, f(x), f(f(x)), …` cut off by a fixed
//!   length or by repeat detection (tortoise-hare or seen-set)
//! - **Ordered arrays**: an owned buffer with its comparator, offering sort,
//!   dedup, range binary search, and discretization into ranks
//!
//! Every operation is synchronous and single-threaded. Invalid input is
//! reported through [`error::AlgorithmError`]; nothing panics on caller input.
//!
//! ## Feature Flags
//!
//! - `search`: Boundary search
//! - `sequence`: Iterated sequences
//! - `ordered`: Ordered arrays
//! - `serde`: Serialization of the plain data types
//! - `fxhash` / `ahash`: Faster hasher for seen-set repeat detection
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! assert_eq!(find_least_true(0, 1_000, |n: u32| n * n >= 500), 23);
//!
//! let sequence = SequenceBuilder::new()
//!     .first(1)
//!     .iterate_by(|x: &u32| x * 3 % 7)
//!     .seen_set()
//!     .build()?;
//! assert_eq!(sequence.iter().count(), 6);
//!
//! let ranks = OrderedArray::new(vec!['c', 'a', 'c', 'b']).discretize();
//! assert_eq!(ranks, vec![2, 0, 2, 1]);
//! # Ok::<(), ordkit::error::AlgorithmError>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]: validation failures at
//! `debug`, finished searches at `trace`, and cycle detection at `debug`.
//! Install any subscriber to see them; element values are never logged.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use ordkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AlgorithmError, ErrorKind};

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;
}

pub mod error;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "ordered")]
pub mod ordered;
