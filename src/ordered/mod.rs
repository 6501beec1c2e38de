//! In-place utilities over an owned, comparator-ordered buffer.
//!
//! [`OrderedArray`] owns a `Vec<T>` and the comparison rule that orders it,
//! and provides:
//!
//! - [`sort`](OrderedArray::sort): stable in-place sort
//! - [`dedup`](OrderedArray::dedup): in-place compaction of equal runs
//! - [`binary_search`](OrderedArray::binary_search): range search returning a
//!   [`SearchOutcome`]
//! - [`discretize`](OrderedArray::discretize): rank of every element among the
//!   distinct values
//!
//! # Examples
//!
//! ```rust
//! use ordkit::ordered::OrderedArray;
//!
//! let scores = OrderedArray::new(vec![300, 10, 300, 42]);
//! assert_eq!(scores.discretize(), vec![2, 0, 2, 1]);
//! ```

mod array;
mod outcome;

pub use array::OrderedArray;
pub use outcome::SearchOutcome;
