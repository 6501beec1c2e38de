//! Lazy iterated sequences with pluggable termination.
//!
//! A sequence is `x₀, f(x₀), f(f(x₀)), …` for a first element `x₀` and an
//! iterate function `f`. Because `f` may cycle forever, every sequence carries
//! a [`Termination`] strategy:
//!
//! - [`Termination::FixedLength`]: a fixed number of elements
//! - [`Termination::TortoiseHare`]: constant-memory repeat detection with two
//!   cursors moving at different speeds
//! - [`Termination::SeenSet`]: exact repeat detection with a hash set of
//!   everything emitted so far
//!
//! [`Sequence`] is the immutable configuration; [`Sequence::iter`] hands out
//! independent [`SequenceIter`] cursors. [`SequenceBuilder`] assembles a
//! `Sequence` step by step and validates it on `build`.
//!
//! A runtime [`Termination`] needs elements that are `Clone + Eq + Hash`.
//! The marker types [`FixedLength`], [`TortoiseHare`] and [`SeenSet`] fix the
//! strategy at compile time and relax that: a fixed-length sequence of `f64`
//! needs only `Clone`, a tortoise-hare one only `Clone + Eq`.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::sequence::SequenceBuilder;
//!
//! let sequence = SequenceBuilder::new()
//!     .first(1)
//!     .iterate_by(|x: &u32| x * 7 % 10)
//!     .length(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 7, 9, 3, 1]);
//! ```
//!
//! ## Tortoise-hare versus seen-set
//!
//! Both stop on a repeated value, but they report different amounts of the
//! cycle. The seen-set cursor stops exactly before the first repeat. The
//! tortoise-hare cursor stops when its two internal cursors meet, which can be
//! well after the first repeat:
//!
//! ```rust
//! use ordkit::sequence::{Sequence, Termination};
//!
//! let iterate = |x: &u32| x * 3 % 7;
//!
//! let exact = Sequence::new(1, iterate, Termination::SeenSet);
//! assert_eq!(exact.iter().collect::<Vec<_>>(), vec![1, 3, 2, 6, 4, 5]);
//!
//! let floyd = Sequence::new(1, iterate, Termination::TortoiseHare);
//! assert_eq!(
//!     floyd.iter().collect::<Vec<_>>(),
//!     vec![1, 3, 2, 6, 4, 5, 1, 3, 2, 6, 4, 5]
//! );
//! ```

mod builder;
mod cursor;
mod generator;
mod strategy;
mod termination;

pub use builder::SequenceBuilder;
pub use cursor::SequenceIter;
pub use generator::Sequence;
pub use strategy::{Advance, FixedLength, SeenSet, Strategy, TortoiseHare};
pub use termination::Termination;
