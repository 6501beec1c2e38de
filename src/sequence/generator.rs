//! The immutable, restartable iterated sequence.

use std::fmt;

use super::{Advance, SequenceIter, Strategy, Termination};

/// An iterated sequence `first, f(first), f(f(first)), …` bounded by a
/// termination strategy.
///
/// The strategy `S` is either the runtime [`Termination`] tag (the default,
/// and what [`SequenceBuilder`](super::SequenceBuilder) produces) or one of
/// the marker types [`FixedLength`](super::FixedLength),
/// [`TortoiseHare`](super::TortoiseHare) and [`SeenSet`](super::SeenSet),
/// which only require the element bounds their strategy uses.
///
/// A `Sequence` is a configuration value, not a cursor. Every call to
/// [`iter`](Self::iter) starts a fresh, independent traversal from `first`,
/// and elements are computed only as the traversal is consumed.
///
/// The iterate function must be pure and deterministic for the cycle-detecting
/// strategies to be meaningful.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::{Sequence, Termination};
///
/// let sequence = Sequence::new(1, |x: &u32| x * 7 % 10, Termination::FixedLength(5));
///
/// assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 7, 9, 3, 1]);
/// // Restartable: a second traversal sees the same elements.
/// assert_eq!(sequence.iter().count(), 5);
/// ```
#[derive(Clone)]
pub struct Sequence<T, F, S = Termination> {
    first: T,
    iterate: F,
    strategy: S,
}

impl<T, F, S> Sequence<T, F, S>
where
    F: Fn(&T) -> T,
    S: Strategy,
{
    /// Creates a sequence from its first element, iterate function, and
    /// termination strategy.
    ///
    /// Use [`SequenceBuilder`](super::SequenceBuilder) for step-by-step
    /// configuration with validation.
    pub const fn new(first: T, iterate: F, strategy: S) -> Self {
        Self {
            first,
            iterate,
            strategy,
        }
    }

    /// Returns the termination strategy as a runtime tag.
    pub fn termination(&self) -> Termination {
        self.strategy.termination()
    }
}

impl<T, F, S> Sequence<T, F, S> {
    /// Returns the first element of every traversal.
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Returns the iterate function.
    pub const fn iterate_fn(&self) -> &F {
        &self.iterate
    }
}

impl<T, F, S> Sequence<T, F, S>
where
    T: Clone,
    F: Fn(&T) -> T,
    S: Advance<T>,
{
    /// Starts a new traversal from the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::{Sequence, Termination};
    ///
    /// let sequence = Sequence::new(1, |x: &u32| x * 3 % 7, Termination::SeenSet);
    ///
    /// let mut first_pass = sequence.iter();
    /// let mut second_pass = sequence.iter();
    /// assert_eq!(first_pass.next(), Some(1));
    /// assert_eq!(first_pass.next(), Some(3));
    /// assert_eq!(second_pass.next(), Some(1));
    /// ```
    pub fn iter(&self) -> SequenceIter<'_, T, F, S> {
        SequenceIter::new(self.first.clone(), &self.iterate, self.strategy)
    }
}

impl<'a, T, F, S> IntoIterator for &'a Sequence<T, F, S>
where
    T: Clone,
    F: Fn(&T) -> T,
    S: Advance<T>,
{
    type Item = T;
    type IntoIter = SequenceIter<'a, T, F, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, F, S: fmt::Debug> fmt::Debug for Sequence<T, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("first", &self.first)
            .field("termination", &self.strategy)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Sequence<i32, fn(&i32) -> i32>: Send, Sync, Clone);
