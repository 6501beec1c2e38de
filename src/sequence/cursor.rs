//! The per-traversal cursor behind [`Sequence::iter`](super::Sequence::iter).
//!
//! Each strategy is a small state machine stored in `CursorState`, and each
//! step function asks only for the element bounds its strategy uses. A cursor
//! owns all of its state, so two traversals of one sequence never interfere.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;

use super::{Advance, Strategy, Termination};

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

/// Progress of a tortoise-hare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next step advances only the fast cursor.
    Advancing,
    /// The next step advances both cursors and compares them.
    Comparing,
    /// The cursors met; nothing more is emitted.
    Done,
}

/// Per-traversal state, one variant per strategy.
pub enum CursorState<T> {
    /// Counting down a fixed number of elements.
    FixedLength {
        /// `None` once the last element has been emitted.
        next: Option<T>,
        /// Elements still to be emitted.
        remaining: usize,
    },
    /// A fast cursor and one moving at half its pace.
    TortoiseHare {
        /// The fast cursor; also the next element to emit.
        current: T,
        /// The slow cursor.
        half_pace: T,
        /// What the next step does.
        phase: Phase,
    },
    /// Every emitted value, plus the next one to check.
    SeenSet {
        /// `None` once a repeat has been found.
        candidate: Option<T>,
        /// Values emitted so far.
        seen: HashSet<T, SeenHasher>,
    },
}

impl<T> CursorState<T> {
    pub(super) fn start(first: T, termination: Termination) -> Self
    where
        T: Clone,
    {
        match termination {
            Termination::FixedLength(length) => Self::FixedLength {
                next: Some(first),
                remaining: length,
            },
            Termination::TortoiseHare => Self::TortoiseHare {
                half_pace: first.clone(),
                current: first,
                phase: Phase::Advancing,
            },
            Termination::SeenSet => Self::SeenSet {
                candidate: Some(first),
                seen: HashSet::with_hasher(SeenHasher::default()),
            },
        }
    }

    pub(super) fn step_fixed_length<F>(&mut self, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T,
    {
        let Self::FixedLength { next, remaining } = self else {
            return (None, false);
        };
        if *remaining == 0 {
            return (None, false);
        }
        let Some(value) = next.take() else {
            return (None, false);
        };
        *remaining -= 1;
        if *remaining > 0 {
            *next = Some(iterate(&value));
        }
        (Some(value), false)
    }

    pub(super) fn step_tortoise_hare<F>(&mut self, iterate: &F) -> (Option<T>, bool)
    where
        T: Eq,
        F: Fn(&T) -> T,
    {
        let Self::TortoiseHare {
            current,
            half_pace,
            phase,
        } = self
        else {
            return (None, false);
        };
        match *phase {
            Phase::Done => (None, false),
            Phase::Advancing => {
                let successor = iterate(&*current);
                *phase = Phase::Comparing;
                (Some(mem::replace(current, successor)), false)
            }
            Phase::Comparing => {
                let successor = iterate(&*current);
                let value = mem::replace(current, successor);
                *half_pace = iterate(&*half_pace);
                let met = *current == *half_pace;
                *phase = if met { Phase::Done } else { Phase::Advancing };
                (Some(value), met)
            }
        }
    }

    pub(super) fn step_seen_set<F>(&mut self, iterate: &F) -> (Option<T>, bool)
    where
        T: Clone + Eq + Hash,
        F: Fn(&T) -> T,
    {
        let Self::SeenSet { candidate, seen } = self else {
            return (None, false);
        };
        let Some(value) = candidate.take() else {
            return (None, false);
        };
        if seen.contains(&value) {
            return (None, true);
        }
        *candidate = Some(iterate(&value));
        seen.insert(value.clone());
        (Some(value), false)
    }
}

/// A lazy cursor over one traversal of a [`Sequence`](super::Sequence).
///
/// Elements are computed on demand. The cursor is fused: after it returns
/// `None` it keeps returning `None`.
pub struct SequenceIter<'a, T, F, S = Termination> {
    iterate: &'a F,
    state: CursorState<T>,
    strategy: S,
    emitted: usize,
}

impl<'a, T, F, S> SequenceIter<'a, T, F, S>
where
    S: Strategy,
{
    pub(super) fn new(first: T, iterate: &'a F, strategy: S) -> Self
    where
        T: Clone,
    {
        Self {
            iterate,
            state: CursorState::start(first, strategy.termination()),
            strategy,
            emitted: 0,
        }
    }

    /// Returns the number of elements emitted so far.
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns the strategy driving this cursor.
    #[must_use]
    pub fn termination(&self) -> Termination {
        self.strategy.termination()
    }

    fn record_cycle(&self) {
        tracing::debug!(
            strategy = self.termination().name(),
            emitted = self.emitted,
            "repeated value detected, sequence finished"
        );
    }
}

impl<T, F, S> Iterator for SequenceIter<'_, T, F, S>
where
    T: Clone,
    F: Fn(&T) -> T,
    S: Advance<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, cycle_found) = S::step(&mut self.state, self.iterate);

        if value.is_some() {
            self.emitted += 1;
        }
        if cycle_found {
            self.record_cycle();
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            CursorState::FixedLength { remaining, .. } => (*remaining, Some(*remaining)),
            CursorState::TortoiseHare {
                phase: Phase::Done, ..
            }
            | CursorState::SeenSet {
                candidate: None, ..
            } => (0, Some(0)),
            CursorState::TortoiseHare { .. } => (1, None),
            CursorState::SeenSet { .. } => (0, None),
        }
    }
}

impl<T, F, S> FusedIterator for SequenceIter<'_, T, F, S>
where
    T: Clone,
    F: Fn(&T) -> T,
    S: Advance<T>,
{
}
