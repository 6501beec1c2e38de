//! Statically typed termination strategies.
//!
//! [`Termination`] picks a strategy at runtime and therefore asks for every
//! bound any strategy might need (`Clone + Eq + Hash`). The marker types here
//! pick one strategy at compile time and only ask for what that strategy
//! uses:
//!
//! | Strategy | Element bounds |
//! |---|---|
//! | [`FixedLength`] | `Clone` |
//! | [`TortoiseHare`] | `Clone + Eq` |
//! | [`SeenSet`] | `Clone + Eq + Hash` |
//! | [`Termination`] | `Clone + Eq + Hash` |
//!
//! [`Strategy`] is the bound-free part shared by all of them; [`Advance`]
//! adds the per-element bounds and is what iteration requires.

use std::hash::Hash;

use super::Termination;
use super::cursor::CursorState;

mod sealed {
    pub trait Sealed {}
}

/// A termination strategy usable by [`Sequence`](super::Sequence).
///
/// Implemented by [`Termination`] and by the marker types [`FixedLength`],
/// [`TortoiseHare`] and [`SeenSet`]. The trait is sealed.
pub trait Strategy: sealed::Sealed + Copy {
    /// Returns the runtime tag of this strategy.
    fn termination(self) -> Termination;
}

/// A strategy that can drive a cursor over elements of type `T`.
///
/// Each implementation carries only the element bounds its strategy needs.
pub trait Advance<T>: Strategy {
    /// Advances a cursor by one element, returning the element (if any) and
    /// whether a repeated value ended the traversal.
    #[doc(hidden)]
    fn step<F>(state: &mut CursorState<T>, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T;
}

/// Emit exactly this many elements. Elements are never compared.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::{FixedLength, Sequence};
///
/// let halving = Sequence::new(1.0_f64, |x: &f64| x * 0.5, FixedLength(3));
/// assert_eq!(halving.iter().collect::<Vec<_>>(), vec![1.0, 0.5, 0.25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedLength(pub usize);

/// Stop once a slow and a fast cursor hold equal values. Needs `Eq` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TortoiseHare;

/// Stop right before the first value that was already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeenSet;

impl sealed::Sealed for FixedLength {}
impl sealed::Sealed for TortoiseHare {}
impl sealed::Sealed for SeenSet {}
impl sealed::Sealed for Termination {}

impl Strategy for FixedLength {
    fn termination(self) -> Termination {
        Termination::FixedLength(self.0)
    }
}

impl Strategy for TortoiseHare {
    fn termination(self) -> Termination {
        Termination::TortoiseHare
    }
}

impl Strategy for SeenSet {
    fn termination(self) -> Termination {
        Termination::SeenSet
    }
}

impl Strategy for Termination {
    fn termination(self) -> Termination {
        self
    }
}

impl<T> Advance<T> for FixedLength {
    fn step<F>(state: &mut CursorState<T>, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T,
    {
        state.step_fixed_length(iterate)
    }
}

impl<T: Eq> Advance<T> for TortoiseHare {
    fn step<F>(state: &mut CursorState<T>, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T,
    {
        state.step_tortoise_hare(iterate)
    }
}

impl<T: Clone + Eq + Hash> Advance<T> for SeenSet {
    fn step<F>(state: &mut CursorState<T>, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T,
    {
        state.step_seen_set(iterate)
    }
}

impl<T: Clone + Eq + Hash> Advance<T> for Termination {
    fn step<F>(state: &mut CursorState<T>, iterate: &F) -> (Option<T>, bool)
    where
        F: Fn(&T) -> T,
    {
        match *state {
            CursorState::FixedLength { .. } => state.step_fixed_length(iterate),
            CursorState::TortoiseHare { .. } => state.step_tortoise_hare(iterate),
            CursorState::SeenSet { .. } => state.step_seen_set(iterate),
        }
    }
}

static_assertions::assert_impl_all!(FixedLength: Advance<f64>);
static_assertions::assert_not_impl_any!(TortoiseHare: Advance<f64>);
static_assertions::assert_not_impl_any!(Termination: Advance<f64>);
