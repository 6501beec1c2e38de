//! Termination strategies for iterated sequences.

use std::fmt;

/// How an iterated sequence decides that it is finished.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::Termination;
///
/// assert_eq!(Termination::default(), Termination::FixedLength(0));
/// assert!(Termination::SeenSet.detects_cycles());
/// assert!(!Termination::FixedLength(3).detects_cycles());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Emit exactly this many elements without comparing any of them.
    FixedLength(usize),
    /// Stop once a slow cursor and a cursor moving twice as fast hold equal
    /// values. Uses constant auxiliary memory, but may emit part of the cycle
    /// more than once before the cursors meet.
    TortoiseHare,
    /// Stop right before the first value that was already emitted. Emits the
    /// lead-in and exactly one full cycle, at the cost of remembering every
    /// emitted value.
    SeenSet,
}

impl Termination {
    /// Returns `true` for the strategies that stop on a repeated value.
    #[must_use]
    pub const fn detects_cycles(&self) -> bool {
        matches!(self, Self::TortoiseHare | Self::SeenSet)
    }

    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::FixedLength(_) => "fixed-length",
            Self::TortoiseHare => "tortoise-hare",
            Self::SeenSet => "seen-set",
        }
    }
}

impl Default for Termination {
    /// An empty sequence.
    fn default() -> Self {
        Self::FixedLength(0)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedLength(length) => write!(formatter, "{}({length})", self.name()),
            Self::TortoiseHare | Self::SeenSet => formatter.write_str(self.name()),
        }
    }
}
