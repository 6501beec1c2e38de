//! Result of a range binary search.

/// Where a key was found, or where it would be inserted.
///
/// # Examples
///
/// ```rust
/// use ordkit::ordered::SearchOutcome;
///
/// assert_eq!(SearchOutcome::Found(3).to_signed(), 3);
/// // Classic encoding of a miss: -(insertion point) - 1.
/// assert_eq!(SearchOutcome::NotFound(3).to_signed(), -4);
/// assert_eq!(SearchOutcome::from_signed(-4), SearchOutcome::NotFound(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The key is at this index. Among equal keys, any one may be reported.
    Found(usize),
    /// The key is absent; this is the index of the first greater element, or
    /// the end of the searched range if every element is smaller.
    NotFound(usize),
}

impl SearchOutcome {
    /// Returns the index of the key if it was found.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound(_) => None,
        }
    }

    /// Returns the insertion point if the key was not found.
    #[must_use]
    pub const fn insertion_point(self) -> Option<usize> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(point) => Some(point),
        }
    }

    /// Returns the carried index, whether found or not.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Found(index) | Self::NotFound(index) => index,
        }
    }

    /// Returns `true` if the key was found.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Encodes the outcome as a single signed integer: the index if found,
    /// otherwise `-(insertion point) - 1`. The value is non-negative exactly
    /// when the key was found.
    ///
    /// Positions above `isize::MAX` (reachable only with zero-sized elements)
    /// saturate to `isize::MAX` when found and `isize::MIN` when not, so the
    /// sign stays meaningful. Use [`checked_to_signed`](Self::checked_to_signed)
    /// to detect that case.
    #[must_use]
    pub const fn to_signed(self) -> isize {
        match self.checked_to_signed() {
            Some(encoded) => encoded,
            None if self.is_found() => isize::MAX,
            None => isize::MIN,
        }
    }

    /// Like [`to_signed`](Self::to_signed), but returns `None` when the
    /// position does not fit in an `isize`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn checked_to_signed(self) -> Option<isize> {
        match self {
            Self::Found(index) if index <= isize::MAX as usize => Some(index as isize),
            Self::NotFound(point) if point <= isize::MAX as usize => Some(-(point as isize) - 1),
            Self::Found(_) | Self::NotFound(_) => None,
        }
    }

    /// Decodes the representation produced by [`to_signed`](Self::to_signed).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_signed(encoded: isize) -> Self {
        if encoded >= 0 {
            Self::Found(encoded as usize)
        } else {
            Self::NotFound((-(encoded + 1)) as usize)
        }
    }
}

impl From<SearchOutcome> for Result<usize, usize> {
    /// Same shape as [`slice::binary_search`].
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(index) => Ok(index),
            SearchOutcome::NotFound(point) => Err(point),
        }
    }
}

impl From<Result<usize, usize>> for SearchOutcome {
    fn from(result: Result<usize, usize>) -> Self {
        match result {
            Ok(index) => Self::Found(index),
            Err(point) => Self::NotFound(point),
        }
    }
}

static_assertions::assert_impl_all!(SearchOutcome: Send, Sync, Copy);
