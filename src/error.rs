//! Error types shared by every algorithm family.
//!
//! All failures in this crate are caller-input violations. They are detected
//! before any work is done and returned as [`AlgorithmError`]. Each variant
//! belongs to one coarse [`ErrorKind`], so callers that only care about the
//! category can match on [`AlgorithmError::kind`].
//!
//! # Examples
//!
//! ```rust
//! use ordkit::error::{AlgorithmError, ErrorKind};
//!
//! let error = AlgorithmError::InvertedRange { from: 4, to: 3 };
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(
//!     error.to_string(),
//!     "invalid search range: from index 4 is greater than to index 3"
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Which side of a search interval an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The inclusive left endpoint.
    Lower,
    /// The exclusive right endpoint.
    Upper,
}

impl fmt::Display for Bound {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => formatter.write_str("lower"),
            Self::Upper => formatter.write_str("upper"),
        }
    }
}

/// Coarse classification of an [`AlgorithmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A scalar argument is outside its accepted range.
    InvalidArgument,
    /// A search domain is not a finite, well-formed interval.
    InvalidDomain,
    /// A required function was never supplied.
    MissingDependency,
    /// An index range lies outside the buffer.
    OutOfBounds,
}

/// Errors returned by the search, sequence, and ordered-array operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    /// The convergence tolerance was negative or NaN.
    #[error("tolerance must be a non-negative number, got {eps}")]
    InvalidTolerance {
        /// The rejected tolerance, widened to `f64`.
        eps: f64,
    },

    /// A fixed sequence length was negative.
    #[error("sequence length must not be negative, got {length}")]
    NegativeLength {
        /// The rejected length.
        length: i64,
    },

    /// A range was given with its start after its end.
    #[error("invalid search range: from index {from} is greater than to index {to}")]
    InvertedRange {
        /// Inclusive start of the range.
        from: usize,
        /// Exclusive end of the range.
        to: usize,
    },

    /// One of the real search bounds was NaN.
    #[error("{bound} bound of the search range is NaN")]
    NanBound {
        /// The offending endpoint.
        bound: Bound,
    },

    /// The real search range has infinite length.
    #[error("search range [{low}, {high}) has infinite length")]
    UnboundedRange {
        /// Left endpoint, widened to `f64`.
        low: f64,
        /// Right endpoint, widened to `f64`.
        high: f64,
    },

    /// A sequence was built without an iterate function.
    #[error("no iterate function specified")]
    MissingIterate,

    /// A range extends past the end of the buffer.
    #[error("range [{from}, {to}) is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Inclusive start of the range.
        from: usize,
        /// Exclusive end of the range.
        to: usize,
        /// Length of the buffer.
        len: usize,
    },
}

impl AlgorithmError {
    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::error::{AlgorithmError, ErrorKind};
    ///
    /// assert_eq!(AlgorithmError::MissingIterate.kind(), ErrorKind::MissingDependency);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTolerance { .. }
            | Self::NegativeLength { .. }
            | Self::InvertedRange { .. } => ErrorKind::InvalidArgument,
            Self::NanBound { .. } | Self::UnboundedRange { .. } => ErrorKind::InvalidDomain,
            Self::MissingIterate => ErrorKind::MissingDependency,
            Self::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}
