//! Step-by-step configuration of a [`Sequence`].

use std::fmt;

use super::{Sequence, Termination};
use crate::error::AlgorithmError;

/// Builds a [`Sequence`], validating the whole configuration in
/// [`build`](Self::build).
///
/// Setters never fail; problems such as a negative length or a missing iterate
/// function are reported once, by `build`. The termination setters are
/// mutually exclusive and the last one called wins. Without any of them the
/// sequence is empty.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::SequenceBuilder;
///
/// let sequence = SequenceBuilder::new()
///     .first(1)
///     .iterate_by(|x: &u32| x * 3 % 7)
///     .seen_set()
///     .build()
///     .unwrap();
///
/// assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 3, 2, 6, 4, 5]);
/// ```
///
/// A missing iterate function is an error:
///
/// ```rust
/// use ordkit::error::AlgorithmError;
/// use ordkit::sequence::SequenceBuilder;
///
/// let result = SequenceBuilder::<u32>::new().length(3).build();
/// assert_eq!(result.unwrap_err(), AlgorithmError::MissingIterate);
/// ```
#[derive(Clone)]
pub struct SequenceBuilder<T, F = fn(&T) -> T> {
    first: T,
    iterate: Option<F>,
    termination: Termination,
    rejected_length: Option<i64>,
}

impl<T: Default> SequenceBuilder<T> {
    /// Creates a builder whose first element is `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(T::default())
    }
}

impl<T: Default> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceBuilder<T> {
    /// Creates a builder with the given first element.
    ///
    /// Unlike [`new`](Self::new) this does not require `T: Default`.
    #[must_use]
    pub const fn starting_at(first: T) -> Self {
        Self {
            first,
            iterate: None,
            termination: Termination::FixedLength(0),
            rejected_length: None,
        }
    }
}

impl<T, F> SequenceBuilder<T, F> {
    /// Sets the first element.
    #[must_use]
    pub fn first(self, first: T) -> Self {
        Self { first, ..self }
    }

    /// Sets the function producing each element from the previous one.
    #[must_use]
    pub fn iterate_by<G>(self, iterate: G) -> SequenceBuilder<T, G>
    where
        G: Fn(&T) -> T,
    {
        SequenceBuilder {
            first: self.first,
            iterate: Some(iterate),
            termination: self.termination,
            rejected_length: self.rejected_length,
        }
    }

    /// Emits exactly `length` elements.
    ///
    /// A negative length is reported by [`build`](Self::build) unless a later
    /// termination setter replaces it.
    #[must_use]
    pub fn length(self, length: i64) -> Self {
        match usize::try_from(length) {
            Ok(length) => self.termination(Termination::FixedLength(length)),
            Err(_) => Self {
                rejected_length: Some(length),
                ..self
            },
        }
    }

    /// Stops on the first meeting of a slow and a fast cursor.
    #[must_use]
    pub fn tortoise_hare(self) -> Self {
        self.termination(Termination::TortoiseHare)
    }

    /// Stops right before the first value that was already emitted.
    #[must_use]
    pub fn seen_set(self) -> Self {
        self.termination(Termination::SeenSet)
    }

    /// Sets the termination strategy directly.
    #[must_use]
    pub fn termination(self, termination: Termination) -> Self {
        Self {
            termination,
            rejected_length: None,
            ..self
        }
    }
}

impl<T, F> SequenceBuilder<T, F>
where
    F: Fn(&T) -> T,
{
    /// Validates the configuration and produces the sequence.
    ///
    /// # Errors
    ///
    /// - [`AlgorithmError::NegativeLength`] if the last termination setter was
    ///   [`length`](Self::length) with a negative value.
    /// - [`AlgorithmError::MissingIterate`] if
    ///   [`iterate_by`](Self::iterate_by) was never called.
    pub fn build(self) -> Result<Sequence<T, F>, AlgorithmError> {
        let Self {
            first,
            iterate,
            termination,
            rejected_length,
        } = self;

        if let Some(length) = rejected_length {
            let error = AlgorithmError::NegativeLength { length };
            tracing::debug!(%error, "rejected sequence configuration");
            return Err(error);
        }

        let Some(iterate) = iterate else {
            let error = AlgorithmError::MissingIterate;
            tracing::debug!(%error, "rejected sequence configuration");
            return Err(error);
        };

        Ok(Sequence::new(first, iterate, termination))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SequenceBuilder<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceBuilder")
            .field("first", &self.first)
            .field("has_iterate", &self.iterate.is_some())
            .field("termination", &self.termination)
            .field("rejected_length", &self.rejected_length)
            .finish()
    }
}
