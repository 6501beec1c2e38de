//! A buffer that owns its elements together with the order used to compare them.

use std::cmp::Ordering;
use std::fmt;

use super::SearchOutcome;
use crate::error::AlgorithmError;

/// An owned buffer paired with a total-order comparison rule.
///
/// All operations use the stored comparator, so a buffer built with a reverse
/// comparator sorts descending, dedups by that rule, and binary-searches in
/// descending order.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator. Defaults to a function pointer, which is what
///   [`OrderedArray::new`] stores for `T: Ord`.
///
/// # Examples
///
/// ```rust
/// use ordkit::ordered::{OrderedArray, SearchOutcome};
///
/// let mut array = OrderedArray::new(vec![5, 1, 4, 1, 3]);
/// array.sort();
/// assert_eq!(array.as_slice(), &[1, 1, 3, 4, 5]);
///
/// let distinct = array.dedup();
/// assert_eq!(&array.as_slice()[..distinct], &[1, 3, 4, 5]);
///
/// assert_eq!(array.binary_search(0, distinct, &4).unwrap(), SearchOutcome::Found(2));
/// assert_eq!(array.binary_search(0, distinct, &2).unwrap(), SearchOutcome::NotFound(1));
/// ```
#[derive(Clone)]
pub struct OrderedArray<T, C = fn(&T, &T) -> Ordering> {
    buffer: Vec<T>,
    compare: C,
}

impl<T: Ord> OrderedArray<T> {
    /// Wraps `buffer`, ordering elements by their natural order.
    #[must_use]
    pub fn new(buffer: Vec<T>) -> Self {
        Self {
            buffer,
            compare: <T as Ord>::cmp,
        }
    }
}

impl<T, C> OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Wraps `buffer`, ordering elements with `compare`.
    ///
    /// `compare` must be a total order. `f64::total_cmp` is a convenient choice
    /// for floating-point buffers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::ordered::OrderedArray;
    ///
    /// let mut descending = OrderedArray::with_comparator(vec![2, 9, 4], |a: &i32, b: &i32| b.cmp(a));
    /// descending.sort();
    /// assert_eq!(descending.as_slice(), &[9, 4, 2]);
    /// ```
    pub const fn with_comparator(buffer: Vec<T>, compare: C) -> Self {
        Self { buffer, compare }
    }

    /// Sorts the buffer in place.
    ///
    /// The sort is stable: elements that compare equal keep their relative
    /// order.
    pub fn sort(&mut self) {
        let compare = &self.compare;
        self.buffer.sort_by(|left, right| compare(left, right));
    }

    /// Compacts runs of equal elements, keeping the first element of each run.
    ///
    /// Elements are considered duplicates only when they are adjacent, so the
    /// buffer should be sorted first for this to remove every duplicate value.
    /// Returns the number of retained elements, which occupy the front of the
    /// buffer. The buffer length does not change; the order of the elements
    /// past the retained count is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::ordered::OrderedArray;
    ///
    /// let mut array = OrderedArray::new(vec!["a", "a", "ab", "ab", "ab", "c", "d", "c", "e"]);
    /// let retained = array.dedup();
    ///
    /// assert_eq!(retained, 6);
    /// assert_eq!(array.len(), 9);
    /// assert_eq!(&array.as_slice()[..retained], &["a", "ab", "c", "d", "c", "e"]);
    /// ```
    pub fn dedup(&mut self) -> usize {
        let compare = &self.compare;
        let buffer = &mut self.buffer;
        if buffer.is_empty() {
            return 0;
        }

        let mut last_kept = 0;
        for scan in 1..buffer.len() {
            if compare(&buffer[last_kept], &buffer[scan]) != Ordering::Equal {
                last_kept += 1;
                buffer.swap(last_kept, scan);
            }
        }
        last_kept + 1
    }

    /// Binary-searches `[from, to)` for `key`.
    ///
    /// The range must already be sorted by the comparator; otherwise the
    /// result is unspecified. If several elements equal `key`, any one of them
    /// may be reported.
    ///
    /// # Errors
    ///
    /// - [`AlgorithmError::InvertedRange`] if `from > to`.
    /// - [`AlgorithmError::IndexOutOfBounds`] if `to` exceeds the buffer length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::ordered::{OrderedArray, SearchOutcome};
    ///
    /// let array = OrderedArray::with_comparator(
    ///     vec![1.0, 2.0, 3.1, 4.4, 5.2, 7.3, 9.9],
    ///     f64::total_cmp,
    /// );
    /// assert_eq!(array.binary_search(0, 7, &4.4).unwrap(), SearchOutcome::Found(3));
    /// assert_eq!(array.binary_search(0, 3, &100.0).unwrap().to_signed(), -4);
    /// assert!(array.binary_search(4, 3, &2.2).is_err());
    /// ```
    pub fn binary_search(
        &self,
        from: usize,
        to: usize,
        key: &T,
    ) -> Result<SearchOutcome, AlgorithmError> {
        let error = if from > to {
            Some(AlgorithmError::InvertedRange { from, to })
        } else if to > self.buffer.len() {
            Some(AlgorithmError::IndexOutOfBounds {
                from,
                to,
                len: self.buffer.len(),
            })
        } else {
            None
        };

        if let Some(error) = error {
            tracing::debug!(%error, "rejected binary search range");
            return Err(error);
        }

        Ok(self.search_range(from, to, key))
    }

    /// Computes the rank of every element among the distinct values.
    ///
    /// Returns a vector `ranks` of the same length as the buffer where
    /// `ranks[i]` is the number of distinct values strictly smaller than
    /// element `i`. Equal elements share a rank, and ranks compare exactly as
    /// the elements do. The buffer itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::f64::consts::{E, PI};
    /// use ordkit::ordered::OrderedArray;
    ///
    /// let array = OrderedArray::with_comparator(
    ///     vec![1.1, PI, E, 2.0, 5.0, 1.1, 1.7, 2.0, PI],
    ///     f64::total_cmp,
    /// );
    /// assert_eq!(array.discretize(), vec![0, 4, 3, 2, 5, 0, 1, 2, 4]);
    /// assert_eq!(array.as_slice()[1], PI);
    /// ```
    pub fn discretize(&self) -> Vec<usize>
    where
        T: Clone,
    {
        let mut distinct = OrderedArray {
            buffer: self.buffer.clone(),
            compare: &self.compare,
        };
        distinct.sort();
        let distinct_len = distinct.dedup();

        let ranks: Vec<usize> = self
            .buffer
            .iter()
            .map(|element| distinct.search_range(0, distinct_len, element).position())
            .collect();

        tracing::trace!(
            len = ranks.len(),
            distinct = distinct_len,
            "discretized buffer"
        );
        ranks
    }

    /// Searches a range already known to lie inside the buffer.
    fn search_range(&self, from: usize, to: usize, key: &T) -> SearchOutcome {
        match self.buffer[from..to].binary_search_by(|element| (self.compare)(element, key)) {
            Ok(offset) => SearchOutcome::Found(from + offset),
            Err(offset) => SearchOutcome::NotFound(from + offset),
        }
    }
}

impl<T, C> OrderedArray<T, C> {
    /// Returns the buffer as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns the number of elements in the buffer.
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the comparison rule.
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Gives the buffer back to the caller.
    pub fn into_inner(self) -> Vec<T> {
        self.buffer
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedArray<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderedArray")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for OrderedArray<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut sequence = serializer.serialize_seq(Some(self.buffer.len()))?;
        for element in &self.buffer {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedArray<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(OrderedArray<i32>: Send, Sync, Clone);
