//! Array-backed binary min-heap.
//!
//! The smallest element always sits at index 0 of a contiguous
//! [`HeapBuffer`]; the tree shape is implicit in the index arithmetic of
//! [`sift`](crate::ds::sift). Every mutating operation performs at most one
//! structural change to the buffer followed by at most one sift pass.
//!
//! ## Architecture
//!
//! ```text
//!   insert(2)                         remove()
//!   ─────────                         ────────
//!   append at len, sift up            take root, move last into slot 0,
//!                                     sift down
//!   [1, 3, 7, 10, 2]                  [1, 2, 7, 10, 3]
//!            ▲   │                      ▲           │
//!            └───┘ swap                 └─ root = 1 ┘ last moves up
//!   [1, 2, 7, 10, 3]                  [3, 2, 7, 10] -> [2, 3, 7, 10]
//!
//!   pushpop(v)
//!   ──────────
//!   heap empty or v < root  ─► return v        (heap untouched)
//!   otherwise               ─► old = root; root = v; sift down; return old
//!
//!   heapify(seq)
//!   ────────────
//!   for i in (0..len/2).rev(): sift_down(i)     O(n)
//! ```
//!
//! ## Operations
//!
//! | Operation   | Description                                  | Complexity     |
//! |-------------|----------------------------------------------|----------------|
//! | `new`       | Empty heap, no allocation                    | O(1)           |
//! | `heapify`   | Build from an arbitrary `Vec` in place       | O(n)           |
//! | `insert`    | Append and sift up                           | O(log n)       |
//! | `peek`      | Borrow the minimum                           | O(1)           |
//! | `remove`    | Take the minimum                             | O(log n)       |
//! | `pushpop`   | Insert then remove-min with a single sift    | O(log n)       |
//! | `len`       | Number of live elements                      | O(1)           |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for v in [10, 3, 7, 1] {
//!     heap.insert(v);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.remove(), Some(1));
//! assert_eq!(heap.remove(), Some(3));
//! assert_eq!(heap.len(), 2);
//!
//! // Smaller than the current minimum: handed straight back
//! assert_eq!(heap.pushpop(5), 5);
//! assert_eq!(heap.pushpop(8), 7);
//! assert_eq!(heap.into_sorted_vec(), vec![8, 10]);
//! ```
//!
//! ## Ordering Guarantees
//!
//! Removal order is non-decreasing. Equal elements come out in no particular
//! relative order; the heap is not stable across insert/remove.
//!
//! ## Thread Safety
//!
//! `MinHeap` is a single-owner structure. Share it across threads only behind
//! external synchronization.
//!
//! `debug_validate_invariants()` available in debug/test builds.

use std::fmt;
use std::iter::FusedIterator;

use crate::ds::heap_buffer::HeapBuffer;
use crate::ds::sift;
use crate::error::{AllocError, InvariantError};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};

/// Binary min-heap over any totally ordered element type.
///
/// Elements are compared only through [`Ord`]. Duplicates are kept and
/// tracked independently.
///
/// # Example
///
/// ```
/// use heapkit::ds::MinHeap;
///
/// let mut heap = MinHeap::heapify(vec![9, 4, 7, 1, -2, 6, 5]);
/// assert_eq!(heap.len(), 7);
/// assert_eq!(heap.peek(), Some(&-2));
///
/// let drained: Vec<i64> = std::iter::from_fn(|| heap.remove()).collect();
/// assert_eq!(drained, vec![-2, 1, 4, 5, 6, 7, 9]);
/// assert_eq!(heap.remove(), None);
/// ```
pub struct MinHeap<T> {
    buffer: HeapBuffer<T>,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

/// Heap over the 64-bit signed domain exposed to host bindings.
pub type IntMinHeap = MinHeap<i64>;

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap without allocating.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap: MinHeap<i64> = MinHeap::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.peek(), None);
    /// ```
    pub fn new() -> Self {
        Self::from_buffer(HeapBuffer::new())
    }

    /// Creates an empty heap able to hold `capacity` elements before growing.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap: MinHeap<u32> = MinHeap::with_capacity(128);
    /// assert!(heap.capacity() >= 128);
    /// assert_eq!(heap.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(HeapBuffer::with_capacity(capacity))
    }

    /// Builds a heap from `values` in linear time.
    ///
    /// The input may be in any order. It is taken over as the storage buffer
    /// and every internal node is sifted down, from the last one back to the
    /// root. An empty input yields an empty heap.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::heapify(vec![5, 3, 8, 1]);
    /// assert_eq!(heap.peek(), Some(&1));
    ///
    /// let empty: MinHeap<i64> = MinHeap::heapify(Vec::new());
    /// assert_eq!(empty.len(), 0);
    /// assert_eq!(empty.peek(), None);
    /// ```
    pub fn heapify(values: Vec<T>) -> Self {
        let mut heap = Self::from_buffer(HeapBuffer::from_vec(values));
        heap.rebuild();
        heap
    }

    fn from_buffer(buffer: HeapBuffer<T>) -> Self {
        Self {
            buffer,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Re-establishes the heap property over the whole buffer.
    fn rebuild(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_heapify(self.buffer.len());

        let Some(last) = sift::last_internal(self.buffer.len()) else {
            return;
        };
        let data = self.buffer.as_mut_slice();
        for index in (0..=last).rev() {
            let _settled = sift::sift_down(data, index);
            #[cfg(feature = "metrics")]
            self.metrics
                .record_sift_down_steps(sift::depth(_settled) - sift::depth(index));
        }
    }

    /// Returns the number of elements in the heap.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.insert(4);
    /// heap.insert(4);
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of slots allocated by the storage buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Adds `value` to the heap.
    ///
    /// Allocation failure while growing aborts; use
    /// [`try_insert`](Self::try_insert) to observe it instead.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.insert(10);
    /// heap.insert(-3);
    /// assert_eq!(heap.peek(), Some(&-3));
    /// ```
    pub fn insert(&mut self, value: T) {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let _grew = self.buffer.append(value);
        #[cfg(feature = "metrics")]
        if _grew {
            self.metrics.record_grow();
        }
        self.sift_up_last();
    }

    /// Adds `value` to the heap, reporting allocation failure.
    ///
    /// On error the heap is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.try_insert(3).unwrap();
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), AllocError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let _grew = self.buffer.try_grow_if_full()?;
        #[cfg(feature = "metrics")]
        if _grew {
            self.metrics.record_grow();
        }
        self.buffer.append(value);
        self.sift_up_last();
        Ok(())
    }

    fn sift_up_last(&mut self) {
        let last = self.buffer.len() - 1;
        let _settled = sift::sift_up(self.buffer.as_mut_slice(), last);
        #[cfg(feature = "metrics")]
        self.metrics
            .record_sift_up_steps(sift::depth(last) - sift::depth(_settled));
    }

    fn sift_down_root(&mut self) {
        let _settled = sift::sift_down(self.buffer.as_mut_slice(), 0);
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_down_steps(sift::depth(_settled));
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.insert(2);
    /// heap.insert(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let root = self.buffer.first()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_found();

        Some(root)
    }

    /// Removes and returns the minimum element, or `None` if empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::heapify(vec![10, 5, 1]);
    /// assert_eq!(heap.remove(), Some(1));
    /// assert_eq!(heap.remove(), Some(5));
    /// assert_eq!(heap.remove(), Some(10));
    /// assert_eq!(heap.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let Some(last) = self.buffer.remove_last() else {
            #[cfg(feature = "metrics")]
            self.metrics.record_remove_empty();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        // The last element was the root.
        if self.buffer.is_empty() {
            return Some(last);
        }

        let root = self.buffer.set(0, last);
        self.sift_down_root();
        Some(root)
    }

    /// Inserts `value` and removes the minimum in one step.
    ///
    /// If the heap is empty or `value` is smaller than the current minimum,
    /// `value` is returned and the heap is not touched. Otherwise `value`
    /// replaces the root, which is returned after a single sift-down.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::heapify(vec![10, 20, 30]);
    /// assert_eq!(heap.pushpop(5), 5);
    /// assert_eq!(heap.peek(), Some(&10));
    ///
    /// assert_eq!(heap.pushpop(25), 10);
    /// assert_eq!(heap.peek(), Some(&20));
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn pushpop(&mut self, value: T) -> T {
        #[cfg(feature = "metrics")]
        self.metrics.record_pushpop_call();

        match self.buffer.first() {
            Some(root) if *root <= value => {},
            _ => {
                #[cfg(feature = "metrics")]
                self.metrics.record_pushpop_fast_path();
                return value;
            },
        }

        let old = self.buffer.set(0, value);
        self.sift_down_root();
        old
    }

    /// Removes all elements, keeping the allocation.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::heapify(vec![1, 2, 3]);
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.remove(), None);
    /// ```
    pub fn clear(&mut self) {
        self.buffer.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap: MinHeap<i64> = MinHeap::new();
    /// assert!(heap.try_reserve(16).is_ok());
    /// assert!(heap.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.buffer.try_reserve(additional)
    }

    /// Shrinks the storage buffer toward the number of live elements.
    pub fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to_fit();
    }

    /// Returns the elements in storage (level) order.
    ///
    /// Index 0 is the minimum; beyond that only the heap property holds.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::heapify(vec![3, 1, 2]);
    /// assert_eq!(heap.as_slice()[0], 1);
    /// assert_eq!(heap.as_slice().len(), 3);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Consumes the heap, returning its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }

    /// Consumes the heap, returning its elements in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::heapify(vec![5, 1, 5, 1, 5]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 1, 5, 5, 5]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.into_iter_sorted());
        sorted
    }

    /// Consumes the heap, yielding elements in removal order.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::heapify(vec![3, -1, 2]);
    /// let mut iter = heap.into_iter_sorted();
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(-1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn into_iter_sorted(self) -> IntoSorted<T> {
        IntoSorted { heap: self }
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap: MinHeap<u64> = MinHeap::with_capacity(100);
    /// assert!(heap.approx_bytes() >= 100 * std::mem::size_of::<u64>());
    /// ```
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.buffer.capacity() * std::mem::size_of::<T>()
    }

    /// Checks the min-heap property over every parent/child pair.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::heapify(vec![4, 8, 1, 9]);
    /// assert!(heap.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match sift::first_violation(self.buffer.as_slice()) {
            None => Ok(()),
            Some(index) => Err(InvariantError::new(format!(
                "heap slot {} is smaller than its parent slot {}",
                index,
                sift::parent(index)
            ))),
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
        assert!(self.buffer.capacity() >= self.buffer.len());
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> MinHeap<T> {
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            grow_events: self.metrics.grow_events,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            remove_empty: self.metrics.remove_empty,
            pushpop_calls: self.metrics.pushpop_calls,
            pushpop_fast_path: self.metrics.pushpop_fast_path,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            heapify_calls: self.metrics.heapify_calls,
            heapify_elements: self.metrics.heapify_elements,
            sift_up_steps: self.metrics.sift_up_steps,
            sift_down_steps: self.metrics.sift_down_steps,
            clear_calls: self.metrics.clear_calls,
            heap_len: self.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> MetricsSnapshotProvider<HeapMetricsSnapshot> for MinHeap<T> {
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for MinHeap<T> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Counters are per instance; a clone starts from zero.
impl<T: Ord + Clone> Clone for MinHeap<T> {
    fn clone(&self) -> Self {
        Self::from_buffer(self.buffer.clone())
    }
}

impl<T> fmt::Debug for MinHeap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("data", &self.buffer.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(values: Vec<T>) -> Self {
        Self::heapify(values)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapify(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

/// Owning iterator over a [`MinHeap`] in removal order.
///
/// Created by [`MinHeap::into_iter_sorted`].
#[derive(Debug)]
pub struct IntoSorted<T> {
    heap: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSorted<T> {}

impl<T: Ord> FusedIterator for IntoSorted<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: Ord>(heap: &mut MinHeap<T>) -> Vec<T> {
        std::iter::from_fn(|| heap.remove()).collect()
    }

    // ==============================================
    // Insert / Remove
    // ==============================================

    #[test]
    fn min_heap_insert_tracks_len() {
        let mut heap = MinHeap::new();
        heap.insert(10);
        assert_eq!(heap.len(), 1);
        heap.insert(5);
        heap.insert(15);
        heap.insert(1);
        assert_eq!(heap.len(), 4);
        heap.debug_validate_invariants();
    }

    #[test]
    fn min_heap_remove_returns_minimum() {
        let mut heap = MinHeap::new();
        heap.insert(10);
        heap.insert(5);
        heap.insert(1);
        assert_eq!(heap.remove(), Some(1));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn min_heap_remove_all_sorted() {
        let mut heap = MinHeap::new();
        for v in [10, 3, 7, 1] {
            heap.insert(v);
        }
        assert_eq!(drain(&mut heap), vec![1, 3, 7, 10]);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn min_heap_remove_empty_is_none() {
        let mut heap: MinHeap<i64> = MinHeap::new();
        assert_eq!(heap.remove(), None);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn min_heap_insert_remove_alternating() {
        let mut heap = MinHeap::new();
        heap.insert(20);
        assert_eq!(heap.remove(), Some(20));
        heap.insert(10);
        heap.insert(5);
        assert_eq!(heap.remove(), Some(5));
        assert_eq!(heap.remove(), Some(10));
        assert_eq!(heap.remove(), None);
    }

    #[test]
    fn min_heap_duplicates_keep_multiplicity() {
        let mut heap = MinHeap::new();
        for v in [5, 1, 5, 1, 5] {
            heap.insert(v);
        }
        assert_eq!(drain(&mut heap), vec![1, 1, 5, 5, 5]);
        assert_eq!(heap.remove(), None);
    }

    #[test]
    fn min_heap_negative_values() {
        let mut heap: IntMinHeap = MinHeap::new();
        for v in [0, -1, i64::MIN, i64::MAX, -7] {
            heap.insert(v);
        }
        assert_eq!(heap.peek(), Some(&i64::MIN));
        assert_eq!(drain(&mut heap), vec![i64::MIN, -7, -1, 0, i64::MAX]);
    }

    #[test]
    fn min_heap_usable_after_emptying() {
        let mut heap = MinHeap::new();
        heap.insert(1);
        assert_eq!(heap.remove(), Some(1));
        assert!(heap.is_empty());
        heap.insert(2);
        heap.insert(0);
        assert_eq!(heap.peek(), Some(&0));
    }

    // ==============================================
    // Heapify
    // ==============================================

    #[test]
    fn min_heap_heapify_drains_sorted() {
        let mut heap = MinHeap::heapify(vec![9, 4, 7, 1, -2, 6, 5]);
        heap.debug_validate_invariants();
        assert_eq!(drain(&mut heap), vec![-2, 1, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn min_heap_heapify_empty() {
        let heap: MinHeap<i64> = MinHeap::heapify(Vec::new());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn min_heap_heapify_single_and_pair() {
        let heap = MinHeap::heapify(vec![3]);
        assert_eq!(heap.as_slice(), &[3]);

        let heap = MinHeap::heapify(vec![3, 1]);
        assert_eq!(heap.as_slice(), &[1, 3]);
    }

    #[test]
    fn min_heap_heapify_descending_input() {
        let values: Vec<i32> = (0..100).rev().collect();
        let heap = MinHeap::heapify(values);
        heap.debug_validate_invariants();
        assert_eq!(heap.into_sorted_vec(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn min_heap_heapify_keeps_buffer_in_place() {
        let mut values = Vec::with_capacity(32);
        values.extend([4, 3, 2, 1]);
        let heap = MinHeap::heapify(values);
        assert!(heap.capacity() >= 32);
    }

    #[test]
    fn min_heap_from_iter_and_from_vec() {
        let heap: MinHeap<_> = [8, 2, 6].into_iter().collect();
        assert_eq!(heap.peek(), Some(&2));

        let heap = MinHeap::from(vec![8, 2, 6, 0]);
        assert_eq!(heap.peek(), Some(&0));
    }

    // ==============================================
    // Pushpop
    // ==============================================

    #[test]
    fn min_heap_pushpop_smaller_value_bypasses_heap() {
        let mut heap = MinHeap::heapify(vec![10, 20, 30]);
        let before = heap.as_slice().to_vec();
        assert_eq!(heap.pushpop(5), 5);
        assert_eq!(heap.as_slice(), before.as_slice());
        assert_eq!(heap.peek(), Some(&10));
    }

    #[test]
    fn min_heap_pushpop_larger_value_replaces_root() {
        let mut heap = MinHeap::heapify(vec![10, 20, 30]);
        assert_eq!(heap.pushpop(25), 10);
        assert_eq!(heap.peek(), Some(&20));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.into_sorted_vec(), vec![20, 25, 30]);
    }

    #[test]
    fn min_heap_pushpop_equal_value() {
        let mut heap = MinHeap::heapify(vec![10, 20]);
        assert_eq!(heap.pushpop(10), 10);
        assert_eq!(heap.into_sorted_vec(), vec![10, 20]);
    }

    #[test]
    fn min_heap_pushpop_on_empty_returns_value() {
        let mut heap: MinHeap<i64> = MinHeap::new();
        assert_eq!(heap.pushpop(-4), -4);
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 0);
    }

    #[test]
    fn min_heap_pushpop_matches_insert_then_remove() {
        let seed = vec![12, 3, 40, 7, 7, 19, 1, 25];
        for v in [-5, 0, 1, 2, 7, 8, 30, 100] {
            let mut fused = MinHeap::heapify(seed.clone());
            let mut split = MinHeap::heapify(seed.clone());

            let a = fused.pushpop(v);
            split.insert(v);
            let b = split.remove();

            assert_eq!(Some(a), b);
            fused.debug_validate_invariants();
            assert_eq!(fused.into_sorted_vec(), split.into_sorted_vec());
        }
    }

    // ==============================================
    // Fallible growth, capacity, misc
    // ==============================================

    #[test]
    fn min_heap_try_insert_behaves_like_insert() {
        let mut heap = MinHeap::new();
        for v in [4, 2, 9, 1] {
            heap.try_insert(v).unwrap();
        }
        heap.debug_validate_invariants();
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 4, 9]);
    }

    #[test]
    fn min_heap_try_reserve_failure_is_reported() {
        let mut heap = MinHeap::heapify(vec![3, 1, 2]);
        assert!(heap.try_reserve(usize::MAX).is_err());
        assert_eq!(heap.len(), 3);
        heap.debug_validate_invariants();
    }

    #[test]
    fn min_heap_clear_and_shrink() {
        let mut heap = MinHeap::with_capacity(64);
        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        heap.shrink_to_fit();
        assert_eq!(heap.capacity(), 0);
    }

    #[test]
    fn min_heap_extend_inserts_all() {
        let mut heap = MinHeap::heapify(vec![5]);
        heap.extend([3, 8, 1]);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn min_heap_into_iter_sorted_is_exact_size() {
        let heap = MinHeap::heapify(vec![2, 1, 3]);
        let iter = heap.into_iter_sorted();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn min_heap_into_vec_keeps_storage_order() {
        let heap = MinHeap::heapify(vec![1, 2, 3]);
        assert_eq!(heap.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn min_heap_clone_is_independent() {
        let mut a = MinHeap::heapify(vec![3, 1, 2]);
        let b = a.clone();
        a.remove();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert_eq!(b.peek(), Some(&1));
    }

    #[test]
    fn min_heap_debug_shows_len() {
        let heap = MinHeap::heapify(vec![1, 2]);
        let dbg = format!("{:?}", heap);
        assert!(dbg.contains("MinHeap"));
        assert!(dbg.contains("len: 2"));
    }

    #[test]
    fn min_heap_check_invariants_reports_violation() {
        // Built directly to bypass heapify.
        let heap = MinHeap::from_buffer(HeapBuffer::from_vec(vec![5, 1, 7]));
        let err = heap.check_invariants().unwrap_err();
        assert!(err.message().contains("slot 1"));
    }

    #[test]
    fn min_heap_generic_over_ord_types() {
        let mut heap = MinHeap::new();
        heap.insert("pear".to_string());
        heap.insert("apple".to_string());
        heap.insert("fig".to_string());
        assert_eq!(heap.remove().as_deref(), Some("apple"));
        assert_eq!(heap.pushpop("banana".to_string()), "banana");
        assert_eq!(heap.pushpop("zucchini".to_string()), "fig");
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;
        use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider};

        #[test]
        fn min_heap_metrics_count_operations() {
            let mut heap = MinHeap::new();
            heap.insert(3);
            heap.insert(1);
            let _ = heap.peek();
            assert_eq!(heap.pushpop(0), 0);
            assert_eq!(heap.pushpop(5), 1);
            heap.remove();
            heap.remove();
            heap.remove();

            let snap = heap.metrics_snapshot();
            assert_eq!(snap.insert_calls, 2);
            assert_eq!(snap.grow_events, 1);
            assert_eq!(snap.peek_calls, 1);
            assert_eq!(snap.peek_found, 1);
            assert_eq!(snap.pushpop_calls, 2);
            assert_eq!(snap.pushpop_fast_path, 1);
            assert_eq!(snap.remove_calls, 3);
            assert_eq!(snap.remove_found, 2);
            assert_eq!(snap.remove_empty, 1);
            assert_eq!(snap.sift_up_steps, 1);
            assert_eq!(snap.heap_len, 0);
        }

        #[test]
        fn min_heap_metrics_heapify_and_reset() {
            let mut heap = MinHeap::heapify(vec![3, 2, 1]);
            let snap = heap.snapshot();
            assert_eq!(snap.heapify_calls, 1);
            assert_eq!(snap.heapify_elements, 3);
            assert_eq!(snap.sift_down_steps, 1);

            heap.reset_metrics();
            assert_eq!(heap.snapshot().heapify_calls, 0);
            assert_eq!(heap.snapshot().heap_len, 3);
        }
    }
}
