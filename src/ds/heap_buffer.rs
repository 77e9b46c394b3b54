//! Owned, growable storage for an array-backed heap.
//!
//! `HeapBuffer` holds the live elements contiguously, with index 0 as the
//! root of the implicit tree. It only grows when an append finds the buffer
//! full; each growth doubles the capacity.
//!
//! ## Architecture
//!
//! ```text
//!   capacity = 6, len = 4
//!
//!   ┌─────┬─────┬─────┬─────┬ ─ ─ ┬ ─ ─ ┐
//!   │  1  │  3  │  7  │ 10  │     │     │
//!   └─────┴─────┴─────┴─────┴ ─ ─ ┴ ─ ─ ┘
//!     [0]   [1]   [2]   [3]   spare slots
//!     root
//!
//!   append(v) when len == capacity:
//!     capacity 0 -> INITIAL_CAPACITY
//!     capacity c -> 2c
//! ```
//!
//! ## Operations
//!
//! | Operation      | Description                            | Complexity     |
//! |----------------|----------------------------------------|----------------|
//! | `append`       | Write at `len`, growing if full        | O(1) amortized |
//! | `remove_last`  | Take the element at `len - 1`          | O(1)           |
//! | `get` / `set`  | Read / replace a live slot             | O(1)           |
//! | `swap`         | Exchange two live slots                | O(1)           |
//!
//! Growth is all-or-nothing: a failed reallocation leaves the buffer
//! unchanged, so `len` can never drift from the contents. No reference into
//! the storage outlives a borrow of the buffer, which keeps reallocation
//! invisible to callers.

use crate::error::AllocError;

/// Number of slots allocated by the first growth of an empty buffer.
pub const INITIAL_CAPACITY: usize = 3;

/// Contiguous element storage with a doubling growth policy.
///
/// # Example
///
/// ```
/// use heapkit::ds::HeapBuffer;
///
/// let mut buf = HeapBuffer::new();
/// assert_eq!(buf.capacity(), 0);
///
/// buf.append(10);
/// buf.append(20);
/// assert_eq!(buf.len(), 2);
/// assert_eq!(buf.get(1), &20);
///
/// assert_eq!(buf.remove_last(), Some(20));
/// assert_eq!(buf.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeapBuffer<T> {
    data: Vec<T>,
}

impl<T> HeapBuffer<T> {
    /// Creates an empty buffer without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer able to hold `capacity` elements before growing.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `data` as the live contents, in order.
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Capacity the next growth would target.
    ///
    /// Saturates so that an impossible request surfaces as an allocation
    /// failure instead of an arithmetic overflow.
    #[inline]
    fn next_capacity(&self) -> usize {
        match self.data.capacity() {
            0 => INITIAL_CAPACITY,
            cap => cap.saturating_mul(2),
        }
    }

    /// Grows the buffer if it is full. Returns `true` if it grew.
    ///
    /// Allocation failure aborts, following the global allocator contract.
    pub fn grow_if_full(&mut self) -> bool {
        if self.data.len() < self.data.capacity() {
            return false;
        }
        let additional = self.next_capacity() - self.data.len();
        self.data.reserve_exact(additional);
        true
    }

    /// Fallible form of [`grow_if_full`](Self::grow_if_full).
    ///
    /// On error the buffer is left untouched.
    pub fn try_grow_if_full(&mut self) -> Result<bool, AllocError> {
        if self.data.len() < self.data.capacity() {
            return Ok(false);
        }
        let target = self.next_capacity();
        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|err| AllocError::new(target, err))?;
        Ok(true)
    }

    /// Appends `value` at index `len`, growing first if the buffer is full.
    ///
    /// Returns `true` if the append triggered a growth.
    pub fn append(&mut self, value: T) -> bool {
        let grew = self.grow_if_full();
        self.data.push(value);
        grew
    }

    /// Removes and returns the last live element, or `None` if empty.
    #[inline]
    pub fn remove_last(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Returns the root element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Replaces the element at `index` with `value`, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.data[index], value)
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.data
            .try_reserve(additional)
            .map_err(|err| AllocError::new(self.data.len().saturating_add(additional), err))
    }

    /// Shrinks capacity toward `max(len, INITIAL_CAPACITY)`.
    ///
    /// An empty buffer releases its allocation entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.data.is_empty() {
            self.data = Vec::new();
        } else {
            self.data.shrink_to(INITIAL_CAPACITY.max(self.data.len()));
        }
    }

    /// Drops all live elements, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the live elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the buffer, returning the live elements in storage order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
