//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when the min-heap property is found to be
//!   violated (`MinHeap::check_invariants`).
//! - [`AllocError`]: Returned by the fallible growth paths
//!   (`MinHeap::try_insert`, `MinHeap::try_reserve`) when the storage buffer
//!   cannot be enlarged.
//!
//! Querying or removing from an empty heap is not an error; those operations
//! return `None`.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MinHeap;
//! use heapkit::error::AllocError;
//!
//! let mut heap: MinHeap<i64> = MinHeap::new();
//! let grown: Result<(), AllocError> = heap.try_insert(7);
//! assert!(grown.is_ok());
//!
//! // A request that can never be satisfied is reported, not aborted on
//! let err = heap.try_reserve(usize::MAX).unwrap_err();
//! assert!(err.to_string().contains("heap buffer"));
//! assert_eq!(heap.len(), 1);
//! ```

use std::collections::TryReserveError;
use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the heap invariant is violated.
///
/// Produced by [`MinHeap::check_invariants`](crate::ds::MinHeap::check_invariants).
/// Carries a human-readable description of which slot failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// AllocError
// ---------------------------------------------------------------------------

/// Error returned when the storage buffer cannot grow.
///
/// This is the only failure class of the heap. The operation that hit it
/// leaves the heap exactly as it was: no element is added and the live
/// count still matches the buffer contents.
///
/// # Example
///
/// ```
/// use heapkit::ds::MinHeap;
///
/// let mut heap: MinHeap<u64> = MinHeap::new();
/// let err = heap.try_reserve(usize::MAX).unwrap_err();
/// assert_eq!(err.requested(), usize::MAX);
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError {
    requested: usize,
    source: TryReserveError,
}

impl AllocError {
    /// Creates a new `AllocError` for a request of `requested` total slots.
    #[inline]
    pub fn new(requested: usize, source: TryReserveError) -> Self {
        Self { requested, source }
    }

    /// Returns the total number of slots that was requested.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Returns the allocator error that caused the failure.
    #[inline]
    pub fn reserve_error(&self) -> &TryReserveError {
        &self.source
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to grow heap buffer to {} slots: {}",
            self.requested, self.source
        )
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
