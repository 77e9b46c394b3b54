//! Index arithmetic and sift primitives for an implicit binary tree.
//!
//! A slice is read as a complete binary tree laid out level by level:
//!
//! ```text
//!   index:     0    1    2    3    4    5    6
//!            ┌────┬────┬────┬────┬────┬────┬────┐
//!            │ -2 │  1 │  5 │  4 │  9 │  6 │  7 │
//!            └────┴────┴────┴────┴────┴────┴────┘
//!
//!                          -2            depth 0
//!                        /    \
//!                       1      5         depth 1
//!                      / \    / \
//!                     4   9  6   7       depth 2
//!
//!   parent(i) = (i - 1) / 2
//!   children  = 2i + 1, 2i + 2
//! ```
//!
//! Both primitives restore the min-heap property after a single slot was
//! perturbed and return the index where the moved element came to rest.
//! Ties between equal children are resolved toward the left child; callers
//! must not rely on that, since equal elements carry no ordering guarantee.

/// Index of the parent of `index`. `index` must be non-zero.
#[inline]
pub const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Depth of `index` in the implicit tree; the root is at depth 0.
#[inline]
pub const fn depth(index: usize) -> u32 {
    (index + 1).ilog2()
}

/// Last index with at least one child, or `None` when `len < 2`.
#[inline]
pub const fn last_internal(len: usize) -> Option<usize> {
    (len / 2).checked_sub(1)
}

/// Moves `data[index]` toward the root while it is smaller than its parent.
///
/// Returns the final resting index.
///
/// # Example
///
/// ```
/// use heapkit::ds::sift::sift_up;
///
/// let mut data = [1, 3, 7, 10, 0];
/// assert_eq!(sift_up(&mut data, 4), 0);
/// assert_eq!(data, [0, 1, 7, 10, 3]);
/// ```
pub fn sift_up<T: Ord>(data: &mut [T], mut index: usize) -> usize {
    debug_assert!(index < data.len(), "sift_up index {} out of range", index);
    while index > 0 {
        let up = parent(index);
        if data[index] < data[up] {
            data.swap(index, up);
            index = up;
        } else {
            break;
        }
    }
    index
}

/// Moves `data[index]` toward the leaves while a child is strictly smaller.
///
/// At each level the smaller of the two children is the swap candidate.
/// Returns the final resting index.
///
/// # Example
///
/// ```
/// use heapkit::ds::sift::sift_down;
///
/// let mut data = [25, 20, 30];
/// assert_eq!(sift_down(&mut data, 0), 1);
/// assert_eq!(data, [20, 25, 30]);
/// ```
pub fn sift_down<T: Ord>(data: &mut [T], mut index: usize) -> usize {
    let len = data.len();
    loop {
        let left = left_child(index);
        if left >= len {
            break;
        }
        let right = right_child(index);
        let smaller = if right < len && data[right] < data[left] {
            right
        } else {
            left
        };
        if data[smaller] < data[index] {
            data.swap(index, smaller);
            index = smaller;
        } else {
            break;
        }
    }
    index
}

/// Returns the first index whose element is smaller than its parent.
pub fn first_violation<T: Ord>(data: &[T]) -> Option<usize> {
    (1..data.len()).find(|&i| data[i] < data[parent(i)])
}

/// Returns `true` if `data` satisfies the min-heap property.
#[inline]
pub fn is_min_heap<T: Ord>(data: &[T]) -> bool {
    first_violation(data).is_none()
}
