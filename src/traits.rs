//! Common traits for priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for push/pop/top style queues
//! - [`IncreaseKeyHeap`]: Extended trait adding in-place priority increases
//!
//! Unlike `std::collections::BinaryHeap`, empty-queue accesses are reported
//! as [`HeapError::Empty`] rather than `None`, so callers that forgot to check
//! [`Heap::is_empty`] get a descriptive error to propagate with `?`.

use std::collections::TryReserveError;
use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// `top`, `pop` or `is_top` was called on a heap with no elements
    #[error("heap is empty")]
    Empty,

    /// The replacement passed to `increase_key` orders after the value it replaces
    #[error("new value has lower priority than the value it replaces")]
    PriorityNotIncreased,

    /// Growing the backing storage failed; the heap was left unchanged
    #[error("failed to grow heap storage: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Base trait for priority queues
///
/// The element that orders first under the queue's ordering predicate sits at
/// the top. For the natural ordering that is the smallest element.
///
/// # Example
///
/// ```rust
/// use rust_priority_queue::Heap;
/// use rust_priority_queue::binary::PriorityQueue;
///
/// let mut heap = PriorityQueue::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap has no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n), amortized over storage growth.
    fn push(&mut self, value: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Returns true if `value` equals the current top element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    fn is_top(&self, value: &T) -> Result<bool, HeapError>
    where
        T: PartialEq,
    {
        self.top().map(|top| top == value)
    }
}

/// Extended heap trait with `increase_key` support
///
/// "Increase" is relative to the queue's ordering: the replacement must not
/// order after the value it replaces. For a min-ordered queue that means a
/// smaller or equal value, for a max-ordered queue a larger or equal one.
///
/// # Example
///
/// ```rust
/// use rust_priority_queue::{Heap, IncreaseKeyHeap};
/// use rust_priority_queue::ordering::max_queue;
///
/// let mut heap = max_queue(4);
/// heap.push(10);
/// heap.push(20);
///
/// assert_eq!(heap.increase_key(&10, 30), Ok(true));
/// assert_eq!(heap.top(), Ok(&30));
/// assert_eq!(heap.increase_key(&99, 100), Ok(false));
/// ```
pub trait IncreaseKeyHeap<T: PartialEq>: Heap<T> {
    /// Replaces the first element equal to `old` with `new` and restores the
    /// heap property
    ///
    /// Returns `Ok(false)` without touching the heap when no element equals
    /// `old`. Among duplicates, which one is replaced is unspecified.
    ///
    /// # Errors
    /// Returns [`HeapError::PriorityNotIncreased`] if `new` orders strictly
    /// after `old`. The heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(n) to locate `old`, O(log n) to restore the heap property.
    fn increase_key(&mut self, old: &T, new: T) -> Result<bool, HeapError>;
}
