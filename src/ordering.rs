//! Ordering predicates for [`PriorityQueue`]
//!
//! A predicate `before(a, b)` returns true when `a` has strictly higher
//! priority than `b`. It must behave like a strict weak ordering (`a < b`
//! style, never `a <= b`), otherwise equal elements would be swapped back and
//! forth and `increase_key` would reject equal replacements.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::Heap;
//! use rust_priority_queue::binary::PriorityQueue;
//! use rust_priority_queue::ordering::{by_key, max_queue};
//!
//! let mut largest = max_queue(3);
//! largest.fill([3, 9, 4]);
//! assert_eq!(largest.top(), Ok(&9));
//!
//! let mut shortest = PriorityQueue::with_order(by_key(|s: &String| s.len()));
//! shortest.push("three".to_string());
//! shortest.push("one".to_string());
//! assert_eq!(shortest.pop().as_deref(), Ok("one"));
//! ```

use crate::binary::PriorityQueue;

/// Natural ordering: smaller elements first (a min-heap)
pub fn natural<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Reversed natural ordering: larger elements first (a max-heap)
pub fn reversed<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Orders elements by the key `key` extracts, smallest key first
pub fn by_key<T, K, G>(key: G) -> impl Fn(&T, &T) -> bool + Clone
where
    K: Ord,
    G: Fn(&T) -> K + Clone,
{
    move |a: &T, b: &T| key(a) < key(b)
}

/// Orders elements by the key `key` extracts, largest key first
pub fn by_key_reversed<T, K, G>(key: G) -> impl Fn(&T, &T) -> bool + Clone
where
    K: Ord,
    G: Fn(&T) -> K + Clone,
{
    move |a: &T, b: &T| key(a) > key(b)
}

/// Creates an empty queue that pops its smallest element first
pub fn min_queue<T: Ord>(capacity: usize) -> PriorityQueue<T> {
    PriorityQueue::with_capacity_and_order(capacity, natural::<T>)
}

/// Creates an empty queue that pops its largest element first
///
/// The ordering lives in the value, not the type: a `PriorityQueue<T>` built
/// through [`PriorityQueue::new`] or `collect` is always a min-heap.
pub fn max_queue<T: Ord>(capacity: usize) -> PriorityQueue<T> {
    PriorityQueue::with_capacity_and_order(capacity, reversed::<T>)
}
