//! Binary-Heap Priority Queue for Rust
//!
//! This crate provides a binary heap whose ordering is a predicate chosen at
//! runtime, plus two small programs built on top of it.
//!
//! # Features
//!
//! - **[`PriorityQueue`](binary::PriorityQueue)**: O(log n) push and pop, O(1) top,
//!   O(n) bulk loading via bottom-up heapify, and in-place `increase_key`
//! - **Ordering predicates**: natural (min-heap), reversed (max-heap) and
//!   key-based orderings in [`ordering`]
//! - **Request scheduling**: greedy selection of non-overlapping meeting requests
//! - **Fruit basket**: round counting for the "carry the heaviest fruits" puzzle
//!
//! Empty-heap accesses and invalid priority increases are reported through
//! [`HeapError`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::binary::PriorityQueue;
//! use rust_priority_queue::{Heap, HeapError, IncreaseKeyHeap};
//!
//! let mut heap = PriorityQueue::new();
//! heap.fill([5, 3, 8]);
//! heap.increase_key(&8, 1).unwrap();
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

pub mod binary;
pub mod fruits;
pub mod input;
pub mod ordering;
pub mod scheduling;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Heap, HeapError, IncreaseKeyHeap};
