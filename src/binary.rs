//! Binary heap ordered by a runtime predicate
//!
//! [`PriorityQueue`] stores its elements in a single `Vec` laid out as an
//! implicit binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`, its parent at `(i - 1) / 2`. The ordering is a predicate
//! `before(a, b)` that returns true when `a` must sit closer to the root than
//! `b`, so the same type serves as a min-heap, a max-heap or anything keyed on
//! a field of `T`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity      |
//! |----------------|-----------------|
//! | `push`         | O(log n)        |
//! | `pop`          | O(log n)        |
//! | `top`          | O(1)            |
//! | `fill`         | O(n)            |
//! | `increase_key` | O(n) + O(log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::Heap;
//! use rust_priority_queue::binary::PriorityQueue;
//!
//! // Longest word first
//! let mut heap = PriorityQueue::with_order(|a: &&str, b: &&str| a.len() > b.len());
//! heap.fill(["fig", "banana", "kiwi"]);
//!
//! assert_eq!(heap.pop(), Ok("banana"));
//! assert_eq!(heap.pop(), Ok("kiwi"));
//! assert_eq!(heap.pop(), Ok("fig"));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::ordering::natural;
use crate::traits::{Heap, HeapError, IncreaseKeyHeap};

/// A binary heap whose order is fixed by a predicate supplied at construction
///
/// `F` defaults to a plain function pointer, which is what the natural-order
/// constructors ([`PriorityQueue::new`], [`PriorityQueue::with_capacity`])
/// and the helpers in [`ordering`](crate::ordering) produce. Closures work
/// too; the queue then carries the closure's own type.
#[derive(Clone)]
pub struct PriorityQueue<T, F = fn(&T, &T) -> bool> {
    /// Elements in heap order; `data[0]` is the top
    data: Vec<T>,
    /// Returns true when the first argument has strictly higher priority
    before: F,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty min-heap using `T`'s natural ordering
    pub fn new() -> Self {
        Self::with_order(natural::<T>)
    }

    /// Creates an empty min-heap with storage reserved for `capacity` elements
    ///
    /// The capacity is a hint, not a bound: the heap grows past it as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, natural::<T>)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `before`
    pub fn with_order(before: F) -> Self {
        Self {
            data: Vec::new(),
            before,
        }
    }

    /// Creates an empty heap ordered by `before`, with storage reserved for
    /// `capacity` elements
    pub fn with_capacity_and_order(capacity: usize, before: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            before,
        }
    }

    /// Replaces the contents of the heap with the elements of `iter`
    ///
    /// The new elements are collected before the old ones are released, so a
    /// panicking iterator leaves the heap exactly as it was.
    ///
    /// # Time Complexity
    /// O(n), using bottom-up heap construction.
    pub fn fill<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data = iter.into_iter().collect();
        self.rebuild();
    }

    /// Fallible variant of [`fill`](Self::fill)
    ///
    /// Stops at the first `Err` and returns it; the heap keeps its previous
    /// contents in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_priority_queue::Heap;
    /// use rust_priority_queue::binary::PriorityQueue;
    ///
    /// let mut heap = PriorityQueue::new();
    /// heap.push(7);
    ///
    /// let parsed = ["3", "x", "1"].iter().map(|s| s.parse::<i32>());
    /// assert!(heap.try_fill(parsed).is_err());
    /// assert_eq!(heap.as_slice(), &[7]);
    /// ```
    pub fn try_fill<I, E>(&mut self, iter: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let data = iter.into_iter().collect::<Result<Vec<T>, E>>()?;
        self.data = data;
        self.rebuild();
        Ok(())
    }

    /// Inserts `value`, reporting allocation failure instead of aborting
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if storage could not grow. The heap is
    /// unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), HeapError> {
        self.data.try_reserve(1)?;
        self.push(value);
        Ok(())
    }

    /// Consumes the heap and returns its elements in priority order,
    /// highest priority first
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, yielding its elements in priority order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, F> {
        IntoIterSorted { heap: self }
    }

    /// Moves the element at `index` toward the root until its parent orders
    /// before it (or it becomes the root)
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.before)(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` toward the leaves until neither child
    /// orders before it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;

            if left < len && (self.before)(&self.data[left], &self.data[first]) {
                first = left;
            }
            if right < len && (self.before)(&self.data[right], &self.data[first]) {
                first = right;
            }

            if first == index {
                break;
            }
            self.data.swap(index, first);
            index = first;
        }
    }

    /// Restores the heap property over the whole vector
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, F> PriorityQueue<T, F> {
    /// Returns a copy of every element in internal heap order
    ///
    /// Only the first element has a defined position (it is the top); the
    /// rest are in whatever order the heap property allows.
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    /// Borrows the elements in internal heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in internal heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves storage for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Releases unused storage
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, F> Heap<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // Moves the last element into the root slot
        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }
}

impl<T, F> IncreaseKeyHeap<T> for PriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    fn increase_key(&mut self, old: &T, new: T) -> Result<bool, HeapError> {
        let Some(index) = self.data.iter().position(|element| element == old) else {
            return Ok(false);
        };

        if (self.before)(old, &new) {
            return Err(HeapError::PriorityNotIncreased);
        }

        self.data[index] = new;
        self.sift_up(index);
        Ok(true)
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut batch: Vec<T> = iter.into_iter().collect();
        let old_len = self.data.len();
        let added = batch.len();
        self.data.append(&mut batch);

        // Rebuilding is O(n); sifting each new element up is O(k log n).
        if added > old_len {
            self.rebuild();
        } else {
            for index in old_len..self.data.len() {
                self.sift_up(index);
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.fill(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self {
            data,
            before: natural::<T>,
        };
        heap.rebuild();
        heap
    }
}

impl<'a, T, F> IntoIterator for &'a PriorityQueue<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Consuming iterator returned by [`PriorityQueue::into_iter_sorted`]
#[derive(Clone)]
pub struct IntoIterSorted<T, F> {
    heap: PriorityQueue<T, F>,
}

impl<T: fmt::Debug, F> fmt::Debug for IntoIterSorted<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIterSorted").field(&self.heap).finish()
    }
}

impl<T, F> Iterator for IntoIterSorted<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.data.len();
        (len, Some(len))
    }
}

impl<T, F> ExactSizeIterator for IntoIterSorted<T, F> where F: Fn(&T, &T) -> bool {}

impl<T, F> FusedIterator for IntoIterSorted<T, F> where F: Fn(&T, &T) -> bool {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{by_key, reversed};
    use std::panic::{self, AssertUnwindSafe};

    fn assert_heap_property<T, F: Fn(&T, &T) -> bool>(heap: &PriorityQueue<T, F>) {
        let data = heap.as_slice();
        for index in 1..data.len() {
            let parent = (index - 1) / 2;
            assert!(
                !(heap.before)(&data[index], &data[parent]),
                "element at {} orders before its parent at {}",
                index,
                parent
            );
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = PriorityQueue::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.top(), Ok(&1));
        assert_eq!(heap.is_top(&1), Ok(true));
        assert_eq!(heap.is_top(&2), Ok(false));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: PriorityQueue<i32> = PriorityQueue::with_capacity(8);

        assert!(heap.capacity() >= 8);
        assert_eq!(heap.top(), Err(HeapError::Empty));
        assert_eq!(heap.is_top(&0), Err(HeapError::Empty));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = PriorityQueue::with_order(by_key(|pair: &(i32, char)| pair.0));

        heap.push((1, 'a'));
        heap.push((1, 'b'));
        heap.push((1, 'c'));

        assert_eq!(heap.len(), 3);

        let mut seen: Vec<char> = heap.into_iter_sorted().map(|(_, c)| c).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_max_ordering() {
        let mut heap = PriorityQueue::with_order(reversed::<i32>);
        for value in [5, 9, 1, 7] {
            heap.push(value);
        }

        assert_eq!(heap.top(), Ok(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 7, 5, 1]);
    }

    #[test]
    fn test_fill_builds_heap() {
        let mut heap = PriorityQueue::new();
        heap.push(100);

        heap.fill([8, 3, 9, 1, 4, 7, 2, 6, 5, 0]);

        assert_eq!(heap.len(), 10);
        assert_heap_property(&heap);
        assert_eq!(heap.is_top(&0), Ok(true));
        assert_eq!(heap.into_sorted_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_try_fill_keeps_contents_on_error() {
        let mut heap = PriorityQueue::new();
        heap.fill([4, 2, 6]);
        let before = heap.elements();

        let result: Result<(), &str> = heap.try_fill(vec![Ok(1), Err("bad"), Ok(3)]);

        assert_eq!(result, Err("bad"));
        assert_eq!(heap.elements(), before);

        heap.try_fill(vec![Ok::<_, &str>(9), Ok(8)]).unwrap();
        assert_eq!(heap.into_sorted_vec(), vec![8, 9]);
    }

    #[test]
    fn test_try_push() {
        let mut heap = PriorityQueue::new();
        for value in (0..50).rev() {
            heap.try_push(value).unwrap();
        }
        assert_heap_property(&heap);
        assert_eq!(heap.top(), Ok(&0));
    }

    #[test]
    fn test_increase_key_moves_toward_root() {
        let mut heap = PriorityQueue::new();
        heap.fill([10, 20, 30, 40, 50]);

        assert_eq!(heap.increase_key(&50, 5), Ok(true));
        assert_heap_property(&heap);
        assert_eq!(heap.top(), Ok(&5));
        assert_eq!(heap.into_sorted_vec(), vec![5, 10, 20, 30, 40]);
    }

    #[test]
    fn test_increase_key_rejects_lower_priority() {
        let mut heap = PriorityQueue::new();
        heap.fill([10, 20, 30]);
        let before = heap.elements();

        assert_eq!(
            heap.increase_key(&10, 15),
            Err(HeapError::PriorityNotIncreased)
        );
        assert_eq!(heap.elements(), before);
    }

    #[test]
    fn test_increase_key_missing_value() {
        let mut heap = PriorityQueue::new();
        heap.fill([10, 20, 30]);
        let before = heap.elements();

        // Missing values are reported before the ordering is checked
        assert_eq!(heap.increase_key(&99, 1000), Ok(false));
        assert_eq!(heap.elements(), before);
    }

    #[test]
    fn test_increase_key_equal_priority_is_allowed() {
        let mut heap = PriorityQueue::new();
        heap.fill([1, 2, 3]);

        assert_eq!(heap.increase_key(&2, 2), Ok(true));
        assert_eq!(heap.len(), 3);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_increase_key_on_max_heap() {
        let mut heap = PriorityQueue::with_order(reversed::<i32>);
        heap.fill([10, 20, 30]);

        assert_eq!(
            heap.increase_key(&20, 5),
            Err(HeapError::PriorityNotIncreased)
        );
        assert_eq!(heap.increase_key(&10, 40), Ok(true));
        assert_eq!(heap.top(), Ok(&40));
    }

    #[test]
    fn test_increase_key_replaces_one_duplicate() {
        let mut heap = PriorityQueue::new();
        heap.fill([7, 7, 7]);

        assert_eq!(heap.increase_key(&7, 1), Ok(true));
        assert_eq!(heap.into_sorted_vec(), vec![1, 7, 7]);
    }

    #[test]
    fn test_extend_small_and_large_batches() {
        let mut heap: PriorityQueue<i32> = (50..100).collect();
        heap.extend([3, 1, 2]);
        assert_heap_property(&heap);
        assert_eq!(heap.top(), Ok(&1));

        let mut heap: PriorityQueue<i32> = PriorityQueue::from(vec![5]);
        heap.extend((0..100).rev());
        assert_heap_property(&heap);
        assert_eq!(heap.len(), 101);
        assert_eq!(heap.top(), Ok(&0));
    }

    #[test]
    fn test_extend_with_panicking_iterator_keeps_heap() {
        let mut heap: PriorityQueue<i32> = (10..20).collect();
        let snapshot = heap.elements();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            heap.extend((0..5).map(|value| {
                if value == 2 {
                    panic!("iterator failed");
                }
                value
            }));
        }));

        assert!(result.is_err());
        assert_heap_property(&heap);
        assert_eq!(heap.elements(), snapshot);
        assert_eq!(heap.top(), Ok(&10));
    }

    #[test]
    fn test_from_vec_and_debug() {
        let heap: PriorityQueue<i32> = PriorityQueue::from(vec![3, 1, 2]);
        assert_heap_property(&heap);
        assert_eq!(heap.as_slice()[0], 1);
        assert_eq!(format!("{:?}", heap), format!("{:?}", heap.as_slice()));
    }

    #[test]
    fn test_clear_and_into_vec() {
        let mut heap = PriorityQueue::new();
        heap.fill(0..10);
        let capacity = heap.capacity();

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), capacity);

        heap.push(4);
        assert_eq!(heap.into_vec(), vec![4]);
    }

    #[test]
    fn test_into_iter_sorted_is_exact() {
        let heap: PriorityQueue<u8> = [4, 2, 8, 6].into_iter().collect();
        let mut iter = heap.into_iter_sorted();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![4, 6, 8]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = PriorityQueue::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = PriorityQueue::new();

        for i in (0..100).rev() {
            heap.push(i);
            assert_heap_property(&heap);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }
}
