//! Meeting-room request scheduling
//!
//! Given requests for a single room, each with a start time and a duration,
//! find the largest number that can be granted without overlap. Requests are
//! taken in order of earliest finish; a request is granted when it starts no
//! earlier than the previously granted one finished.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::scheduling::{max_requests, parse_requests};
//!
//! let requests = parse_requests("1 1  2 3  7 3  2 1  6 1  4 3  3 3  3 2  1 1  4 1").unwrap();
//! assert_eq!(max_requests(requests), 5);
//! ```

use crate::binary::PriorityQueue;
use crate::input::{InputError, Tokens};
use crate::ordering::by_key;
use crate::traits::Heap;

/// A request for the room over the half-open interval `[start, finish)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    start: u64,
    finish: u64,
}

impl Request {
    /// Creates a request from its start time and duration
    ///
    /// # Errors
    /// Returns [`InputError::Overflow`] if `start + duration` does not fit in a `u64`.
    pub fn new(start: u64, duration: u64) -> Result<Self, InputError> {
        let finish = start
            .checked_add(duration)
            .ok_or(InputError::Overflow { start, duration })?;
        Ok(Self { start, finish })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn finish(&self) -> u64 {
        self.finish
    }
}

/// Parses `(start, duration)` pairs until end of input
pub fn parse_requests(text: &str) -> Result<Vec<Request>, InputError> {
    let mut tokens = Tokens::new(text);
    let mut requests = Vec::new();

    while let Some(start) = tokens.try_next()? {
        let duration = tokens.next_value("a duration after the start time")?;
        requests.push(Request::new(start, duration)?);
    }

    Ok(requests)
}

/// Returns the largest number of non-overlapping requests
pub fn max_requests<I: IntoIterator<Item = Request>>(requests: I) -> usize {
    let requests = requests.into_iter();
    // Among equal finishes the earlier start goes first, so an empty request
    // at the shared finish time is still granted after the longer one.
    let mut queue = PriorityQueue::with_capacity_and_order(
        requests.size_hint().0,
        by_key(|request: &Request| (request.finish, request.start)),
    );

    for request in requests {
        queue.push(request);
    }

    let mut granted = 0;
    let mut end = 0;
    while let Ok(request) = queue.pop() {
        if request.start >= end {
            granted += 1;
            end = request.finish;
        }
    }

    granted
}
