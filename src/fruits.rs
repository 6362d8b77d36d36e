//! Fruit basket rounds
//!
//! A basket holds fruits of known weights and someone can carry at most
//! `limit` per trip. Each round they take the heaviest fruits first for as
//! long as the next one still fits, bite each taken fruit in half and put the
//! halves (rounded down) back. A fruit weighing 1 or less is eaten whole. The
//! answer is the number of rounds until the basket is empty.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::fruits::{count_rounds, parse_basket};
//!
//! let basket = parse_basket("1\n4\n10").unwrap();
//! assert_eq!(count_rounds(&basket), Ok(3));
//! ```

use thiserror::Error;

use crate::input::{InputError, Tokens};
use crate::ordering::max_queue;
use crate::traits::Heap;

/// Error type for the fruit basket simulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FruitError {
    /// The heaviest remaining fruit alone exceeds the limit, so no round can
    /// ever take it
    #[error("a fruit weighing {weight} can never be carried with a limit of {limit}")]
    TooHeavy { weight: u64, limit: u64 },

    #[error(transparent)]
    Input(#[from] InputError),
}

/// The fruit weights and the per-round carrying limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    pub fruits: Vec<u64>,
    pub limit: u64,
}

/// Parses a fruit count, that many weights, then the carrying limit
pub fn parse_basket(text: &str) -> Result<Basket, InputError> {
    let mut tokens = Tokens::new(text);

    let count: usize = tokens.next_value("the number of fruits")?;
    let fruits = (0..count)
        .map(|_| tokens.next_value("a fruit weight"))
        .collect::<Result<Vec<u64>, _>>()?;
    let limit = tokens.next_value("the carrying limit")?;
    tokens.finish()?;

    Ok(Basket { fruits, limit })
}

/// Returns the number of rounds needed to empty the basket
///
/// # Errors
/// Returns [`FruitError::TooHeavy`] if some fruit is heavier than the limit.
pub fn count_rounds(basket: &Basket) -> Result<usize, FruitError> {
    let limit = basket.limit;
    let mut heap = max_queue(basket.fruits.len());
    heap.fill(basket.fruits.iter().copied());

    let mut rounds = 0;
    let mut taken = Vec::new();

    while let Ok(&heaviest) = heap.top() {
        if heaviest > limit {
            return Err(FruitError::TooHeavy {
                weight: heaviest,
                limit,
            });
        }

        let mut load = 0;
        while heap.top().is_ok_and(|&weight| weight <= limit - load) {
            if let Ok(weight) = heap.pop() {
                load += weight;
                taken.push(weight);
            }
        }

        rounds += 1;
        for weight in taken.drain(..) {
            if weight > 1 {
                heap.push(weight / 2);
            }
        }
    }

    Ok(rounds)
}

/// Parses `text` as a basket and counts its rounds
pub fn rounds_for_input(text: &str) -> Result<usize, FruitError> {
    let basket = parse_basket(text)?;
    count_rounds(&basket)
}
