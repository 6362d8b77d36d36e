//! Whitespace-separated integer input shared by the consumers
//!
//! Both the request scheduler and the fruit basket read plain integer tokens.
//! Positions in errors are 1-based token indices.

use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

/// Error type for reading consumer input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token that does not parse as the expected integer type
    #[error("token {position} ({token:?}) is not a valid non-negative integer")]
    InvalidToken { position: usize, token: String },

    /// The input ended before a required value
    #[error("input ended early: expected {expected}")]
    MissingValue { expected: &'static str },

    /// Tokens remain after the last expected value
    #[error("unexpected trailing token {position} ({token:?})")]
    UnexpectedTrailing { position: usize, token: String },

    /// `start + duration` does not fit in a `u64`
    #[error("request starting at {start} with duration {duration} ends past the representable range")]
    Overflow { start: u64, duration: u64 },
}

/// A cursor over the whitespace-separated tokens of some text
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    /// Starts a cursor at the first token of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    /// Parses the next token, or returns `Ok(None)` at end of input
    pub fn try_next<N: FromStr>(&mut self) -> Result<Option<N>, InputError> {
        let Some(token) = self.inner.next() else {
            return Ok(None);
        };
        self.position += 1;
        token
            .parse()
            .map(Some)
            .map_err(|_| InputError::InvalidToken {
                position: self.position,
                token: token.to_string(),
            })
    }

    /// Parses the next token, which must be present
    pub fn next_value<N: FromStr>(&mut self, expected: &'static str) -> Result<N, InputError> {
        self.try_next()?
            .ok_or(InputError::MissingValue { expected })
    }

    /// Checks that every token has been consumed
    pub fn finish(mut self) -> Result<(), InputError> {
        match self.inner.next() {
            Some(token) => Err(InputError::UnexpectedTrailing {
                position: self.position + 1,
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Reads all of `path`, or all of stdin when no path is given
pub fn read_source(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
