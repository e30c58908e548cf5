use crate::utils::error::{Result, ShowcaseError};
use std::iter::FusedIterator;

/// Number of Fibonacci terms that fit in a `u64` (F(0) through F(93)).
pub const MAX_TERMS: usize = 94;

/// Lazy producer of the first `count` Fibonacci numbers, seeded with 0 and 1.
///
/// Each term is computed when `next` is called. The iterator is consumed as it
/// goes; build a new one to start over. Counts above [`MAX_TERMS`] stop after
/// the last term a `u64` can hold.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: u64,
    next: u64,
    remaining: usize,
}

impl Fibonacci {
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            next: 1,
            remaining: count.min(MAX_TERMS),
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let value = self.current;
        // Lookahead past F(93) saturates but is never yielded.
        let following = self.current.checked_add(self.next).unwrap_or(u64::MAX);
        self.current = self.next;
        self.next = following;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Fibonacci {}

impl FusedIterator for Fibonacci {}

/// Eagerly builds the first `count` Fibonacci numbers.
pub fn fibonacci(count: usize) -> Result<Vec<u64>> {
    if count > MAX_TERMS {
        return Err(ShowcaseError::overflow("fibonacci", count));
    }

    let mut sequence = Vec::with_capacity(count);
    for i in 0..count {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => sequence[i - 1] + sequence[i - 2],
        };
        sequence.push(term);
    }
    Ok(sequence)
}
