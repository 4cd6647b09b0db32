//! Counting the sub-combinations of an array.
//!
//! Every element is either included or excluded, and both choices advance to
//! the next index identically:
//! - f(n) = 1
//! - f(i) = f(i+1) + f(i+1)
//!
//! which gives the closed form 2^(n-i). The element values never influence
//! the count; only the length is part of the state space.

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::ensure_at_most;

/// Longest array whose combination count fits in a `u64`.
pub const MAX_LEN: usize = 63;

/// State space: index into an array of `len` elements.
#[derive(Clone, Debug)]
pub struct ArrayCombinations {
    len: usize,
}

impl ArrayCombinations {
    pub fn new<T>(items: &[T]) -> DpResult<Self> {
        ensure_at_most("array length", items.len(), MAX_LEN)?;
        Ok(Self { len: items.len() })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Closed form 2^n.
    pub fn closed_form(&self) -> u64 {
        1u64 << self.len
    }

    /// Space-optimized tabulation: one running scalar.
    pub fn compact(&self) -> u64 {
        let mut count = 1u64;
        for _ in 0..self.len {
            count += count;
        }
        count
    }
}

impl Recurrence for ArrayCombinations {
    type State = usize;
    type Value = u64;

    fn root(&self) -> usize {
        0
    }

    fn base_case(&self, &i: &usize) -> Option<u64> {
        (i == self.len).then_some(1)
    }

    fn dependencies(&self, &i: &usize) -> Vec<usize> {
        // include, exclude
        vec![i + 1, i + 1]
    }

    fn combine(&self, _state: &usize, children: &[u64]) -> u64 {
        children.iter().sum()
    }
}

impl Tabulation for ArrayCombinations {
    fn table_len(&self) -> usize {
        self.len
    }

    fn slot(&self, &i: &usize) -> usize {
        i
    }

    fn scan_order(&self) -> Vec<usize> {
        (0..self.len).rev().collect()
    }
}
