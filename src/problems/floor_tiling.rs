//! Tiling a 2×N strip with 2×1 dominoes.
//!
//! The leftmost column is covered either by one vertical tile (leaving a
//! 2×(n-1) strip) or by two stacked horizontal tiles (leaving 2×(n-2)):
//! - f(0) = f(1) = 1
//! - f(n) = f(n-1) + f(n-2)

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::ensure_at_most;

/// Longest strip whose tiling count fits in a `u64`.
pub const MAX_WIDTH: usize = 92;

#[derive(Clone, Debug)]
pub struct FloorTiling {
    n: usize,
}

impl FloorTiling {
    pub fn new(n: usize) -> DpResult<Self> {
        ensure_at_most("strip width", n, MAX_WIDTH)?;
        Ok(Self { n })
    }

    pub fn width(&self) -> usize {
        self.n
    }

    /// Space-optimized tabulation over the two most recent widths.
    pub fn compact(&self) -> u64 {
        let (mut prev, mut curr) = (1u64, 1u64);
        for _ in 2..=self.n {
            let next = prev + curr;
            prev = curr;
            curr = next;
        }
        curr
    }
}

impl Recurrence for FloorTiling {
    type State = usize;
    type Value = u64;

    fn root(&self) -> usize {
        self.n
    }

    fn base_case(&self, &n: &usize) -> Option<u64> {
        (n <= 1).then_some(1)
    }

    fn dependencies(&self, &n: &usize) -> Vec<usize> {
        vec![n - 1, n - 2]
    }

    fn combine(&self, _state: &usize, children: &[u64]) -> u64 {
        children.iter().sum()
    }
}

impl Tabulation for FloorTiling {
    fn table_len(&self) -> usize {
        self.n + 1
    }

    fn slot(&self, &n: &usize) -> usize {
        n
    }

    fn scan_order(&self) -> Vec<usize> {
        (2..=self.n).collect()
    }
}
