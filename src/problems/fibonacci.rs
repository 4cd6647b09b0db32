//! The Fibonacci sequence, the smallest recurrence with overlapping
//! subproblems: f(0) = 0, f(1) = 1, f(n) = f(n-1) + f(n-2).

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::ensure_at_most;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: usize = 93;

#[derive(Clone, Debug)]
pub struct Fibonacci {
    n: usize,
}

impl Fibonacci {
    pub fn new(n: usize) -> DpResult<Self> {
        ensure_at_most("fibonacci index", n, MAX_INDEX)?;
        Ok(Self { n })
    }

    pub fn compact(&self) -> u64 {
        if self.n == 0 {
            return 0;
        }
        let (mut prev, mut curr) = (0u64, 1u64);
        for _ in 2..=self.n {
            let next = prev + curr;
            prev = curr;
            curr = next;
        }
        curr
    }
}

impl Recurrence for Fibonacci {
    type State = usize;
    type Value = u64;

    fn root(&self) -> usize {
        self.n
    }

    fn base_case(&self, &n: &usize) -> Option<u64> {
        (n <= 1).then_some(n as u64)
    }

    fn dependencies(&self, &n: &usize) -> Vec<usize> {
        vec![n - 1, n - 2]
    }

    fn combine(&self, _state: &usize, children: &[u64]) -> u64 {
        children.iter().sum()
    }
}

impl Tabulation for Fibonacci {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tabulated;
    use crate::harness::cross_validate_with;

    #[test]
    fn small_indices() {
        for (n, expected) in [(0, 0), (1, 1), (2, 1), (5, 5), (10, 55)] {
            let problem = Fibonacci::new(n).unwrap();
            assert_eq!(cross_validate_with(&problem, problem.compact()), Ok(expected));
        }
    }

    #[test]
    fn largest_index_fits() {
        let problem = Fibonacci::new(MAX_INDEX).unwrap();
        assert_eq!(tabulated(&problem).0, 12_200_160_415_121_876_738);
        assert_eq!(problem.compact(), 12_200_160_415_121_876_738);
        assert!(Fibonacci::new(MAX_INDEX + 1).is_err());
    }
}
