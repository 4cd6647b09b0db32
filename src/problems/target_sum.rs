//! Counting signed assignments that reach a target sum.
//!
//! Each number is either added or subtracted. The running sum travels in the
//! state alongside the index:
//! - f(n, s) = 1 if s == target, else 0
//! - f(i, s) = f(i+1, s + a[i]) + f(i+1, s - a[i])
//!
//! Zero is a legitimate count here, so cached entries are `Option`s rather
//! than relying on a sentinel.

use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::{checked_total, dense_size, ensure_at_most};

/// Longest input whose assignment count (at most 2^n) fits in a `u64`.
pub const MAX_LEN: usize = 63;

/// (index, running sum).
pub type SumState = (usize, i64);

#[derive(Clone, Debug)]
pub struct TargetSum {
    nums: Vec<i64>,
    target: i64,
    /// prefix_abs[i] = Σ_{j<i} |a[j]|; bounds the running sum at index i.
    prefix_abs: Vec<i64>,
}

impl TargetSum {
    pub fn new(nums: &[i64], target: i64) -> DpResult<Self> {
        ensure_at_most("number count", nums.len(), MAX_LEN)?;
        let total = checked_total("sum of magnitudes", nums.iter().map(|n| n.unsigned_abs()))?;
        if total > (i64::MAX / 4) as u64 {
            return Err(DpError::Overflow {
                what: "sum of magnitudes",
                bits: 64,
            });
        }
        // Running sums span [-total, total].
        let width = usize::try_from(total)
            .unwrap_or(usize::MAX)
            .saturating_mul(2)
            .saturating_add(1);
        dense_size("target-sum table", &[width, nums.len()])?;
        let mut prefix_abs = Vec::with_capacity(nums.len() + 1);
        let mut acc = 0i64;
        prefix_abs.push(acc);
        for n in nums {
            acc += n.abs();
            prefix_abs.push(acc);
        }
        Ok(Self {
            nums: nums.to_vec(),
            target,
            prefix_abs,
        })
    }

    /// Σ|a|, the offset that maps running sums onto non-negative indices.
    fn offset(&self) -> i64 {
        self.prefix_abs[self.nums.len()]
    }

    fn width(&self) -> usize {
        2 * self.offset() as usize + 1
    }

    /// Space-optimized forward tabulation over one layer of offset sums.
    pub fn compact(&self) -> u64 {
        let offset = self.offset();
        if self.target.unsigned_abs() > offset as u64 {
            return 0;
        }
        let width = self.width();
        let mut layer = vec![0u64; width];
        layer[offset as usize] = 1;
        for &num in &self.nums {
            let step = num.unsigned_abs() as usize;
            let mut next = vec![0u64; width];
            for (j, slot) in next.iter_mut().enumerate() {
                if j >= step {
                    *slot += layer[j - step];
                }
                if j + step < width {
                    *slot += layer[j + step];
                }
            }
            layer = next;
        }
        layer[(offset + self.target) as usize]
    }
}

impl Recurrence for TargetSum {
    type State = SumState;
    type Value = u64;

    fn root(&self) -> SumState {
        (0, 0)
    }

    fn base_case(&self, &(i, sum): &SumState) -> Option<u64> {
        (i == self.nums.len()).then_some(u64::from(sum == self.target))
    }

    fn dependencies(&self, &(i, sum): &SumState) -> Vec<SumState> {
        let num = self.nums[i];
        vec![(i + 1, sum + num), (i + 1, sum - num)]
    }

    fn combine(&self, _state: &SumState, children: &[u64]) -> u64 {
        children.iter().sum()
    }
}

impl Tabulation for TargetSum {
    fn table_len(&self) -> usize {
        self.nums.len() * self.width()
    }

    fn slot(&self, &(i, sum): &SumState) -> usize {
        i * self.width() + (sum + self.offset()) as usize
    }

    fn scan_order(&self) -> Vec<SumState> {
        let mut order = Vec::new();
        for i in (0..self.nums.len()).rev() {
            let reach = self.prefix_abs[i];
            order.extend((-reach..=reach).map(|sum| (i, sum)));
        }
        order
    }
}
