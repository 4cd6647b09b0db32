//! Fewest coins adding up to an amount.
//!
//! - f(0) = 0
//! - f(n) = 1 + min_{c in coins, c <= n} f(n - c)
//!
//! The coin set must contain a unit coin, which makes every amount reachable
//! and keeps the minimum well defined.

use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::dense_size;

#[derive(Clone, Debug)]
pub struct MakingChange {
    coins: Vec<usize>,
    amount: usize,
}

impl MakingChange {
    pub fn new(coins: &[usize], amount: usize) -> DpResult<Self> {
        if coins.is_empty() {
            return Err(DpError::InvalidCoins("no denominations"));
        }
        if coins.contains(&0) {
            return Err(DpError::InvalidCoins("zero denomination"));
        }
        if !coins.contains(&1) {
            return Err(DpError::InvalidCoins("no unit denomination"));
        }
        dense_size("change table", &[amount.saturating_add(1)])?;
        Ok(Self {
            coins: coins.to_vec(),
            amount,
        })
    }
}

impl Recurrence for MakingChange {
    type State = usize;
    type Value = u32;

    fn root(&self) -> usize {
        self.amount
    }

    fn base_case(&self, &n: &usize) -> Option<u32> {
        (n == 0).then_some(0)
    }

    fn dependencies(&self, &n: &usize) -> Vec<usize> {
        self.coins
            .iter()
            .filter(|&&coin| coin <= n)
            .map(|&coin| n - coin)
            .collect()
    }

    fn combine(&self, _state: &usize, children: &[u32]) -> u32 {
        // A unit coin always applies, so `children` is never empty.
        children.iter().copied().min().unwrap_or(0) + 1
    }
}

impl Tabulation for MakingChange {
    fn table_len(&self) -> usize {
        self.amount + 1
    }

    fn slot(&self, &n: &usize) -> usize {
        n
    }

    fn scan_order(&self) -> Vec<usize> {
        (1..=self.amount).collect()
    }
}
