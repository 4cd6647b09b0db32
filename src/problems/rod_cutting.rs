//! Rod cutting: the best total price for a rod of length L when a piece of
//! length k sells for prices[k-1].
//!
//! - f(0) = 0
//! - f(L) = max_{k in 1..=L} prices[k-1] + f(L - k)

use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::dense_size;

#[derive(Clone, Debug)]
pub struct RodCutting {
    prices: Vec<u64>,
    length: usize,
}

impl RodCutting {
    pub fn new(prices: &[u64], length: usize) -> DpResult<Self> {
        if prices.len() < length {
            return Err(DpError::MissingPrices {
                length,
                available: prices.len(),
            });
        }
        dense_size("rod table", &[length.saturating_add(1)])?;
        let max_price = prices[..length].iter().copied().max().unwrap_or(0);
        max_price
            .checked_mul(length as u64)
            .ok_or(DpError::Overflow {
                what: "rod value",
                bits: 64,
            })?;
        Ok(Self {
            prices: prices[..length].to_vec(),
            length,
        })
    }
}

impl Recurrence for RodCutting {
    type State = usize;
    type Value = u64;

    fn root(&self) -> usize {
        self.length
    }

    fn base_case(&self, &length: &usize) -> Option<u64> {
        (length == 0).then_some(0)
    }

    fn dependencies(&self, &length: &usize) -> Vec<usize> {
        (1..=length).map(|cut| length - cut).collect()
    }

    fn combine(&self, _state: &usize, children: &[u64]) -> u64 {
        children
            .iter()
            .zip(&self.prices)
            .map(|(rest, price)| price + rest)
            .max()
            .unwrap_or(0)
    }
}

impl Tabulation for RodCutting {
    fn table_len(&self) -> usize {
        self.length + 1
    }

    fn slot(&self, &length: &usize) -> usize {
        length
    }

    fn scan_order(&self) -> Vec<usize> {
        (1..=self.length).collect()
    }
}
