//! Maximum-product path through a grid moving only down or right.
//!
//! A negative cell flips which continuation is best, so every state carries
//! both the largest and the smallest product reachable from it:
//! - at the bottom-right corner both are the cell value
//! - elsewhere, multiply the cell value by the max and min of each in-bounds
//!   successor (down, right) and keep the overall max and min of those
//!   four sign-aware products.

use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::{dense_size, rectangular_width};

/// Largest and smallest path product from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathExtremes {
    pub max: i64,
    pub min: i64,
}

impl PathExtremes {
    fn cell(value: i64) -> Self {
        Self {
            max: value,
            min: value,
        }
    }

    /// Extend this path by a cell with value `value`.
    fn extended_by(self, value: i64) -> Self {
        let a = value * self.max;
        let b = value * self.min;
        Self {
            max: a.max(b),
            min: a.min(b),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            max: self.max.max(other.max),
            min: self.min.min(other.min),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MatrixPath {
    grid: Vec<Vec<i64>>,
    width: usize,
}

impl MatrixPath {
    pub fn new(grid: &[Vec<i64>]) -> DpResult<Self> {
        let width = rectangular_width(grid)?;
        dense_size("path table", &[grid.len(), width])?;
        // |product| of any path is at most max|cell|^(rows + cols - 1).
        let path_len = (grid.len() + width - 1) as u32;
        let max_abs = grid
            .iter()
            .flatten()
            .map(|v| v.unsigned_abs())
            .max()
            .unwrap_or(0);
        match max_abs.checked_pow(path_len) {
            Some(bound) if bound <= i64::MAX as u64 => {}
            _ => {
                return Err(DpError::Overflow {
                    what: "path product",
                    bits: 64,
                })
            }
        }
        Ok(Self {
            grid: grid.to_vec(),
            width,
        })
    }

    fn height(&self) -> usize {
        self.grid.len()
    }

    /// Forward tabulation from the top-left corner, tracking the extremes of
    /// every path that *ends* at each cell.
    pub fn forward(&self) -> PathExtremes {
        let (h, w) = (self.height(), self.width);
        let mut dp = vec![vec![PathExtremes::cell(0); w]; h];
        for i in 0..h {
            for j in 0..w {
                let value = self.grid[i][j];
                let from_above = (i > 0).then(|| dp[i - 1][j].extended_by(value));
                let from_left = (j > 0).then(|| dp[i][j - 1].extended_by(value));
                dp[i][j] = match (from_above, from_left) {
                    (Some(a), Some(b)) => a.union(b),
                    (Some(a), None) | (None, Some(a)) => a,
                    (None, None) => PathExtremes::cell(value),
                };
            }
        }
        dp[h - 1][w - 1]
    }
}

impl Recurrence for MatrixPath {
    type State = (usize, usize);
    type Value = PathExtremes;

    fn root(&self) -> Self::State {
        (0, 0)
    }

    fn base_case(&self, &(i, j): &Self::State) -> Option<PathExtremes> {
        (i + 1 == self.height() && j + 1 == self.width).then(|| PathExtremes::cell(self.grid[i][j]))
    }

    fn dependencies(&self, &(i, j): &Self::State) -> Vec<Self::State> {
        let mut deps = Vec::with_capacity(2);
        if i + 1 < self.height() {
            deps.push((i + 1, j));
        }
        if j + 1 < self.width {
            deps.push((i, j + 1));
        }
        deps
    }

    fn combine(&self, &(i, j): &Self::State, children: &[PathExtremes]) -> PathExtremes {
        let value = self.grid[i][j];
        children
            .iter()
            .map(|child| child.extended_by(value))
            .reduce(PathExtremes::union)
            .unwrap_or(PathExtremes::cell(value))
    }
}

impl Tabulation for MatrixPath {
    fn table_len(&self) -> usize {
        self.height() * self.width
    }

    fn slot(&self, &(i, j): &Self::State) -> usize {
        i * self.width + j
    }

    fn scan_order(&self) -> Vec<Self::State> {
        let (h, w) = (self.height(), self.width);
        let mut order = Vec::with_capacity(h * w);
        for i in (0..h).rev() {
            for j in (0..w).rev() {
                if i + 1 != h || j + 1 != w {
                    order.push((i, j));
                }
            }
        }
        order
    }
}
