//! Largest square sub-matrix made only of `true` cells.
//!
//! f(i, j) is the side of the largest all-true square whose top-left corner
//! is (i, j):
//! - f(i, j) = 0 if the cell is false
//! - f(i, j) = 1 on the last row or column (the missing neighbours count as 0)
//! - f(i, j) = 1 + min(f(i+1, j), f(i, j+1), f(i+1, j+1)) otherwise
//!
//! The answer is the max over all cells, modelled as the root state
//! [`SquareState::Whole`].

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::{dense_size, rectangular_width};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareState {
    /// Max over every cell of the grid.
    Whole,
    /// Square anchored at (row, col).
    Cell(usize, usize),
}

#[derive(Clone, Debug)]
pub struct SquareSubmatrix {
    grid: Vec<Vec<bool>>,
    width: usize,
}

impl SquareSubmatrix {
    pub fn new(grid: &[Vec<bool>]) -> DpResult<Self> {
        let width = rectangular_width(grid)?;
        // one slot per cell plus the aggregate root
        dense_size(
            "square table",
            &[grid.len().saturating_mul(width).saturating_add(1)],
        )?;
        Ok(Self {
            grid: grid.to_vec(),
            width,
        })
    }

    fn height(&self) -> usize {
        self.grid.len()
    }
}

impl Recurrence for SquareSubmatrix {
    type State = SquareState;
    type Value = usize;

    fn root(&self) -> SquareState {
        SquareState::Whole
    }

    fn base_case(&self, state: &SquareState) -> Option<usize> {
        match *state {
            SquareState::Whole => None,
            SquareState::Cell(i, j) if !self.grid[i][j] => Some(0),
            SquareState::Cell(i, j) if i + 1 == self.height() || j + 1 == self.width => Some(1),
            SquareState::Cell(..) => None,
        }
    }

    fn dependencies(&self, state: &SquareState) -> Vec<SquareState> {
        match *state {
            SquareState::Whole => (0..self.height())
                .flat_map(|i| (0..self.width).map(move |j| SquareState::Cell(i, j)))
                .collect(),
            SquareState::Cell(i, j) => vec![
                SquareState::Cell(i + 1, j),
                SquareState::Cell(i, j + 1),
                SquareState::Cell(i + 1, j + 1),
            ],
        }
    }

    fn combine(&self, state: &SquareState, children: &[usize]) -> usize {
        match state {
            SquareState::Whole => children.iter().copied().max().unwrap_or(0),
            SquareState::Cell(..) => 1 + children.iter().copied().min().unwrap_or(0),
        }
    }
}

impl Tabulation for SquareSubmatrix {
    fn table_len(&self) -> usize {
        self.height() * self.width + 1
    }

    fn slot(&self, state: &SquareState) -> usize {
        match *state {
            SquareState::Whole => self.height() * self.width,
            SquareState::Cell(i, j) => i * self.width + j,
        }
    }

    fn scan_order(&self) -> Vec<SquareState> {
        let mut order: Vec<SquareState> = (0..self.height())
            .rev()
            .flat_map(|i| (0..self.width).rev().map(move |j| SquareState::Cell(i, j)))
            .filter(|state| self.base_case(state).is_none())
            .collect();
        order.push(SquareState::Whole);
        order
    }
}
