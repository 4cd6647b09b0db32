//! Probability that a knight stays on an H×W board for a number of moves.
//!
//! Each move picks one of the eight knight displacements uniformly; once the
//! knight leaves the board it never returns. Top-down:
//! - f(r, c, m) = 0 if (r, c) is off the board
//! - f(r, c, 0) = 1 on the board
//! - f(r, c, m) = (Σ_offsets f(r+dr, c+dc, m-1)) / 8
//!
//! Off-board children contribute 0 and the divisor is always 8.
//!
//! The bottom-up formulation runs forward instead: g(m, r, c) is the
//! probability that a knight starting on (r, c) survives m moves, computed from
//! layer m-1 by summing the in-bounds predecessors and dividing once. Because
//! the displacement set is symmetric and the summation order is the same in
//! every evaluator, all of them produce bit-identical results.

use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::{dense_size, KNIGHT_OFFSETS};

/// (row, col, moves remaining). Coordinates are signed so off-board children
/// can be represented.
pub type KnightState = (i64, i64, usize);

#[derive(Clone, Debug)]
pub struct KnightProbability {
    height: usize,
    width: usize,
    row: usize,
    col: usize,
    moves: usize,
    offsets: [(i64, i64); 8],
}

impl KnightProbability {
    pub fn new(height: usize, width: usize, row: usize, col: usize, moves: usize) -> DpResult<Self> {
        Self::with_offsets(height, width, row, col, moves, KNIGHT_OFFSETS)
    }

    /// Same problem with a custom set of eight displacements.
    pub fn with_offsets(
        height: usize,
        width: usize,
        row: usize,
        col: usize,
        moves: usize,
        offsets: [(i64, i64); 8],
    ) -> DpResult<Self> {
        if height == 0 {
            return Err(DpError::ZeroDimension {
                what: "board height",
            });
        }
        if width == 0 {
            return Err(DpError::ZeroDimension { what: "board width" });
        }
        if row >= height || col >= width {
            return Err(DpError::StartOffBoard {
                row,
                col,
                height,
                width,
            });
        }
        dense_size("knight table", &[height, width, moves.saturating_add(1)])?;
        Ok(Self {
            height,
            width,
            row,
            col,
            moves,
            offsets,
        })
    }

    #[inline]
    fn on_board(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// One forward step: survival probabilities after one more move, given
    /// the probabilities `prev` of surviving the remaining moves from each cell.
    fn step(&self, prev: &[f64]) -> Vec<f64> {
        let mut next = vec![0.0; self.height * self.width];
        for r in 0..self.height {
            for c in 0..self.width {
                let mut prob = 0.0;
                for &(dr, dc) in &self.offsets {
                    let (sr, sc) = (r as i64 + dr, c as i64 + dc);
                    if self.on_board(sr, sc) {
                        prob += prev[sr as usize * self.width + sc as usize];
                    }
                }
                next[r * self.width + c] = prob / self.offsets.len() as f64;
            }
        }
        next
    }

    /// Forward tabulation over the full (moves+1)×H×W table.
    pub fn forward(&self) -> f64 {
        let cells = self.height * self.width;
        let mut table = Vec::with_capacity(self.moves + 1);
        table.push(vec![1.0; cells]);
        for m in 1..=self.moves {
            let next = self.step(&table[m - 1]);
            table.push(next);
        }
        table[self.moves][self.row * self.width + self.col]
    }

    /// Space-optimized forward tabulation keeping two board layers.
    pub fn compact(&self) -> f64 {
        let mut layer = vec![1.0; self.height * self.width];
        for _ in 0..self.moves {
            layer = self.step(&layer);
        }
        layer[self.row * self.width + self.col]
    }
}

impl Recurrence for KnightProbability {
    type State = KnightState;
    type Value = f64;

    fn root(&self) -> KnightState {
        (self.row as i64, self.col as i64, self.moves)
    }

    fn base_case(&self, &(row, col, moves): &KnightState) -> Option<f64> {
        if !self.on_board(row, col) {
            Some(0.0)
        } else if moves == 0 {
            Some(1.0)
        } else {
            None
        }
    }

    fn dependencies(&self, &(row, col, moves): &KnightState) -> Vec<KnightState> {
        self.offsets
            .iter()
            .map(|&(dr, dc)| (row + dr, col + dc, moves - 1))
            .collect()
    }

    fn combine(&self, _state: &KnightState, children: &[f64]) -> f64 {
        let total = children.iter().fold(0.0, |acc, p| acc + p);
        total / self.offsets.len() as f64
    }
}

impl Tabulation for KnightProbability {
    fn table_len(&self) -> usize {
        self.moves * self.height * self.width
    }

    fn slot(&self, &(row, col, moves): &KnightState) -> usize {
        ((moves - 1) * self.height + row as usize) * self.width + col as usize
    }

    fn scan_order(&self) -> Vec<KnightState> {
        let mut order = Vec::with_capacity(self.table_len());
        for moves in 1..=self.moves {
            for row in 0..self.height as i64 {
                for col in 0..self.width as i64 {
                    order.push((row, col, moves));
                }
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{memoized, tabulated};
    use crate::harness::cross_validate_with;

    fn check(height: usize, width: usize, row: usize, col: usize, moves: usize) -> f64 {
        let problem = KnightProbability::new(height, width, row, col, moves).unwrap();
        assert_eq!(problem.forward(), problem.compact());
        cross_validate_with(&problem, problem.compact()).unwrap()
    }

    #[test]
    fn reference_probabilities() {
        assert_eq!(check(3, 3, 0, 0, 0), 1.0);
        assert_eq!(check(3, 3, 0, 0, 1), 0.25);
        assert_eq!(check(3, 3, 0, 0, 2), 0.0625);
        assert_eq!(check(3, 3, 0, 0, 5), 0.0009765625);
        assert_eq!(check(2, 3, 0, 0, 2), 0.015625);
    }

    #[test]
    fn single_square_board_loses_knight() {
        assert_eq!(check(1, 1, 0, 0, 1), 0.0);
        assert_eq!(check(1, 1, 0, 0, 0), 1.0);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let problem = KnightProbability::new(8, 8, 3, 4, 6).unwrap();
        let (memo, _) = memoized(&problem);
        let (table, _) = tabulated(&problem);
        assert_eq!(memo, table);
        assert_eq!(memo, problem.forward());
        assert!((0.0..=1.0).contains(&memo));
    }

    #[test]
    fn rejects_bad_boards() {
        assert_eq!(
            KnightProbability::new(0, 3, 0, 0, 1).unwrap_err(),
            DpError::ZeroDimension {
                what: "board height"
            }
        );
        assert!(matches!(
            KnightProbability::new(3, 3, 3, 0, 1),
            Err(DpError::StartOffBoard { row: 3, .. })
        ));
    }

    #[test]
    fn rejects_boards_beyond_the_table() {
        assert!(matches!(
            KnightProbability::new(1 << 13, 1 << 13, 0, 0, 0),
            Err(DpError::TooLarge { what: "knight table", .. })
        ));
        assert!(matches!(
            KnightProbability::new(8, 8, 0, 0, usize::MAX),
            Err(DpError::TooLarge { .. })
        ));
    }

    #[test]
    fn custom_offsets_are_respected() {
        // A "king-like" mover along one axis, doubled to eight offsets, on a 1×3 strip.
        let offsets = [(0, 1), (0, -1), (0, 1), (0, -1), (0, 1), (0, -1), (0, 1), (0, -1)];
        let problem = KnightProbability::with_offsets(1, 3, 0, 1, 1, offsets).unwrap();
        assert_eq!(cross_validate_with(&problem, problem.compact()), Ok(1.0));
        let problem = KnightProbability::with_offsets(1, 3, 0, 0, 1, offsets).unwrap();
        assert_eq!(cross_validate_with(&problem, problem.compact()), Ok(0.5));
    }
}
