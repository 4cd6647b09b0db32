//! Matrix-chain multiplication as an interval recurrence.
//!
//! Classic DP:
//! - Given matrices A_0..A_{n-1} where A_i is rows[i] x cols[i] and
//!   cols[i] == rows[i+1],
//! - find the parenthesization minimizing scalar multiplications:
//!   f(i, i) = 0
//!   f(i, j) = min_{k in i..j} f(i, k) + f(k+1, j) + rows[i] * cols[k] * cols[j]
//!
//! Subproblems are not ordered by absolute index, so the tabulated scan walks
//! intervals by increasing gap `j - i`.

use crate::cache::DenseTable;
use crate::engine::{fill_table, lookup};
use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::dense_size;

/// Dimensions of one matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Split decision: A[i..=j] is computed as A[i..=k] x A[k+1..=j].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// Matrix-chain DP instance.
#[derive(Clone, Debug)]
pub struct MatrixChain {
    chain: Vec<Matrix>,
}

impl MatrixChain {
    pub fn new(chain: &[Matrix]) -> DpResult<Self> {
        if chain.is_empty() {
            return Err(DpError::EmptyInput {
                what: "matrix chain",
            });
        }
        for (index, pair) in chain.windows(2).enumerate() {
            if pair[0].cols != pair[1].rows {
                return Err(DpError::IncompatibleDimensions {
                    index: index + 1,
                    rows: pair[1].rows,
                    prev_cols: pair[0].cols,
                });
            }
        }
        dense_size("matrix-chain table", &[chain.len(), chain.len()])?;
        // Every candidate cost is bounded by (n-1) * max_dim^3.
        let max_dim = chain
            .iter()
            .map(|m| m.rows.max(m.cols) as u64)
            .max()
            .unwrap_or(0);
        max_dim
            .checked_pow(3)
            .and_then(|cube| cube.checked_mul(chain.len() as u64 - 1))
            .ok_or(DpError::Overflow {
                what: "multiplication cost",
                bits: 64,
            })?;
        Ok(Self {
            chain: chain.to_vec(),
        })
    }

    /// Build from a dimension vector p[0..=n], where A_i is p[i] x p[i+1].
    pub fn from_dims(p: &[usize]) -> DpResult<Self> {
        if p.len() < 2 {
            return Err(DpError::EmptyInput {
                what: "matrix chain",
            });
        }
        let chain: Vec<Matrix> = p.windows(2).map(|w| Matrix::new(w[0], w[1])).collect();
        Self::new(&chain)
    }

    fn n(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    fn merge_cost(&self, i: usize, k: usize, j: usize) -> u64 {
        (self.chain[i].rows as u64) * (self.chain[k].cols as u64) * (self.chain[j].cols as u64)
    }

    /// Reconstruct the optimal split decisions (first minimizing `k`),
    /// outermost first, from the engine's filled table.
    pub fn splits(&self) -> Vec<Split> {
        let (table, _) = fill_table(self);
        let mut states = Vec::new();
        fn collect(
            problem: &MatrixChain,
            table: &DenseTable<u64>,
            states: &mut Vec<Split>,
            i: usize,
            j: usize,
        ) {
            if i >= j {
                return;
            }
            let k = (i..j)
                .filter_map(|k| {
                    let left = lookup(problem, table, &(i, k))?;
                    let right = lookup(problem, table, &(k + 1, j))?;
                    Some((left + right + problem.merge_cost(i, k, j), k))
                })
                .min_by_key(|&(cost, _)| cost)
                .map_or(i, |(_, k)| k);
            states.push(Split { i, j, k });
            collect(problem, table, states, i, k);
            collect(problem, table, states, k + 1, j);
        }
        collect(self, &table, &mut states, 0, self.n() - 1);
        states
    }

    /// Render the optimal parenthesization, naming matrices A, B, C, ...
    pub fn parenthesize(&self) -> String {
        let splits = self.splits();
        fn render(out: &mut String, splits: &[Split], i: usize, j: usize) {
            if i == j {
                match u8::try_from(i).ok().filter(|&b| b < 26) {
                    Some(b) => out.push(char::from(b'A' + b)),
                    None => out.push_str(&format!("M{i}")),
                }
                return;
            }
            let k = splits
                .iter()
                .find(|s| s.i == i && s.j == j)
                .map_or(i, |s| s.k);
            out.push('(');
            render(out, splits, i, k);
            render(out, splits, k + 1, j);
            out.push(')');
        }
        let mut out = String::new();
        render(&mut out, &splits, 0, self.n() - 1);
        out
    }
}

impl Recurrence for MatrixChain {
    type State = (usize, usize);
    type Value = u64;

    fn root(&self) -> Self::State {
        (0, self.n() - 1)
    }

    fn base_case(&self, &(i, j): &Self::State) -> Option<u64> {
        (i == j).then_some(0)
    }

    fn dependencies(&self, &(i, j): &Self::State) -> Vec<Self::State> {
        let mut deps = Vec::with_capacity(2 * (j - i));
        for k in i..j {
            deps.push((i, k));
            deps.push((k + 1, j));
        }
        deps
    }

    fn combine(&self, &(i, j): &Self::State, children: &[u64]) -> u64 {
        children
            .chunks_exact(2)
            .enumerate()
            .map(|(t, pair)| pair[0] + pair[1] + self.merge_cost(i, i + t, j))
            .min()
            .unwrap_or(0)
    }
}

impl Tabulation for MatrixChain {
    fn table_len(&self) -> usize {
        self.n() * self.n()
    }

    fn slot(&self, &(i, j): &Self::State) -> usize {
        i * self.n() + j
    }

    fn scan_order(&self) -> Vec<Self::State> {
        let n = self.n();
        let mut order = Vec::with_capacity(n * (n - 1) / 2);
        for gap in 1..n {
            order.extend((0..n - gap).map(|i| (i, i + gap)));
        }
        order
    }
}
