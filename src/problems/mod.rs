//! Problem instantiations of the recurrence engine.
//!
//! Each module defines a state space implementing
//! [`Recurrence`](crate::traits::Recurrence) and
//! [`Tabulation`](crate::traits::Tabulation), so every strategy of the
//! engine applies to it. Where the recurrence only reads the previous layer,
//! the state space also offers a `compact()` space-optimized tabulation.
//!
//! - [`array_combinations`]            : 2^n include/exclude counting.
//! - [`egg_drop`]                      : minimax drop count.
//! - [`fibonacci`] / [`floor_tiling`]  : Fibonacci-shaped counting.
//! - [`knight_probability`]            : grid probability propagation.
//! - [`longest_increasing_subsequence`]: length and reconstruction.
//! - [`target_sum`] / [`knapsack`]     : 0/1 selection over a running accumulator.
//! - [`matrix_chain`]                  : interval partitioning.
//! - [`matrix_path`]                   : sign-aware max-product path.
//! - [`square_submatrix`]              : largest all-true square.
//! - [`making_change`] / [`rod_cutting`]: unbounded selection.

pub mod array_combinations;
pub mod egg_drop;
pub mod fibonacci;
pub mod floor_tiling;
pub mod knapsack;
pub mod knight_probability;
pub mod longest_increasing_subsequence;
pub mod making_change;
pub mod matrix_chain;
pub mod matrix_path;
pub mod rod_cutting;
pub mod square_submatrix;
pub mod target_sum;
