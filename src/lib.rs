//! Optimal-substructure recurrences, three ways.
//!
//! This crate provides a generic engine that evaluates any finite-state
//! recurrence with three interchangeable strategies:
//! exhaustive recursion, memoized top-down recursion, and bottom-up
//! tabulation. The strategies must agree exactly on every valid input, and
//! the [`harness`] module checks that they do.
//!
//! ## Core idea
//! 1. Model the subproblem as a *state*: a tuple of bounded coordinates.
//! 2. Implement [`Recurrence`] (root, base cases, children, aggregation) and
//!    [`Tabulation`] (dense slot layout, dependency-respecting scan order).
//! 3. Let [`DpEngine`] evaluate the root with the [`Strategy`] of your choice.
//!
//! Each evaluation owns its cache for the duration of the call; nothing is
//! shared between calls or between problems.
//!
//! ## Quick start
//! ```
//! use dp_catalog::{harness::cross_validate, problems::matrix_chain::MatrixChain};
//! use dp_catalog::{DpEngine, Strategy};
//!
//! let problem = MatrixChain::from_dims(&[40, 20, 30, 10, 30]).unwrap();
//! let (cost, _stats) = DpEngine::with_strategy(problem.clone(), Strategy::Tabulated).run();
//! assert_eq!(cost, 26000);
//! assert_eq!(cross_validate(&problem), Ok(26000));
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains instantiations for:
//! - Subset-combination counting, Fibonacci and 2×N domino tiling
//! - Egg-drop minimax
//! - Knight-survival probability
//! - Longest increasing subsequence (length and listing)
//! - Target sum, 0/1 knapsack, making change and rod cutting
//! - Matrix-chain multiplication
//! - Max-product grid path and largest true square
//!
//! Invalid inputs are rejected when the state space is built, with a
//! [`DpError`] naming the violated precondition.

pub mod builder;
pub mod cache;
pub mod engine;
pub mod error;
pub mod harness;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::{DpEngine, EvalStats, Strategy};
pub use crate::error::{DpError, DpResult};
pub use crate::traits::{Recurrence, Tabulation};
