//! Core trait definitions for finite-state optimal-substructure recurrences.
//!
//! To evaluate a recurrence with the engine, implement [`Recurrence`] for a
//! struct that captures one problem instance (sequences, weights, board size).
//! That struct is the *state space*: it fixes the coordinate bounds once at
//! construction and is never mutated afterwards.
//!
//! The trait encodes three pieces:
//! - State space: which coordinates identify a subproblem and which state is the root.
//! - Base-case policy: states answered in closed form without recursing.
//! - Transition + aggregation: the child states of a state, and how their
//!   values combine (sum, min, max, minimax).
//!
//! [`Tabulation`] adds what a bottom-up evaluator needs on top: a dense slot
//! for every non-base state and a scan order in which every state's
//! dependencies are filled before the state itself.

use std::fmt::Debug;
use std::hash::Hash;

/// A recurrence over a finite, well-founded state space.
///
/// Semantics:
/// - `root()` is the state whose value answers the problem.
/// - `base_case(s)` returns `Some(v)` for terminal/boundary states; the
///   evaluators never call `dependencies` or `combine` on those.
/// - For any other state, `dependencies(s)` lists the child states and
///   `combine(s, values)` aggregates their values, where `values[k]` is the
///   value of `dependencies(s)[k]`.
///
/// Every dependency must be strictly smaller than its parent under some
/// well-founded measure (index distance, remaining floors, interval width,
/// moves remaining). A cycle would make the exhaustive evaluator loop and the
/// memoized one overflow the stack.
pub trait Recurrence {
    /// Coordinates identifying one subproblem.
    type State: Clone + Eq + Hash + Debug;

    /// Result type of a subproblem (count, cost, probability, sequence).
    type Value: Clone + Debug;

    /// The state whose value is the answer for this instance.
    fn root(&self) -> Self::State;

    /// Closed-form value for terminal states, `None` otherwise.
    fn base_case(&self, state: &Self::State) -> Option<Self::Value>;

    /// Child states of a non-base state, in a fixed order.
    fn dependencies(&self, state: &Self::State) -> Vec<Self::State>;

    /// Aggregate the children's values into the value of `state`.
    ///
    /// `children` is aligned with `dependencies(state)`.
    fn combine(&self, state: &Self::State, children: &[Self::Value]) -> Self::Value;
}

/// Dense layout and fill order for bottom-up evaluation.
///
/// Requirements:
/// - `slot` maps every non-base state reachable from the root to a distinct
///   index below `table_len()`.
/// - `scan_order` lists non-base states such that each state's non-base
///   dependencies appear earlier. It must include the root unless the root is
///   itself a base case.
pub trait Tabulation: Recurrence {
    /// Number of slots in the dense table.
    fn table_len(&self) -> usize;

    /// Slot index of a non-base state.
    fn slot(&self, state: &Self::State) -> usize;

    /// Dependency-respecting scan order over non-base states.
    fn scan_order(&self) -> Vec<Self::State>;
}
