//! Generic recurrence evaluation engine.
//!
//! This module implements the three evaluation strategies:
//! 1. Exhaustive: direct recursive expansion with no cache. Exponential, but
//!    structurally the recurrence itself, so it serves as the oracle.
//! 2. Memoized: the same recursion, consulting a per-call [`MemoCache`]
//!    before expanding a state.
//! 3. Tabulated: no recursion; a [`DenseTable`] is filled in the scan order
//!    supplied by [`Tabulation`].
//!
//! The engine is completely generic over implementations of [`Recurrence`].
//! All strategies run synchronously on the calling thread. Recursion depth of
//! the first two is bounded by the longest dependency chain of the instance.

use std::fmt;
use std::str::FromStr;

use crate::cache::{DenseTable, MemoCache};
use crate::error::DpError;
use crate::traits::{Recurrence, Tabulation};

/// Which evaluator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    Exhaustive,
    #[default]
    Memoized,
    Tabulated,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Exhaustive,
        Strategy::Memoized,
        Strategy::Tabulated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(Strategy::Exhaustive),
            "memoized" | "top-down" => Ok(Strategy::Memoized),
            "tabulated" | "bottom-up" => Ok(Strategy::Tabulated),
            other => Err(DpError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Counters collected during one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Number of `combine` calls, i.e. non-base states expanded.
    pub expansions: usize,
    /// Number of reads served from the cache or table.
    pub cache_hits: usize,
}

/// Recurrence evaluation engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use dp_catalog::{DpEngine, Strategy, problems::egg_drop::EggDrop};
///
/// let problem = EggDrop::new(2, 10).unwrap();
/// let engine = DpEngine::with_strategy(problem, Strategy::Tabulated);
/// let (drops, stats) = engine.run();
/// assert_eq!(drops, 4);
/// assert!(stats.expansions > 0);
/// ```
pub struct DpEngine<P: Recurrence> {
    problem: P,
    strategy: Strategy,
}

impl<P: Recurrence> DpEngine<P> {
    /// Create a new engine using the memoized strategy.
    pub fn new(problem: P) -> Self {
        Self::with_strategy(problem, Strategy::default())
    }

    /// Create a new engine with an explicit strategy.
    pub fn with_strategy(problem: P, strategy: Strategy) -> Self {
        Self { problem, strategy }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Consume the engine and hand the problem back.
    pub fn into_problem(self) -> P {
        self.problem
    }
}

impl<P: Tabulation> DpEngine<P> {
    /// Evaluate the root state with the configured strategy.
    pub fn run(&self) -> (P::Value, EvalStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run", strategy = self.strategy.as_str());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (value, stats) = match self.strategy {
            Strategy::Exhaustive => exhaustive(&self.problem),
            Strategy::Memoized => memoized(&self.problem),
            Strategy::Tabulated => tabulated(&self.problem),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            expansions = stats.expansions,
            cache_hits = stats.cache_hits,
            "evaluation finished"
        );

        (value, stats)
    }
}

/// Evaluate the root by full recursive expansion, without caching.
pub fn exhaustive<P: Recurrence>(problem: &P) -> (P::Value, EvalStats) {
    let mut stats = EvalStats::default();
    let value = expand(problem, &problem.root(), &mut stats);
    (value, stats)
}

fn expand<P: Recurrence>(problem: &P, state: &P::State, stats: &mut EvalStats) -> P::Value {
    if let Some(value) = problem.base_case(state) {
        return value;
    }
    let children: Vec<P::Value> = problem
        .dependencies(state)
        .iter()
        .map(|child| expand(problem, child, stats))
        .collect();
    stats.expansions += 1;
    problem.combine(state, &children)
}

/// Evaluate the root top-down, computing each distinct state at most once.
pub fn memoized<P: Recurrence>(problem: &P) -> (P::Value, EvalStats) {
    let mut cache = MemoCache::new();
    let mut stats = EvalStats::default();
    let value = expand_cached(problem, &problem.root(), &mut cache, &mut stats);
    debug_assert_eq!(cache.len(), stats.expansions);
    (value, stats)
}

fn expand_cached<P: Recurrence>(
    problem: &P,
    state: &P::State,
    cache: &mut MemoCache<P::State, P::Value>,
    stats: &mut EvalStats,
) -> P::Value {
    if let Some(value) = problem.base_case(state) {
        return value;
    }
    if let Some(value) = cache.get(state) {
        stats.cache_hits += 1;
        return value.clone();
    }
    let children: Vec<P::Value> = problem
        .dependencies(state)
        .iter()
        .map(|child| expand_cached(problem, child, cache, stats))
        .collect();
    stats.expansions += 1;
    let value = problem.combine(state, &children);
    cache.insert(state.clone(), value.clone());
    value
}

/// Evaluate the root bottom-up by filling a dense table in scan order.
///
/// # Panics
/// Panics if the problem's scan order reads a state before filling it or
/// never fills the root. Both indicate a defect in the `Tabulation` impl.
pub fn tabulated<P: Tabulation>(problem: &P) -> (P::Value, EvalStats) {
    let root = problem.root();
    if let Some(value) = problem.base_case(&root) {
        return (value, EvalStats::default());
    }

    let (table, stats) = fill_table(problem);
    match table.get(problem.slot(&root)) {
        Some(value) => (value.clone(), stats),
        None => panic!("scan order never filled root state {root:?}"),
    }
}

/// Fill every state of the scan order and return the whole table.
///
/// Callers that reconstruct decisions (argmins, split points) read their
/// values back through [`lookup`].
///
/// # Panics
/// Panics if the scan order reads a state before filling it.
pub fn fill_table<P: Tabulation>(problem: &P) -> (DenseTable<P::Value>, EvalStats) {
    let mut table = DenseTable::new(problem.table_len());
    let mut stats = EvalStats::default();
    let order = problem.scan_order();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("tabulate", slots = table.len(), states = order.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for state in order {
        let children: Vec<P::Value> = problem
            .dependencies(&state)
            .iter()
            .map(|child| read_filled(problem, &table, child, &mut stats))
            .collect();
        stats.expansions += 1;
        let value = problem.combine(&state, &children);
        table.fill(problem.slot(&state), value);
    }
    (table, stats)
}

/// Value of `state` in a table from [`fill_table`], or its base case.
/// `None` if the scan order never reached the state.
pub fn lookup<P: Tabulation>(
    problem: &P,
    table: &DenseTable<P::Value>,
    state: &P::State,
) -> Option<P::Value> {
    problem
        .base_case(state)
        .or_else(|| table.get(problem.slot(state)).cloned())
}

fn read_filled<P: Tabulation>(
    problem: &P,
    table: &DenseTable<P::Value>,
    state: &P::State,
    stats: &mut EvalStats,
) -> P::Value {
    if let Some(value) = problem.base_case(state) {
        return value;
    }
    match table.get(problem.slot(state)) {
        Some(value) => {
            stats.cache_hits += 1;
            value.clone()
        }
        None => panic!("state {state:?} read before the scan order filled it"),
    }
}
