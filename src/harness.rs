//! Equivalence harness.
//!
//! There is no external ground truth for most recurrences, so correctness is
//! established by cross-validation: the exhaustive expansion is the oracle,
//! and every other evaluator must reproduce its value exactly. Floating-point
//! values are compared with `==` as well; every evaluator sums children in
//! the same fixed order, so the rounding is identical.

use thiserror::Error;

use crate::engine::{exhaustive, memoized, tabulated, EvalStats, Strategy};
use crate::traits::Tabulation;

/// One evaluator disagreeing with the exhaustive oracle.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{evaluator} returned {actual:?} but exhaustive returned {expected:?}")]
pub struct Disagreement<V: std::fmt::Debug> {
    pub evaluator: &'static str,
    pub expected: V,
    pub actual: V,
}

/// Run every strategy on `problem`, in [`Strategy::ALL`] order.
pub fn run_all<P: Tabulation>(problem: &P) -> Vec<(Strategy, P::Value, EvalStats)> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let (value, stats) = match strategy {
                Strategy::Exhaustive => exhaustive(problem),
                Strategy::Memoized => memoized(problem),
                Strategy::Tabulated => tabulated(problem),
            };
            (strategy, value, stats)
        })
        .collect()
}

/// Check that memoized and tabulated evaluation agree with exhaustive
/// expansion, returning the agreed value.
pub fn cross_validate<P>(problem: &P) -> Result<P::Value, Disagreement<P::Value>>
where
    P: Tabulation,
    P::Value: PartialEq,
{
    let (expected, _) = exhaustive(problem);
    let candidates = [
        (Strategy::Memoized, memoized(problem).0),
        (Strategy::Tabulated, tabulated(problem).0),
    ];
    for (strategy, actual) in candidates {
        if actual != expected {
            return Err(Disagreement {
                evaluator: strategy.as_str(),
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}

/// Like [`cross_validate`], additionally checking a space-optimized result.
pub fn cross_validate_with<P>(
    problem: &P,
    compact: P::Value,
) -> Result<P::Value, Disagreement<P::Value>>
where
    P: Tabulation,
    P::Value: PartialEq,
{
    let expected = cross_validate(problem)?;
    if compact != expected {
        return Err(Disagreement {
            evaluator: "compact",
            expected,
            actual: compact,
        });
    }
    Ok(expected)
}
