//! Longest strictly increasing subsequence.
//!
//! Two state spaces over the same input:
//! - [`LongestIncreasing`] computes the length. State `Some(i)` is the
//!   longest increasing subsequence *ending* at index `i`:
//!   len(i) = 1 + max(0, max_{j<i, a[j]<a[i]} len(j)).
//!   The answer is the max over all `i`, modelled as the root state `None`
//!   whose children are every ending index.
//! - [`LongestIncreasingListing`] reconstructs one optimal subsequence. State
//!   `(i, prev)` scans forward from index `i` where `prev` is the index of the
//!   last kept element; its value is the watermark the next kept element must
//!   exceed. At each index the longer of "skip a[i]" and "take a[i] plus the
//!   best continuation" is kept, preferring "take" on ties.

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::dense_size;

/// State space for the length of the longest increasing subsequence.
#[derive(Clone, Debug)]
pub struct LongestIncreasing {
    values: Vec<i64>,
}

impl LongestIncreasing {
    pub fn new(values: &[i64]) -> DpResult<Self> {
        Ok(Self {
            values: values.to_vec(),
        })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl Recurrence for LongestIncreasing {
    /// `None` is the aggregate root, `Some(i)` the subsequence ending at `i`.
    type State = Option<usize>;
    type Value = usize;

    fn root(&self) -> Self::State {
        None
    }

    fn base_case(&self, _state: &Self::State) -> Option<usize> {
        None
    }

    fn dependencies(&self, state: &Self::State) -> Vec<Self::State> {
        match *state {
            None => (0..self.values.len()).map(Some).collect(),
            Some(i) => (0..i)
                .filter(|&j| self.values[j] < self.values[i])
                .map(Some)
                .collect(),
        }
    }

    fn combine(&self, state: &Self::State, children: &[usize]) -> usize {
        let best = children.iter().copied().max().unwrap_or(0);
        match state {
            None => best,
            Some(_) => best + 1,
        }
    }
}

impl Tabulation for LongestIncreasing {
    fn table_len(&self) -> usize {
        self.values.len() + 1
    }

    fn slot(&self, state: &Self::State) -> usize {
        state.unwrap_or(self.values.len())
    }

    fn scan_order(&self) -> Vec<Self::State> {
        (0..self.values.len())
            .map(Some)
            .chain(std::iter::once(None))
            .collect()
    }
}

/// State space reconstructing one longest increasing subsequence.
#[derive(Clone, Debug)]
pub struct LongestIncreasingListing {
    values: Vec<i64>,
}

/// (next index to consider, index of the last kept element).
pub type ListingState = (usize, Option<usize>);

impl LongestIncreasingListing {
    /// The (index, last kept) table has n x (n + 1) slots and must fit in
    /// [`MAX_TABLE`](crate::utils::MAX_TABLE).
    pub fn new(values: &[i64]) -> DpResult<Self> {
        dense_size("listing table", &[values.len(), values.len() + 1])?;
        Ok(Self {
            values: values.to_vec(),
        })
    }

    #[inline]
    fn may_take(&self, i: usize, prev: Option<usize>) -> bool {
        prev.is_none_or(|p| self.values[p] < self.values[i])
    }
}

impl Recurrence for LongestIncreasingListing {
    type State = ListingState;
    type Value = Vec<i64>;

    fn root(&self) -> ListingState {
        (0, None)
    }

    fn base_case(&self, &(i, _): &ListingState) -> Option<Vec<i64>> {
        (i == self.values.len()).then(Vec::new)
    }

    fn dependencies(&self, &(i, prev): &ListingState) -> Vec<ListingState> {
        let mut deps = vec![(i + 1, prev)];
        if self.may_take(i, prev) {
            deps.push((i + 1, Some(i)));
        }
        deps
    }

    fn combine(&self, &(i, _): &ListingState, children: &[Vec<i64>]) -> Vec<i64> {
        let skip = &children[0];
        match children.get(1) {
            Some(rest) if rest.len() + 1 >= skip.len() => {
                let mut take = Vec::with_capacity(rest.len() + 1);
                take.push(self.values[i]);
                take.extend_from_slice(rest);
                take
            }
            _ => skip.clone(),
        }
    }
}

impl Tabulation for LongestIncreasingListing {
    fn table_len(&self) -> usize {
        self.values.len() * (self.values.len() + 1)
    }

    fn slot(&self, &(i, prev): &ListingState) -> usize {
        let n = self.values.len();
        i * (n + 1) + prev.unwrap_or(n)
    }

    fn scan_order(&self) -> Vec<ListingState> {
        let mut order = Vec::with_capacity(self.table_len());
        for i in (0..self.values.len()).rev() {
            order.push((i, None));
            order.extend((0..i).map(|p| (i, Some(p))));
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{memoized, tabulated};
    use crate::harness::cross_validate;

    fn is_strictly_increasing(seq: &[i64]) -> bool {
        seq.windows(2).all(|w| w[0] < w[1])
    }

    fn is_subsequence(seq: &[i64], of: &[i64]) -> bool {
        let mut it = of.iter();
        seq.iter().all(|x| it.any(|y| y == x))
    }

    #[test]
    fn reference_lengths() {
        for (values, expected) in [
            (vec![1], 1usize),
            (vec![5, 4, 3, 2, 1], 1),
            (vec![1, 4, 2, 3, 5], 4),
            (vec![10, 22, 9, 33, 21, 50, 41, 60], 5),
            (vec![], 0),
        ] {
            let problem = LongestIncreasing::new(&values).unwrap();
            assert_eq!(cross_validate(&problem), Ok(expected), "{values:?}");
        }
    }

    #[test]
    fn listing_reconstructs_an_optimal_subsequence() {
        let values = [10, 22, 9, 33, 21, 50, 41, 60];
        let problem = LongestIncreasingListing::new(&values).unwrap();
        let seq = cross_validate(&problem).unwrap();
        assert_eq!(seq, vec![10, 22, 33, 50, 60]);

        let values = [1, 4, 2, 3, 5];
        let seq = tabulated(&LongestIncreasingListing::new(&values).unwrap()).0;
        assert_eq!(seq, vec![1, 2, 3, 5]);
    }

    #[test]
    fn listing_length_matches_length_recurrence() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
        let length = memoized(&LongestIncreasing::new(&values).unwrap()).0;
        let seq = memoized(&LongestIncreasingListing::new(&values).unwrap()).0;
        assert_eq!(seq.len(), length);
        assert!(is_strictly_increasing(&seq));
        assert!(is_subsequence(&seq, &values));
    }

    #[test]
    fn duplicates_do_not_extend() {
        let values = [2, 2, 2];
        assert_eq!(cross_validate(&LongestIncreasing::new(&values).unwrap()), Ok(1));
        assert_eq!(
            cross_validate(&LongestIncreasingListing::new(&values).unwrap()),
            Ok(vec![2])
        );
    }

    #[test]
    fn empty_listing_is_empty() {
        let problem = LongestIncreasingListing::new(&[]).unwrap();
        assert_eq!(cross_validate(&problem), Ok(Vec::new()));
    }

    #[test]
    fn listing_rejects_inputs_beyond_the_table() {
        let values = vec![0; 5_000];
        assert!(matches!(
            LongestIncreasingListing::new(&values),
            Err(crate::error::DpError::TooLarge { what: "listing table", .. })
        ));
        assert!(LongestIncreasing::new(&values).is_ok());
    }
}
