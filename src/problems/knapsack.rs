//! 0/1 knapsack.
//!
//! Items are considered in order; each is skipped or (if it fits) taken:
//! - f(n, w) = 0
//! - f(i, w) = f(i+1, w)                                  if weight[i] > w
//! - f(i, w) = max(f(i+1, w), f(i+1, w - weight[i]) + value[i])  otherwise

use crate::error::DpResult;
use crate::traits::{Recurrence, Tabulation};
use crate::utils::{checked_total, dense_size};

/// One item: its weight and its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub const fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

/// (item index, remaining capacity).
pub type KnapsackState = (usize, usize);

#[derive(Clone, Debug)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: usize,
}

impl Knapsack {
    pub fn new(items: &[Item], capacity: usize) -> DpResult<Self> {
        checked_total("total item value", items.iter().map(|it| it.value))?;
        dense_size(
            "knapsack table",
            &[capacity.saturating_add(1), items.len()],
        )?;
        Ok(Self {
            items: items.to_vec(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Space-optimized tabulation: one capacity layer, rebuilt per item.
    pub fn compact(&self) -> u64 {
        let mut layer = vec![0u64; self.capacity + 1];
        for item in self.items.iter().rev() {
            let mut next = vec![0u64; self.capacity + 1];
            for (w, slot) in next.iter_mut().enumerate() {
                *slot = if item.weight > w {
                    layer[w]
                } else {
                    layer[w].max(layer[w - item.weight] + item.value)
                };
            }
            layer = next;
        }
        layer[self.capacity]
    }
}

impl Recurrence for Knapsack {
    type State = KnapsackState;
    type Value = u64;

    fn root(&self) -> KnapsackState {
        (0, self.capacity)
    }

    fn base_case(&self, &(i, _): &KnapsackState) -> Option<u64> {
        (i == self.items.len()).then_some(0)
    }

    fn dependencies(&self, &(i, w): &KnapsackState) -> Vec<KnapsackState> {
        let weight = self.items[i].weight;
        if weight > w {
            vec![(i + 1, w)]
        } else {
            vec![(i + 1, w), (i + 1, w - weight)]
        }
    }

    fn combine(&self, &(i, _): &KnapsackState, children: &[u64]) -> u64 {
        let skip = children[0];
        match children.get(1) {
            Some(&rest) => skip.max(rest + self.items[i].value),
            None => skip,
        }
    }
}

impl Tabulation for Knapsack {
    fn table_len(&self) -> usize {
        self.items.len() * (self.capacity + 1)
    }

    fn slot(&self, &(i, w): &KnapsackState) -> usize {
        i * (self.capacity + 1) + w
    }

    fn scan_order(&self) -> Vec<KnapsackState> {
        let mut order = Vec::with_capacity(self.table_len());
        for i in (0..self.items.len()).rev() {
            order.extend((0..=self.capacity).map(|w| (i, w)));
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::memoized;
    use crate::harness::cross_validate_with;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(4, 5),
            Item::new(1, 8),
            Item::new(2, 4),
            Item::new(3, 0),
            Item::new(2, 5),
            Item::new(2, 3),
        ]
    }

    fn solve(items: &[Item], capacity: usize) -> u64 {
        let problem = Knapsack::new(items, capacity).unwrap();
        cross_validate_with(&problem, problem.compact()).unwrap()
    }

    #[test]
    fn reference_values() {
        assert_eq!(solve(&[], 0), 0);
        assert_eq!(solve(&sample_items(), 3), 13);
        assert_eq!(solve(&sample_items(), 8), 20);
        assert_eq!(
            solve(&[Item::new(1, 6), Item::new(2, 10), Item::new(3, 12)], 5),
            22
        );
    }

    #[test]
    fn capacity_is_monotone() {
        let items = sample_items();
        let mut prev = 0;
        for capacity in 0..=16 {
            let best = solve(&items, capacity);
            assert!(best >= prev, "capacity {capacity}: {best} < {prev}");
            prev = best;
        }
        assert_eq!(prev, 25);
    }

    #[test]
    fn nothing_fits() {
        assert_eq!(solve(&[Item::new(5, 100)], 4), 0);
    }

    #[test]
    fn zero_valued_states_are_expanded_once() {
        let items = vec![Item::new(1, 0); 8];
        let problem = Knapsack::new(&items, 4).unwrap();
        let (value, stats) = memoized(&problem);
        assert_eq!(value, 0);
        assert!(stats.expansions <= items.len() * 5);
        assert!(stats.cache_hits > 0);
    }

    #[test]
    fn rejects_capacity_beyond_the_table() {
        assert!(matches!(
            Knapsack::new(&[], usize::MAX),
            Err(crate::error::DpError::TooLarge { what: "knapsack table", .. })
        ));
        assert!(Knapsack::new(&[Item::new(1, 1); 64], 1 << 20).is_err());
        assert_eq!(solve(&[Item::new(3, 7)], 1 << 16), 7);
    }

    #[test]
    fn rejects_value_overflow() {
        let items = [Item::new(1, u64::MAX), Item::new(1, 1)];
        assert!(Knapsack::new(&items, 2).is_err());
    }
}
