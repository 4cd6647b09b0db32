//! Egg drop as a minimax recurrence.
//!
//! With `e` eggs and a range of `f` untested floors, dropping from floor `k`
//! either breaks the egg (search the `k-1` floors below with `e-1` eggs) or
//! not (search the `f-k` floors above with `e` eggs). The adversary picks the
//! worse branch, we pick the best `k`:
//! - f(e, 0) = 0, f(e, 1) = 1, f(1, f) = f
//! - f(e, f) = 1 + min_{k in 1..=f} max(f(e-1, k-1), f(e, f-k))

use crate::engine::{fill_table, lookup};
use crate::error::{DpError, DpResult};
use crate::traits::{Recurrence, Tabulation};
use crate::utils::dense_size;

/// State space: (eggs remaining, floors left to test).
#[derive(Clone, Debug)]
pub struct EggDrop {
    eggs: usize,
    floors: usize,
}

impl EggDrop {
    /// The (eggs + 1) x (floors + 1) table must fit in
    /// [`MAX_TABLE`](crate::utils::MAX_TABLE) slots, which also keeps every
    /// drop count within a `u32`.
    pub fn new(eggs: usize, floors: usize) -> DpResult<Self> {
        if eggs == 0 {
            return Err(DpError::ZeroDimension { what: "eggs" });
        }
        dense_size(
            "egg-drop table",
            &[eggs.saturating_add(1), floors.saturating_add(1)],
        )?;
        Ok(Self { eggs, floors })
    }

    pub fn eggs(&self) -> usize {
        self.eggs
    }

    pub fn floors(&self) -> usize {
        self.floors
    }

    /// The first floor to drop from in an optimal strategy: the smallest `k`
    /// achieving the minimum in a left-to-right scan. `None` with no floors.
    pub fn first_drop(&self) -> Option<usize> {
        let (e, f) = self.root();
        if f == 0 {
            return None;
        }
        if self.base_case(&(e, f)).is_some() {
            return Some(1);
        }
        let (table, _) = fill_table(self);
        (1..=f)
            .filter_map(|k| {
                let breaks = lookup(self, &table, &(e - 1, k - 1))?;
                let survives = lookup(self, &table, &(e, f - k))?;
                Some((breaks.max(survives), k))
            })
            .min_by_key(|&(worst, _)| worst)
            .map(|(_, k)| k)
    }
}

impl Recurrence for EggDrop {
    type State = (usize, usize);
    type Value = u32;

    fn root(&self) -> Self::State {
        (self.eggs, self.floors)
    }

    fn base_case(&self, &(eggs, floors): &Self::State) -> Option<u32> {
        match (eggs, floors) {
            (_, 0) => Some(0),
            (_, 1) => Some(1),
            // `new` bounds floors well below u32::MAX
            (1, f) => Some(f as u32),
            _ => None,
        }
    }

    fn dependencies(&self, &(eggs, floors): &Self::State) -> Vec<Self::State> {
        let mut deps = Vec::with_capacity(2 * floors);
        for k in 1..=floors {
            deps.push((eggs - 1, k - 1)); // breaks
            deps.push((eggs, floors - k)); // survives
        }
        deps
    }

    fn combine(&self, _state: &Self::State, children: &[u32]) -> u32 {
        let worst_case = children
            .chunks_exact(2)
            .map(|pair| pair[0].max(pair[1]))
            .min()
            .unwrap_or(0);
        worst_case + 1
    }
}

impl Tabulation for EggDrop {
    fn table_len(&self) -> usize {
        (self.eggs + 1) * (self.floors + 1)
    }

    fn slot(&self, &(eggs, floors): &Self::State) -> usize {
        eggs * (self.floors + 1) + floors
    }

    fn scan_order(&self) -> Vec<Self::State> {
        let mut order = Vec::new();
        for eggs in 2..=self.eggs {
            for floors in 2..=self.floors {
                order.push((eggs, floors));
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{memoized, tabulated};
    use crate::harness::cross_validate;

    #[test]
    fn reference_cases() {
        for (eggs, floors, expected) in [(1, 1, 1), (1, 10, 10), (2, 10, 4), (2, 20, 6), (3, 10, 4)]
        {
            let problem = EggDrop::new(eggs, floors).unwrap();
            assert_eq!(cross_validate(&problem), Ok(expected), "{eggs} eggs, {floors} floors");
        }
    }

    #[test]
    fn zero_floors_needs_no_drops() {
        let problem = EggDrop::new(3, 0).unwrap();
        assert_eq!(cross_validate(&problem), Ok(0));
        assert_eq!(problem.first_drop(), None);
    }

    #[test]
    fn rejects_zero_eggs() {
        assert_eq!(
            EggDrop::new(0, 10).unwrap_err(),
            DpError::ZeroDimension { what: "eggs" }
        );
    }

    #[test]
    fn first_drop_is_leftmost_minimizer() {
        // 2 eggs, 10 floors: only floor 4 keeps both branches within 3 more drops.
        assert_eq!(EggDrop::new(2, 10).unwrap().first_drop(), Some(4));
        assert_eq!(EggDrop::new(2, 20).unwrap().first_drop(), Some(5));
        assert_eq!(EggDrop::new(1, 10).unwrap().first_drop(), Some(1));
        let problem = EggDrop::new(2, 36).unwrap();
        assert_eq!(memoized(&problem).0, 8);
        assert_eq!(problem.first_drop(), Some(8));
    }

    #[test]
    fn larger_instance_memoized_matches_tabulated() {
        let problem = EggDrop::new(3, 60).unwrap();
        assert_eq!(memoized(&problem).0, tabulated(&problem).0);
        let (table, _) = fill_table(&problem);
        assert_eq!(lookup(&problem, &table, &(3, 60)), Some(tabulated(&problem).0));
    }

    #[test]
    fn rejects_floor_counts_beyond_the_table() {
        let floors = u32::MAX as usize + 2;
        assert!(matches!(
            EggDrop::new(1, floors),
            Err(DpError::TooLarge { what: "egg-drop table", .. })
        ));
        assert!(matches!(
            EggDrop::new(usize::MAX, usize::MAX),
            Err(DpError::TooLarge { .. })
        ));
        // one egg at the largest accepted floor count is still exact
        let floors = crate::utils::MAX_TABLE / 2 - 1;
        let problem = EggDrop::new(1, floors).unwrap();
        assert_eq!(cross_validate(&problem), Ok(floors as u32));
    }
}
