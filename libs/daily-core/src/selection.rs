//! Daily message selection with a no-repeat window.

use crate::catalog;
use crate::types::MessageId;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};

/// Number of most recent days whose messages are excluded from selection.
pub const NO_REPEAT_WINDOW: usize = 10;

/// Source of randomness for message selection.
pub trait MessagePicker: Send {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPicker<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng + Send> MessagePicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Ids shown on the `window` latest recorded dates.
pub fn recent_ids(shown: &BTreeMap<NaiveDate, MessageId>, window: usize) -> HashSet<MessageId> {
    shown.values().rev().take(window).copied().collect()
}

/// Catalog ids not shown within the no-repeat window.
pub fn candidate_pool(shown: &BTreeMap<NaiveDate, MessageId>) -> Vec<MessageId> {
    let recent = recent_ids(shown, NO_REPEAT_WINDOW);
    catalog::ids().filter(|id| !recent.contains(id)).collect()
}

/// Choose a message for a new day.
///
/// Picks uniformly from the candidate pool. If the pool is empty, every
/// catalog id is eligible again, repeats included.
pub fn select_message(
    shown: &BTreeMap<NaiveDate, MessageId>,
    picker: &mut dyn MessagePicker,
) -> MessageId {
    let mut pool = candidate_pool(shown);
    if pool.is_empty() {
        tracing::warn!("no-repeat pool exhausted, selecting from full catalog");
        pool = catalog::ids().collect();
    }
    let index = picker.pick_index(pool.len()).min(pool.len() - 1);
    pool[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_SIZE;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    /// Always picks the first candidate.
    struct First;

    impl MessagePicker for First {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn history(ids: &[MessageId]) -> BTreeMap<NaiveDate, MessageId> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        ids.iter()
            .enumerate()
            .map(|(i, id)| (start + Duration::days(i as i64), *id))
            .collect()
    }

    #[test]
    fn empty_history_allows_every_id() {
        assert_eq!(candidate_pool(&BTreeMap::new()).len(), CATALOG_SIZE);
    }

    #[test]
    fn recent_ids_uses_last_ten_days() {
        let shown = history(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let recent = recent_ids(&shown, NO_REPEAT_WINDOW);
        assert_eq!(recent.len(), 10);
        assert!(!recent.contains(&1));
        assert!(!recent.contains(&2));
        assert!(recent.contains(&12));
    }

    #[test]
    fn window_follows_dates_not_write_order() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut shown = BTreeMap::new();
        for i in 0..10 {
            shown.insert(start + Duration::days(i), i as MessageId + 1);
        }
        // Written last, but dated before everything else.
        shown.insert(start - Duration::days(1), 30);

        let recent = recent_ids(&shown, NO_REPEAT_WINDOW);
        assert_eq!(recent.len(), 10);
        assert!(!recent.contains(&30));
        assert!(candidate_pool(&shown).contains(&30));
    }

    #[test]
    fn pool_excludes_recent() {
        let shown = history(&[1, 2, 3]);
        let pool = candidate_pool(&shown);
        assert_eq!(pool.len(), CATALOG_SIZE - 3);
        assert_eq!(pool[0], 4);
    }

    #[test]
    fn selection_skips_recent_ids() {
        let shown = history(&[1, 2, 3, 4, 5]);
        assert_eq!(select_message(&shown, &mut First), 6);
    }

    #[test]
    fn older_ids_become_eligible_again() {
        let shown = history(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(select_message(&shown, &mut First), 1);
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        struct Huge;
        impl MessagePicker for Huge {
            fn pick_index(&mut self, _len: usize) -> usize {
                usize::MAX
            }
        }
        assert_eq!(select_message(&BTreeMap::new(), &mut Huge), 45);
    }

    #[test]
    fn seeded_picker_is_reproducible() {
        let shown = history(&[10, 20, 30]);
        let a: Vec<_> = {
            let mut p = RandomPicker::seeded(7);
            (0..20).map(|_| select_message(&shown, &mut p)).collect()
        };
        let b: Vec<_> = {
            let mut p = RandomPicker::seeded(7);
            (0..20).map(|_| select_message(&shown, &mut p)).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|id| ![10, 20, 30].contains(id)));
    }
}
