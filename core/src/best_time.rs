use alloc::collections::BTreeMap;

use crate::*;

/// Durable per-difficulty record of the fastest win, in whole seconds.
pub trait BestTimeStore {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32>;

    fn set_best(&mut self, difficulty: Difficulty, seconds: u32);
}

impl<T: BestTimeStore + ?Sized> BestTimeStore for &mut T {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32> {
        (**self).get_best(difficulty)
    }

    fn set_best(&mut self, difficulty: Difficulty, seconds: u32) {
        (**self).set_best(difficulty, seconds)
    }
}

/// Parses a persisted best time. Anything that is not a plain non-negative
/// integer counts as no record.
pub fn parse_best_time(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Stores `seconds` if it beats the current record (numerically, strictly).
/// Returns whether the record changed.
pub fn record_if_best<S: BestTimeStore + ?Sized>(
    store: &mut S,
    difficulty: Difficulty,
    seconds: u32,
) -> bool {
    match store.get_best(difficulty) {
        Some(best) if best <= seconds => false,
        previous => {
            log::debug!(
                "New best time for {}: {}s (was {:?})",
                difficulty,
                seconds,
                previous
            );
            store.set_best(difficulty, seconds);
            true
        }
    }
}

/// In-memory store; nothing survives the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryBestTimes {
    records: BTreeMap<Difficulty, u32>,
}

impl BestTimeStore for MemoryBestTimes {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32> {
        self.records.get(&difficulty).copied()
    }

    fn set_best(&mut self, difficulty: Difficulty, seconds: u32) {
        self.records.insert(difficulty, seconds);
    }
}
