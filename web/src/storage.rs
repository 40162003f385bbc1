use gloo::storage::{LocalStorage, Storage};
use kaboom_core::{BestTimeStore, Difficulty, parse_best_time};

use crate::utils::StorageKey;

impl StorageKey for Difficulty {
    const KEY: &'static str = "kaboom:difficulty";
}

/// Best times kept in the browser's local storage, one plain-text integer per
/// difficulty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LocalBestTimes;

impl LocalBestTimes {
    pub(crate) fn key(difficulty: Difficulty) -> String {
        format!("kaboom:best:{}", difficulty.id())
    }
}

impl BestTimeStore for LocalBestTimes {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32> {
        let key = Self::key(difficulty);
        match LocalStorage::raw().get_item(&key) {
            Ok(Some(raw)) => {
                let best = parse_best_time(&raw);
                if best.is_none() {
                    log::warn!("Ignoring malformed best time {:?} under {}", raw, key);
                }
                best
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("Could not read {}: {:?}", key, err);
                None
            }
        }
    }

    fn set_best(&mut self, difficulty: Difficulty, seconds: u32) {
        let key = Self::key(difficulty);
        if let Err(err) = LocalStorage::raw().set_item(&key, &seconds.to_string()) {
            log::error!("Could not save best time to {}: {:?}", key, err);
        }
    }
}
