use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// One aggregated `(key, count)` pair, e.g. a year and how many records fell in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub key: i64,
    pub count: u64,
}

impl Observation {
    pub fn new(key: i64, count: u64) -> Observation {
        Observation { key, count }
    }
}

/// Observations sorted by strictly increasing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    observations: Vec<Observation>,
}

impl History {
    /// Validates that keys are strictly increasing.
    pub fn new(observations: Vec<Observation>) -> Result<History, ForecastError> {
        if let Some(pair) = observations.windows(2).find(|w| w[0].key >= w[1].key) {
            return Err(ForecastError::InvalidInput(format!(
                "keys must be strictly increasing, found {} followed by {}",
                pair[0].key, pair[1].key
            )));
        }
        Ok(History { observations })
    }

    /// Convenience constructor from `(key, count)` tuples.
    pub fn from_pairs(pairs: &[(i64, u64)]) -> Result<History, ForecastError> {
        History::new(pairs.iter().map(|&(key, count)| Observation::new(key, count)).collect())
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Count recorded for `key`, if any.
    pub fn count_for(&self, key: i64) -> Option<u64> {
        self.observations
            .binary_search_by_key(&key, |o| o.key)
            .ok()
            .map(|i| self.observations[i].count)
    }

    pub fn max_count(&self) -> Option<u64> {
        self.observations.iter().map(|o| o.count).max()
    }
}
