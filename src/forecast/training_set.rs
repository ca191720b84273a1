use crate::error::ForecastError;
use crate::forecast::observation::History;

/// Key offsets are multiplied by this before entering the network.
pub const KEY_SCALE: f64 = 0.1;
/// Width of every feature vector.
pub const FEATURE_COUNT: usize = 3;
/// Fewest observations `build_training_set` accepts.
pub const MIN_OBSERVATIONS: usize = 3;

/// One normalized `(features, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingExample {
    /// `[key offset × 0.1, count / max, (count − previous) / max]`
    pub features: [f64; FEATURE_COUNT],
    /// Next count divided by the same maximum.
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub examples: Vec<TrainingExample>,
    /// Shared scale used for every count in the set.
    pub normalizer: f64,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn inputs(&self) -> Vec<Vec<f64>> {
        self.examples.iter().map(|e| e.features.to_vec()).collect()
    }

    pub fn targets(&self) -> Vec<Vec<f64>> {
        self.examples.iter().map(|e| vec![e.target]).collect()
    }
}

/// The largest count in `history`, never less than 1.
///
/// An all-zero (or empty) history scales by 1 instead of dividing by zero.
pub fn normalizer(history: &History) -> f64 {
    history.max_count().unwrap_or(0).max(1) as f64
}

/// Builds the feature vector for an observation at `key` with `count`,
/// preceded by `previous` (absent at the first position).
pub fn features(
    first_key: i64,
    key: i64,
    count: u64,
    previous: Option<u64>,
    normalizer: f64,
) -> [f64; FEATURE_COUNT] {
    let trend = previous.map_or(0.0, |p| (count as f64 - p as f64) / normalizer);
    [
        (key as f64 - first_key as f64) * KEY_SCALE,
        count as f64 / normalizer,
        trend,
    ]
}

/// Turns a history of `n ≥ 3` observations into `n − 1` examples, each
/// predicting observation `i + 1` from observation `i` and its trend.
pub fn build_training_set(history: &History) -> Result<TrainingSet, ForecastError> {
    if history.len() < MIN_OBSERVATIONS {
        return Err(ForecastError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: history.len(),
        });
    }

    let obs = history.observations();
    let first_key = obs[0].key;
    let norm = normalizer(history);

    let examples = obs
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let previous = i.checked_sub(1).map(|p| obs[p].count);
            TrainingExample {
                features: features(first_key, pair[0].key, pair[0].count, previous, norm),
                target: pair[1].count as f64 / norm,
            }
        })
        .collect();

    Ok(TrainingSet { examples, normalizer: norm })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_fewer_example_than_observations() {
        let h = History::from_pairs(&[(2019, 5), (2020, 8), (2021, 13), (2022, 6)]).unwrap();
        let set = build_training_set(&h).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.normalizer, 13.0);
        assert_eq!(set.examples[0].features, [0.0, 5.0 / 13.0, 0.0]);
        assert_eq!(set.examples[0].target, 8.0 / 13.0);
        assert_eq!(set.examples[1].features, [0.1, 8.0 / 13.0, 3.0 / 13.0]);
        assert_eq!(set.examples[2].features[2], 5.0 / 13.0);
        assert_eq!(set.examples[2].target, 6.0 / 13.0);
        assert!(set.examples.iter().all(|e| (0.0..=1.0).contains(&e.target)));
    }

    #[test]
    fn negative_trend_is_kept() {
        let h = History::from_pairs(&[(1, 10), (2, 4), (3, 7)]).unwrap();
        let set = build_training_set(&h).unwrap();
        assert_eq!(set.examples[1].features[2], -0.6);
    }

    #[test]
    fn key_gaps_scale_the_offset() {
        let h = History::from_pairs(&[(2000, 1), (2010, 2), (2030, 2)]).unwrap();
        let set = build_training_set(&h).unwrap();
        assert_eq!(set.examples[1].features[0], 1.0);
    }

    #[test]
    fn distant_keys_do_not_overflow() {
        let f = features(i64::MIN, i64::MAX, 1, None, 1.0);
        assert!(f[0].is_finite() && f[0] > 0.0);
        let f = features(-5, i64::MAX, 1, Some(1), 1.0);
        assert_eq!(f[0], i64::MAX as f64 * KEY_SCALE);
    }

    #[test]
    fn all_zero_counts_scale_by_one() {
        let h = History::from_pairs(&[(1, 0), (2, 0), (3, 0)]).unwrap();
        let set = build_training_set(&h).unwrap();
        assert_eq!(set.normalizer, 1.0);
        assert!(set.examples.iter().all(|e| e.target == 0.0 && e.features[1] == 0.0));
    }

    #[test]
    fn short_history_is_rejected() {
        let h = History::from_pairs(&[(1, 3), (2, 4)]).unwrap();
        assert!(matches!(
            build_training_set(&h),
            Err(ForecastError::InsufficientData { required: 3, actual: 2 })
        ));
    }

    #[test]
    fn inputs_and_targets_line_up() {
        let h = History::from_pairs(&[(1, 2), (2, 4), (3, 8)]).unwrap();
        let set = build_training_set(&h).unwrap();
        assert_eq!(set.inputs().len(), 2);
        assert!(set.inputs().iter().all(|x| x.len() == FEATURE_COUNT));
        assert_eq!(set.targets(), vec![vec![0.5], vec![1.0]]);
    }
}
