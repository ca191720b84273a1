use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::error::ForecastError;
use crate::forecast::config::PredictorConfig;
use crate::forecast::observation::History;
use crate::forecast::result::PredictionResult;
use crate::forecast::training_set::{build_training_set, features, normalizer};
use crate::network::network::FeedforwardNetwork;

/// Whether a predictor has a network it can forecast with.
#[derive(Debug, Clone)]
pub enum PredictorState {
    Untrained,
    Trained(FeedforwardNetwork),
}

/// Bridges a history of `(key, count)` observations and a freshly trained
/// network.
///
/// Every successful `fit` discards the previous network and trains a new one
/// from random weights; a failed `fit` leaves the current state as it was.
#[derive(Debug)]
pub struct SequencePredictor {
    config: PredictorConfig,
    rng: StdRng,
    state: PredictorState,
}

impl Default for SequencePredictor {
    fn default() -> Self {
        SequencePredictor {
            config: PredictorConfig::default(),
            rng: StdRng::from_entropy(),
            state: PredictorState::Untrained,
        }
    }
}

impl SequencePredictor {
    pub fn new() -> SequencePredictor {
        SequencePredictor::default()
    }

    pub fn with_config(config: PredictorConfig) -> Result<SequencePredictor, ForecastError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(SequencePredictor { config, rng, state: PredictorState::Untrained })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn state(&self) -> &PredictorState {
        &self.state
    }

    pub fn is_trained(&self) -> bool {
        matches!(self.state, PredictorState::Trained(_))
    }

    pub fn network(&self) -> Option<&FeedforwardNetwork> {
        match &self.state {
            PredictorState::Trained(network) => Some(network),
            PredictorState::Untrained => None,
        }
    }

    /// Trains a new network on `history` and returns the mean loss of its
    /// final epoch.
    pub fn fit(&mut self, history: &History) -> Result<f64, ForecastError> {
        let set = build_training_set(history)?;
        debug!(
            "fitting on {} examples, normalizer = {}",
            set.len(),
            set.normalizer
        );

        let mut network = FeedforwardNetwork::new(self.config.topology, &mut self.rng);
        let loss = network.train_with(&set.inputs(), &set.targets(), &self.config.train_config());
        debug!("training finished after {} epochs, loss = {loss:.6}", self.config.epochs);

        self.state = PredictorState::Trained(network);
        Ok(loss)
    }

    pub fn forecast(&self, target_key: i64, history: &History) -> Result<PredictionResult, ForecastError> {
        forecast(target_key, history, self.network())
    }
}

/// Recorded count when `target_key` is in `history`; otherwise the
/// network's estimate for a key after the last known one.
pub fn forecast(
    target_key: i64,
    history: &History,
    network: Option<&FeedforwardNetwork>,
) -> Result<PredictionResult, ForecastError> {
    if let Some(count) = history.count_for(target_key) {
        return Ok(PredictionResult::recorded(target_key, count));
    }

    let network = network.ok_or(ForecastError::NotTrained { key: target_key })?;

    let obs = history.observations();
    let (first, last) = match (obs.first(), obs.last()) {
        (Some(first), Some(last)) if obs.len() >= 2 => (first, last),
        _ => {
            return Err(ForecastError::InsufficientData { required: 2, actual: obs.len() });
        }
    };
    if target_key <= last.key {
        return Err(ForecastError::OutOfRange { key: target_key, last: last.key });
    }

    let previous = obs[obs.len() - 2].count;
    let norm = normalizer(history);
    let input = features(first.key, target_key, last.count, Some(previous), norm);

    let output = network.predict(&input);
    let estimate = (output[0] * norm).round().max(0.0) as u64;

    Ok(PredictionResult::predicted(target_key, estimate, last.count))
}
