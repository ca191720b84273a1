use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::forecast::training_set::FEATURE_COUNT;
use crate::network::spec::Topology;
use crate::train::train_config::TrainConfig;

/// Everything a `SequencePredictor` needs to build and train its network.
///
/// Missing JSON fields fall back to the defaults: a 3 → 10 → 5 → 1 network
/// trained for 1000 epochs at a learning rate of 0.1, logging every 100
/// epochs, with an unseeded generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub topology: Topology,
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: usize,
    /// Seed for weight initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig {
            topology: Topology::default(),
            epochs: 1000,
            learning_rate: 0.1,
            log_every: TrainConfig::DEFAULT_LOG_EVERY,
            seed: None,
        }
    }
}

impl PredictorConfig {
    pub fn seeded(seed: u64) -> Self {
        PredictorConfig { seed: Some(seed), ..Default::default() }
    }

    /// Checks the topology fits the feature/target shape and the training
    /// parameters are positive.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let t = &self.topology;
        if !t.is_valid() {
            return Err(ForecastError::InvalidInput(format!("empty layer in topology {t:?}")));
        }
        if t.input_size != FEATURE_COUNT || t.output_size != 1 {
            return Err(ForecastError::InvalidInput(format!(
                "topology must map {FEATURE_COUNT} inputs to 1 output, got {} -> {}",
                t.input_size, t.output_size
            )));
        }
        if self.epochs == 0 {
            return Err(ForecastError::InvalidInput("epochs must be positive".into()));
        }
        if self.log_every == 0 {
            return Err(ForecastError::InvalidInput("log_every must be positive".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ForecastError::InvalidInput(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.learning_rate).with_log_every(self.log_every)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<PredictorConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
