pub mod config;
pub mod observation;
pub mod predictor;
pub mod result;
pub mod training_set;

pub use config::PredictorConfig;
pub use observation::{History, Observation};
pub use predictor::{forecast, PredictorState, SequencePredictor};
pub use result::PredictionResult;
pub use training_set::{build_training_set, TrainingExample, TrainingSet};
