pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod forecast;
pub mod data;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{FeedforwardNetwork, Topology};
pub use loss::squared_error::SquaredError;
pub use optim::sgd::Sgd;
pub use train::{train_loop, EpochStats, TrainConfig};
pub use forecast::{
    build_training_set, History, Observation, PredictionResult, PredictorConfig, SequencePredictor,
};
pub use error::ForecastError;
