use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("no trained network available to forecast key {key}")]
    NotTrained { key: i64 },
    #[error("key {key} has no recorded count and is not after the last known key {last}")]
    OutOfRange { key: i64, last: i64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
