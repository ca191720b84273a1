use serde::{Deserialize, Serialize};

/// Layer widths of a network with exactly two hidden layers.
///
/// Fields:
/// - `input_size`  — width of the feature vector fed to `predict`
/// - `hidden1`     — neurons in the first ReLU layer
/// - `hidden2`     — neurons in the second ReLU layer
/// - `output_size` — neurons in the sigmoid output layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_size: usize,
    pub hidden1: usize,
    pub hidden2: usize,
    pub output_size: usize,
}

impl Topology {
    pub fn new(input_size: usize, hidden1: usize, hidden2: usize, output_size: usize) -> Topology {
        Topology { input_size, hidden1, hidden2, output_size }
    }

    pub fn is_valid(&self) -> bool {
        self.input_size > 0 && self.hidden1 > 0 && self.hidden2 > 0 && self.output_size > 0
    }
}

impl Default for Topology {
    /// 3 → 10 → 5 → 1, the shape used for sequence forecasting.
    fn default() -> Self {
        Topology::new(3, 10, 5, 1)
    }
}
