use rand::Rng;

use crate::{
    activation::activation::ActivationFunction,
    layers::dense::{Layer, LayerOutput},
    loss::squared_error::SquaredError,
    network::spec::Topology,
    train::{loop_fn::train_loop, train_config::TrainConfig},
};

/// Values retained by one forward pass, layer by layer.
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    pub hidden1: LayerOutput,
    pub hidden2: LayerOutput,
    pub output: LayerOutput,
}

/// Input → ReLU → ReLU → sigmoid network.
///
/// The parameters are owned by this value alone; retraining from scratch
/// means building a new network rather than mutating a shared one.
#[derive(Debug, Clone)]
pub struct FeedforwardNetwork {
    pub topology: Topology,
    pub hidden1: Layer,
    pub hidden2: Layer,
    pub output: Layer,
}

impl FeedforwardNetwork {
    /// Builds a network with He-scaled normal weights and biases of 0.01.
    ///
    /// # Panics
    /// Panics if any layer width in `topology` is zero.
    pub fn new<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> FeedforwardNetwork {
        assert!(topology.is_valid(), "every layer needs at least one neuron: {topology:?}");
        let hidden1 = Layer::new(topology.hidden1, topology.input_size, ActivationFunction::ReLU, rng);
        let hidden2 = Layer::new(topology.hidden2, topology.hidden1, ActivationFunction::ReLU, rng);
        let output = Layer::new(topology.output_size, topology.hidden2, ActivationFunction::Sigmoid, rng);
        FeedforwardNetwork { topology, hidden1, hidden2, output }
    }

    /// Forward pass keeping the pre-activations of every layer.
    ///
    /// # Panics
    /// Panics if `input.len()` differs from `topology.input_size`.
    pub fn forward(&self, input: &[f64]) -> ForwardTrace {
        assert_eq!(
            input.len(),
            self.topology.input_size,
            "input has {} features, network expects {}",
            input.len(),
            self.topology.input_size
        );
        let hidden1 = self.hidden1.feed_from(input);
        let hidden2 = self.hidden2.feed_from(&hidden1.activations);
        let output = self.output.feed_from(&hidden2.activations);
        ForwardTrace { hidden1, hidden2, output }
    }

    /// Output activations for `input`, each in (0, 1) for finite input.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.forward(input).output.activations
    }

    /// Online gradient descent for exactly `epochs` passes over the examples.
    pub fn train(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>], epochs: usize, learning_rate: f64) {
        self.train_with(inputs, targets, &TrainConfig::new(epochs, learning_rate));
    }

    /// Like `train`, with logging interval and progress channel taken from
    /// `config`. Returns the mean loss of the last epoch.
    pub fn train_with(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>], config: &TrainConfig) -> f64 {
        train_loop(self, inputs, targets, config)
    }

    /// Mean squared error over a dataset without touching the parameters.
    pub fn mean_loss(&self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
        if inputs.is_empty() {
            return 0.0;
        }
        let total: f64 = inputs
            .iter()
            .zip(targets)
            .map(|(input, target)| SquaredError::loss(&self.predict(input), target))
            .sum();
        total / inputs.len() as f64
    }
}
