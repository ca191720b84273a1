use rand::Rng;

use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};

/// Every bias starts at this small positive value so ReLU units begin active.
pub const BIAS_INIT: f64 = 0.01;

/// Result of feeding one input through a layer.
#[derive(Debug, Clone)]
pub struct LayerOutput {
    /// Pre-activation values (z = xW + b), needed for the derivative.
    pub raw: Vec<f64>,
    pub activations: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activator: ActivationFunction,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            weights: Matrix::he(input_size, size, rng),
            biases: vec![BIAS_INIT; size],
            activator: activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn feed_from(&self, input: &[f64]) -> LayerOutput {
        let raw: Vec<f64> = self
            .weights
            .feed_forward(input)
            .into_iter()
            .zip(&self.biases)
            .map(|(sum, b)| b + sum)
            .collect();
        let activations = raw.iter().map(|&z| self.activator.function(z)).collect();
        LayerOutput { raw, activations }
    }

    /// δ = error ⊙ f'(z), where `error` is ∂L/∂a for this layer.
    pub fn compute_delta(&self, error: &[f64], raw: &[f64]) -> Vec<f64> {
        error
            .iter()
            .zip(raw)
            .map(|(e, &z)| e * self.activator.derivative(z))
            .collect()
    }

    /// Pushes this layer's δ back through its weights, giving ∂L/∂a of the
    /// layer that fed it.
    pub fn propagate(&self, delta: &[f64]) -> Vec<f64> {
        self.weights.feed_backward(delta)
    }

    /// `w[i][j] -= lr * δ[j] * input[i]` and `b[j] -= lr * δ[j]`.
    pub fn apply_gradients(&mut self, delta: &[f64], input: &[f64], lr: f64) {
        for (row, x) in self.weights.data.iter_mut().zip(input) {
            for (w, d) in row.iter_mut().zip(delta) {
                *w -= lr * d * x;
            }
        }
        for (b, d) in self.biases.iter_mut().zip(delta) {
            *b -= lr * d;
        }
    }
}
