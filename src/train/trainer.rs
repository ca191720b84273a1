use crate::{loss::squared_error::SquaredError, network::network::FeedforwardNetwork, optim::sgd::Sgd};

/// Runs one online-SGD pass over every example, in order, updating the
/// parameters after each one. Returns the mean loss over the examples.
pub fn train_epoch(
    network: &mut FeedforwardNetwork,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &Sgd,
) -> f64 {
    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        total_loss += train_sample(network, input, expected, optimizer);
    }

    total_loss / inputs.len() as f64
}

/// Forward, backward and update for a single example; returns its loss.
fn train_sample(network: &mut FeedforwardNetwork, input: &[f64], expected: &[f64], optimizer: &Sgd) -> f64 {
    let trace = network.forward(input);
    let output = &trace.output.activations;
    let loss = SquaredError::loss(output, expected);

    // Every δ is computed against the weights used in the forward pass,
    // so no layer is updated until all three are known.
    let error = SquaredError::derivative(output, expected);
    let output_delta = network.output.compute_delta(&error, &trace.output.raw);

    let error = network.output.propagate(&output_delta);
    let hidden2_delta = network.hidden2.compute_delta(&error, &trace.hidden2.raw);

    let error = network.hidden2.propagate(&hidden2_delta);
    let hidden1_delta = network.hidden1.compute_delta(&error, &trace.hidden1.raw);

    optimizer.step(&mut network.output, &output_delta, &trace.hidden2.activations);
    optimizer.step(&mut network.hidden2, &hidden2_delta, &trace.hidden1.activations);
    optimizer.step(&mut network.hidden1, &hidden1_delta, input);

    loss
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layers::dense::Layer, math::matrix::Matrix, activation::activation::ActivationFunction, network::spec::Topology};

    fn layer(data: Vec<Vec<f64>>, bias: f64, activator: ActivationFunction) -> Layer {
        let rows = data.len();
        let cols = data[0].len();
        Layer {
            size: cols,
            weights: Matrix { rows, cols, data },
            biases: vec![bias; cols],
            activator,
        }
    }

    /// 1 → 1 → 1 → 1 network small enough to differentiate by hand.
    fn tiny() -> FeedforwardNetwork {
        FeedforwardNetwork {
            topology: Topology::new(1, 1, 1, 1),
            hidden1: layer(vec![vec![0.5]], 0.0, ActivationFunction::ReLU),
            hidden2: layer(vec![vec![2.0]], 0.0, ActivationFunction::ReLU),
            output: layer(vec![vec![1.0]], 0.0, ActivationFunction::Sigmoid),
        }
    }

    #[test]
    fn single_step_matches_hand_derivation() {
        let mut net = tiny();
        let lr = 0.5;
        // x = 1: h1 = 0.5, h2 = 1.0, y = σ(1.0)
        let y = 1.0 / (1.0 + (-1.0f64).exp());
        let target = 0.0;
        let d_out = (y - target) * y * (1.0 - y);
        let d_h2 = d_out * 1.0;
        let d_h1 = d_h2 * 2.0;

        let loss = train_epoch(&mut net, &[vec![1.0]], &[vec![target]], &Sgd::new(lr));

        assert!((loss - y * y).abs() < 1e-12);
        assert!((net.output.weights.data[0][0] - (1.0 - lr * d_out * 1.0)).abs() < 1e-12);
        assert!((net.output.biases[0] - (0.0 - lr * d_out)).abs() < 1e-12);
        // Uses the pre-update output weight of 1.0, not the stepped one.
        assert!((net.hidden2.weights.data[0][0] - (2.0 - lr * d_h2 * 0.5)).abs() < 1e-12);
        assert!((net.hidden1.weights.data[0][0] - (0.5 - lr * d_h1 * 1.0)).abs() < 1e-12);
        assert!((net.hidden1.biases[0] - (0.0 - lr * d_h1)).abs() < 1e-12);
    }

    #[test]
    fn dead_relu_blocks_gradient() {
        let mut net = tiny();
        net.hidden1.weights.data[0][0] = -0.5;
        let before = net.hidden1.clone();

        train_epoch(&mut net, &[vec![1.0]], &[vec![1.0]], &Sgd::new(0.5));

        assert_eq!(net.hidden1.weights, before.weights);
        assert_eq!(net.hidden1.biases, before.biases);
    }
}
