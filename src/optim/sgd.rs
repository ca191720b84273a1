use crate::layers::dense::Layer;

#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to a layer given its δ and the input it was fed.
    pub fn step(&self, layer: &mut Layer, delta: &[f64], input: &[f64]) {
        layer.apply_gradients(delta, input, self.learning_rate);
    }
}
