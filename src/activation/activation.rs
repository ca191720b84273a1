use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            // Written so that NaN passes through instead of becoming 0.
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { x },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Element-wise derivative, evaluated on the raw pre-activation `x`.
    ///
    /// ReLU's subgradient at 0 is taken as 0.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ActivationFunction::*;

    #[test]
    fn relu() {
        assert_eq!(ReLU.function(-2.0), 0.0);
        assert_eq!(ReLU.function(3.5), 3.5);
        assert_eq!(ReLU.derivative(0.0), 0.0);
        assert_eq!(ReLU.derivative(1e-9), 1.0);
        assert!(ReLU.function(f64::NAN).is_nan());
    }

    #[test]
    fn sigmoid() {
        assert_eq!(Sigmoid.function(0.0), 0.5);
        assert!((Sigmoid.derivative(0.0) - 0.25).abs() < 1e-12);
        let y = Sigmoid.function(2.0);
        assert!((Sigmoid.derivative(2.0) - y * (1.0 - y)).abs() < 1e-12);
    }
}
