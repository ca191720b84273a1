pub struct SquaredError;

impl SquaredError {
    /// Σ (expected - predicted)², summed over the output units.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum()
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SquaredError;

    #[test]
    fn loss_is_summed_not_averaged() {
        assert!((SquaredError::loss(&[0.5, 1.0], &[0.0, 0.0]) - 1.25).abs() < 1e-12);
        assert_eq!(SquaredError::derivative(&[0.5, 1.0], &[1.0, 0.0]), vec![-0.5, 1.0]);
    }
}
