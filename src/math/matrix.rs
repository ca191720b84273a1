use rand::Rng;
use std::f64::consts::PI;

/// Dense weight storage indexed `(source unit, destination unit)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both uniforms live on (0, 1] to avoid ln(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// He initialization: samples from N(0, sqrt(2 / rows)).
    ///
    /// Rows are the source units, so `rows` is the fan-in of the layer these
    /// weights feed.
    pub fn he<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = (2.0 / rows as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// `out[j] = Σ_i input[i] * self[i][j]`
    pub fn feed_forward(&self, input: &[f64]) -> Vec<f64> {
        assert_eq!(input.len(), self.rows, "input width must match matrix rows");
        let mut out = vec![0.0; self.cols];
        for (i, row) in self.data.iter().enumerate() {
            for (j, w) in row.iter().enumerate() {
                out[j] += input[i] * w;
            }
        }
        out
    }

    /// `out[i] = Σ_j delta[j] * self[i][j]`, the transpose of `feed_forward`.
    pub fn feed_backward(&self, delta: &[f64]) -> Vec<f64> {
        assert_eq!(delta.len(), self.cols, "delta width must match matrix cols");
        self.data
            .iter()
            .map(|row| row.iter().zip(delta).map(|(w, d)| w * d).sum())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flatten()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn he_scale_follows_fan_in() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::he(400, 50, &mut rng);
        let n = (m.rows * m.cols) as f64;

        let mean = m.iter().sum::<f64>() / n;
        let var = m.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n;
        let expected = (2.0 / 400.0_f64).sqrt();

        assert!(mean.abs() < 0.05 * expected, "mean {mean} too far from 0");
        assert!(
            (var.sqrt() - expected).abs() < 0.05 * expected,
            "std {} vs expected {expected}",
            var.sqrt()
        );
    }

    #[test]
    fn feed_backward_is_transpose_of_feed_forward() {
        let m = Matrix {
            rows: 2,
            cols: 3,
            data: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        };
        assert_eq!(m.feed_forward(&[1.0, 1.0]), vec![5.0, 7.0, 9.0]);
        assert_eq!(m.feed_backward(&[1.0, 0.0, 1.0]), vec![4.0, 10.0]);
    }
}
