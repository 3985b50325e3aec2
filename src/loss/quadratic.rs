use crate::math::matrix::Matrix;

pub struct QuadraticCost;

impl QuadraticCost {
    /// Scalar cost for one example: Σ (a - y)² over the output components.
    /// Note: a plain sum, neither halved nor averaged.
    pub fn loss(output: &Matrix, target: &Matrix) -> f64 {
        output
            .data
            .iter()
            .flatten()
            .zip(target.data.iter().flatten())
            .map(|(a, y)| (a - y).powi(2))
            .sum()
    }

    /// ∂C/∂a per output component: 2 · (a - y), the exact derivative of the
    /// unhalved cost above. The factor of 2 must not be dropped.
    pub fn derivative(output: &Matrix, target: &Matrix) -> Matrix {
        (output.clone() - target.clone()).map(|d| 2.0 * d)
    }
}
