use rand::Rng;

use crate::activation::sigmoid;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// A fully-connected feedforward network of sigmoid layers.
///
/// `biases[i]` is a column vector of length `sizes[i + 1]`; `weights[i]` has
/// shape `(sizes[i + 1], sizes[i])`. Both lists are allocated once at
/// construction and never resized; the mini-batch trainer is the only code
/// that writes to them.
#[derive(Debug, Clone)]
pub struct Network {
    sizes: Vec<usize>,
    pub biases: Vec<Matrix>,
    pub weights: Vec<Matrix>,
}

/// Everything the backward pass needs from one forward pass: the activation
/// of every layer (input included) and the pre-activation z of every
/// non-input layer, in layer order.
pub(crate) struct ForwardTrace {
    pub activations: Vec<Matrix>,
    pub zs: Vec<Matrix>,
}

impl Network {
    /// Builds a network with the given layer sizes, drawing every weight and
    /// bias independently from N(0, 1). The draws are deliberately unscaled
    /// (no fan-in adjustment).
    pub fn new<R: Rng>(sizes: Vec<usize>, rng: &mut R) -> Result<Network> {
        if sizes.len() < 2 {
            return Err(Error::config(format!(
                "a network needs at least 2 layers (input and output), got {}",
                sizes.len()
            )));
        }
        if let Some(&bad) = sizes.iter().find(|&&n| n == 0) {
            return Err(Error::config(format!(
                "layer sizes must be positive, got {bad}"
            )));
        }

        let biases = sizes[1..]
            .iter()
            .map(|&n| Matrix::standard_normal(n, 1, rng))
            .collect();
        let weights = sizes
            .windows(2)
            .map(|pair| Matrix::standard_normal(pair[1], pair[0], rng))
            .collect();

        Ok(Network {
            sizes,
            biases,
            weights,
        })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total layer count, input layer included.
    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    /// Runs the plain forward pass: `a ← σ(W·a + b)` through every layer.
    /// Returns the output activation vector of length `sizes[last]`.
    pub fn feedforward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.sizes[0] {
            return Err(Error::ShapeMismatch {
                context: "input vector",
                expected: self.sizes[0],
                got: input.len(),
            });
        }

        let mut a = Matrix::column(input);
        for (b, w) in self.biases.iter().zip(self.weights.iter()) {
            a = sigmoid(&(w.clone() * a + b.clone()));
        }
        Ok(a.to_column_vec())
    }

    /// Instrumented forward pass: same recurrence as `feedforward`, but
    /// records every pre-activation and every activation (the raw input is
    /// `activations[0]`). Input shape must already be validated.
    pub(crate) fn forward_trace(&self, x: &Matrix) -> ForwardTrace {
        let mut activation = x.clone();
        let mut activations = vec![activation.clone()];
        let mut zs = Vec::with_capacity(self.weights.len());

        for (b, w) in self.biases.iter().zip(self.weights.iter()) {
            let z = w.clone() * activation + b.clone();
            activation = sigmoid(&z);
            zs.push(z);
            activations.push(activation.clone());
        }

        ForwardTrace { activations, zs }
    }
}
