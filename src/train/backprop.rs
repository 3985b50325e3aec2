use crate::activation::sigmoid_prime;
use crate::loss::QuadraticCost;
use crate::math::matrix::Matrix;
use crate::network::Network;

/// Computes the cost gradient for a single example `(x, y)` by reverse
/// accumulation through the layer chain.
///
/// Returns `(nabla_b, nabla_w)` shaped and indexed exactly like the network's
/// biases and weights. `x` and `y` must be column vectors of the input and
/// output layer sizes; callers validate shapes before building them.
pub fn backprop(network: &Network, x: &Matrix, y: &Matrix) -> (Vec<Matrix>, Vec<Matrix>) {
    let trace = network.forward_trace(x);
    let layers = network.weights.len();

    let mut nabla_b: Vec<Matrix> = network
        .biases
        .iter()
        .map(|b| Matrix::zeros(b.rows, b.cols))
        .collect();
    let mut nabla_w: Vec<Matrix> = network
        .weights
        .iter()
        .map(|w| Matrix::zeros(w.rows, w.cols))
        .collect();

    // Output layer: δ = ∂C/∂a ⊙ σ'(z_L).
    let mut delta = QuadraticCost::derivative(&trace.activations[layers], y)
        .hadamard(&sigmoid_prime(&trace.zs[layers - 1]));
    nabla_b[layers - 1] = delta.clone();
    nabla_w[layers - 1] = delta.clone() * trace.activations[layers - 1].transpose();

    // Walk the remaining layers from the output back toward the input. The
    // error is pulled backward through the weights of the layer *ahead* of
    // the current one: δ_l = (W_{l+1}ᵀ · δ_{l+1}) ⊙ σ'(z_l).
    for l in (0..layers - 1).rev() {
        let sp = sigmoid_prime(&trace.zs[l]);
        delta = (network.weights[l + 1].transpose() * delta).hadamard(&sp);
        nabla_b[l] = delta.clone();
        // activations[l] is the activation feeding layer l (the raw input
        // when l is the first non-input layer).
        nabla_w[l] = delta.clone() * trace.activations[l].transpose();
    }

    (nabla_b, nabla_w)
}
