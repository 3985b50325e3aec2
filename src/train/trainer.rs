use crate::data::Example;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::Network;
use crate::optim::Sgd;
use crate::train::backprop::backprop;

/// Applies one gradient-descent step computed from a whole mini-batch.
///
/// Gradients from every example are summed into a zero-initialized
/// accumulator, averaged by the actual batch size, and applied in a single
/// `Sgd::step`. A malformed example aborts before any parameter is touched.
pub fn update_mini_batch(network: &mut Network, batch: &[Example], optimizer: &Sgd) -> Result<()> {
    if batch.is_empty() {
        return Err(Error::config("mini-batch must contain at least 1 example"));
    }

    // Validate every example up front so the update is all-or-nothing.
    let columns: Vec<(Matrix, Matrix)> = batch
        .iter()
        .map(|example| example_columns(network, example))
        .collect::<Result<_>>()?;

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

    for (x, y) in &columns {
        let (delta_nabla_b, delta_nabla_w) = backprop(network, x, y);
        for (nb, dnb) in nabla_b.iter_mut().zip(delta_nabla_b) {
            *nb = nb.clone() + dnb;
        }
        for (nw, dnw) in nabla_w.iter_mut().zip(delta_nabla_w) {
            *nw = nw.clone() + dnw;
        }
    }

    let inv_batch = 1.0 / batch.len() as f64;
    let nabla_b_avg: Vec<Matrix> = nabla_b.iter().map(|nb| nb.map(|x| x * inv_batch)).collect();
    let nabla_w_avg: Vec<Matrix> = nabla_w.iter().map(|nw| nw.map(|x| x * inv_batch)).collect();

    optimizer.step(network, &nabla_b_avg, &nabla_w_avg);
    Ok(())
}

/// Checks one example against the network's layer sizes and converts it into
/// `(x, y)` column vectors for the backward pass.
fn example_columns(network: &Network, example: &Example) -> Result<(Matrix, Matrix)> {
    let sizes = network.sizes();
    let input_size = sizes[0];
    let output_size = sizes[sizes.len() - 1];

    if example.input.len() != input_size {
        return Err(Error::ShapeMismatch {
            context: "input vector",
            expected: input_size,
            got: example.input.len(),
        });
    }

    let target = example.target.one_hot(output_size)?;
    Ok((Matrix::column(&example.input), Matrix::column(&target)))
}
