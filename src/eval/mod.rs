use crate::data::Example;
use crate::error::{Error, Result};
use crate::network::Network;

/// Counts how many examples the network classifies correctly.
///
/// Each example is run through the plain forward pass and the index of the
/// largest output component is taken as the predicted class. Targets may be
/// one-hot vectors (class = index of their maximum) or bare integer labels.
/// Neither the examples nor the network are mutated.
pub fn evaluate(network: &Network, data: &[Example]) -> Result<usize> {
    if data.is_empty() {
        return Err(Error::EmptyDataset {
            operation: "evaluate",
        });
    }

    let mut correct = 0;
    for example in data {
        let output = network.feedforward(&example.input)?;
        if argmax(&output) == example.target.class() {
            correct += 1;
        }
    }
    Ok(correct)
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
