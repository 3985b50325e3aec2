use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::Network;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if learning_rate <= 0.0 || !learning_rate.is_finite() {
            return Err(Error::config(format!(
                "learning rate must be a positive finite number, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies one gradient-descent step to every layer:
    /// `param ← param - learning_rate · gradient`.
    ///
    /// The gradients must already be averaged over the mini-batch and indexed
    /// like the network's biases/weights.
    pub fn step(&self, network: &mut Network, nabla_b: &[Matrix], nabla_w: &[Matrix]) {
        let lr = self.learning_rate;
        for (w, nw) in network.weights.iter_mut().zip(nabla_w.iter()) {
            *w = w.clone() - nw.map(|x| x * lr);
        }
        for (b, nb) in network.biases.iter_mut().zip(nabla_b.iter()) {
            *b = b.clone() - nb.map(|x| x * lr);
        }
    }
}
