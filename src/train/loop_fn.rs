use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Example;
use crate::error::{Error, Result};
use crate::eval::evaluate;
use crate::network::Network;
use crate::optim::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::update_mini_batch;

/// Trains `network` with mini-batch stochastic gradient descent.
///
/// Each epoch reshuffles `training_data` in place, partitions it into
/// contiguous mini-batches of `config.mini_batch_size` (the trailing batch
/// holds the remainder), and applies one parameter update per batch. When
/// `test_data` is supplied the network is scored against it after every
/// epoch; `EpochStats` go to the configured progress channel, or to stdout
/// when none is set.
///
/// # Early termination
/// The loop breaks before the next epoch if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
/// An in-progress mini-batch update is never interrupted.
pub fn sgd<R: Rng>(
    network: &mut Network,
    training_data: &mut [Example],
    test_data: Option<&[Example]>,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<()> {
    if config.epochs == 0 {
        return Err(Error::config("epochs must be at least 1"));
    }
    if config.mini_batch_size == 0 {
        return Err(Error::config("mini_batch_size must be at least 1"));
    }
    if training_data.is_empty() {
        return Err(Error::EmptyDataset {
            operation: "training",
        });
    }

    for epoch in 0..config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();

        training_data.shuffle(rng);
        for batch in training_data.chunks(config.mini_batch_size) {
            update_mini_batch(network, batch, optimizer)?;
        }

        // Timing covers shuffle and training only, not the evaluation below.
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let (correct, test_size) = match test_data {
            Some(test) => (Some(evaluate(network, test)?), Some(test.len())),
            None => (None, None),
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            correct,
            test_size,
            elapsed_ms,
        };

        match config.progress_tx {
            Some(ref tx) => {
                // If the receiver has been dropped, stop training.
                if tx.send(stats).is_err() {
                    break;
                }
            }
            None => println!("{stats}"),
        }
    }

    Ok(())
}
