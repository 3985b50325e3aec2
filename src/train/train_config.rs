use crate::train::epoch_stats::EpochStats;
use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

/// Configuration for an `sgd` training run.
///
/// # Fields
/// - `epochs`: total number of full passes over the training data
/// - `mini_batch_size`: examples per mini-batch; use `1` for online SGD
/// - `progress_tx`: optional channel sender; one `EpochStats` is sent per
///   completed epoch. If the receiver is dropped the loop terminates early
///   (clean shutdown). When absent, stats are printed instead.
/// - `stop_flag`: optional atomic flag; when set to `true` from another
///   thread the loop terminates before the next epoch.
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(epochs: usize, mini_batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
