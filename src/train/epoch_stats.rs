use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-epoch progress emitted by the training loop.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one
/// `EpochStats` value is sent at the end of every completed epoch; otherwise
/// the loop prints the `Display` form. `correct` and `test_size` are present
/// only when a test set was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Correctly classified test examples, if a test set was supplied.
    pub correct: Option<usize>,
    /// Size of the test set, if one was supplied.
    pub test_size: Option<usize>,
    /// Wall-clock duration of the epoch's shuffle-and-train phase in
    /// milliseconds (evaluation time excluded).
    pub elapsed_ms: u64,
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ms as f64 / 1000.0;
        match (self.correct, self.test_size) {
            (Some(correct), Some(total)) => {
                write!(
                    f,
                    "Epoch {}: {} / {}, took {:.2} seconds",
                    self.epoch, correct, total, secs
                )
            }
            _ => write!(f, "Epoch {} complete ({:.2} seconds)", self.epoch, secs),
        }
    }
}
