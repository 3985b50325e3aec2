pub mod activation;
pub mod data;
pub mod error;
pub mod eval;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;
pub mod viz;

// Convenience re-exports
pub use data::{Example, Target};
pub use error::{Error, Result};
pub use eval::evaluate;
pub use loss::QuadraticCost;
pub use math::matrix::Matrix;
pub use network::Network;
pub use optim::Sgd;
pub use train::{backprop, sgd, update_mini_batch, EpochStats, TrainConfig};
pub use viz::{Comparison, Inspector};
