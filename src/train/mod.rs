pub mod backprop;
pub mod epoch_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use backprop::backprop;
pub use epoch_stats::EpochStats;
pub use loop_fn::sgd;
pub use train_config::TrainConfig;
pub use trainer::update_mini_batch;
