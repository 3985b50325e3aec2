pub mod dataset;
pub mod idx;

pub use dataset::{Example, Target};
pub use idx::{decode_idx_pair, load_data_wrapper, read_idx_pair, LabelEncoding};
