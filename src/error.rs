/// All errors surfaced by this library.
///
/// Failures are detected at the API boundary (construction, training entry,
/// first use of a malformed example) and returned immediately; the numeric
/// core itself has no recoverable failure modes. Floating-point overflow or
/// underflow inside the sigmoid/affine arithmetic is not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid hyperparameters or network topology.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// An example's input or target length disagrees with the layer sizes.
    #[error("shape mismatch in {context}: expected length {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// Training or evaluation was invoked with no examples.
    #[error("{operation} called with an empty dataset")]
    EmptyDataset { operation: &'static str },

    /// Malformed dataset content (bad IDX header, out-of-range class label).
    #[error("invalid dataset: {reason}")]
    Dataset { reason: String },

    /// I/O failure while reading dataset files.
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a `Configuration` error from any message.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Shorthand for a `Dataset` error from any message.
    pub fn dataset(reason: impl Into<String>) -> Self {
        Error::Dataset {
            reason: reason.into(),
        }
    }
}

/// Convenience Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
