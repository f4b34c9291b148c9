use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Errors raised while building or running network modules.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error(transparent)]
    Engine(#[from] ScalarGradError),

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid layer sizes: {0}")]
    InvalidLayerSizes(String),

    #[error("Parameter initialization failed: {0}")]
    InitializationError(String),
}
