use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operation received an operand it cannot promote or differentiate,
    /// e.g. a graph node used as an exponent.
    #[error("Unsupported operand kind for operation '{operation}': {operand}")]
    UnsupportedOperandKind { operation: String, operand: String },

    #[error("Unknown activation '{name}'. Available: {supported:?}")]
    UnknownActivation {
        name: String,
        supported: Vec<String>,
    },

    #[error("Activation '{activation}' does not take parameter '{parameter}'")]
    UnexpectedActivationParameter {
        activation: String,
        parameter: String,
    },
}
