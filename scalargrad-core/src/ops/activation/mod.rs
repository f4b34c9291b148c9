//! # Activation Functions
//!
//! Non-linear activations on scalar nodes, and [`Activation`], the closed
//! set of activations that can be selected at runtime by name.
//!
//! ## Implemented
//! - [`relu`](relu::relu_op), [`leaky_relu`](relu::leaky_relu_op),
//!   [`elu`](relu::elu_op)
//! - [`sigmoid`](sigmoid::sigmoid_op), [`swish`](sigmoid::swish_op),
//!   [`softplus`](sigmoid::softplus_op)
//! - [`gelu`](gelu::gelu_op)
//! - `linear` (identity, selection only)

pub mod gelu;
pub mod relu;
pub mod sigmoid;

pub use gelu::gelu_op;
pub use relu::{elu_op, leaky_relu_op, relu_op};
pub use sigmoid::{sigmoid_op, softplus_op, swish_op};

use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Names accepted by [`Activation::resolve`].
pub const SUPPORTED_ACTIVATIONS: [&str; 8] = [
    "relu",
    "sigmoid",
    "leaky_relu",
    "elu",
    "swish",
    "gelu",
    "softplus",
    "linear",
];

pub const DEFAULT_LEAKY_RELU_ALPHA: f64 = 0.01;
pub const DEFAULT_ELU_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 1.0;

/// An activation function together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Activation {
    /// Identity: no node is added to the graph.
    Linear,
    #[default]
    Relu,
    LeakyRelu { alpha: f64 },
    Elu { alpha: f64 },
    Sigmoid,
    Swish { beta: f64 },
    Softplus { beta: f64 },
    Gelu,
}

/// Optional keyword parameters for [`Activation::resolve`].
///
/// Unset parameters fall back to the activation's default
/// (`alpha = 0.01` for leaky ReLU, `alpha = 1` for ELU, `beta = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivationParams {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl ActivationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }
}

impl Activation {
    /// Resolves an activation identifier (case-insensitive) and its keyword
    /// parameters into an [`Activation`].
    ///
    /// # Errors
    /// - [`ScalarGradError::UnknownActivation`] if `name` is not one of
    ///   [`SUPPORTED_ACTIVATIONS`].
    /// - [`ScalarGradError::UnexpectedActivationParameter`] if a parameter is
    ///   given that the activation does not take.
    pub fn resolve(name: &str, params: &ActivationParams) -> Result<Self, ScalarGradError> {
        let key = name.trim().to_lowercase();
        let activation = match key.as_str() {
            "linear" => Activation::Linear,
            "relu" => Activation::Relu,
            "sigmoid" => Activation::Sigmoid,
            "gelu" => Activation::Gelu,
            "leaky_relu" => Activation::LeakyRelu {
                alpha: params.alpha.unwrap_or(DEFAULT_LEAKY_RELU_ALPHA),
            },
            "elu" => Activation::Elu {
                alpha: params.alpha.unwrap_or(DEFAULT_ELU_ALPHA),
            },
            "swish" => Activation::Swish {
                beta: params.beta.unwrap_or(DEFAULT_BETA),
            },
            "softplus" => Activation::Softplus {
                beta: params.beta.unwrap_or(DEFAULT_BETA),
            },
            _ => {
                return Err(ScalarGradError::UnknownActivation {
                    name: name.to_string(),
                    supported: SUPPORTED_ACTIVATIONS.iter().map(|s| s.to_string()).collect(),
                })
            }
        };

        let takes_alpha = matches!(activation, Activation::LeakyRelu { .. } | Activation::Elu { .. });
        let takes_beta = matches!(activation, Activation::Swish { .. } | Activation::Softplus { .. });
        let unexpected = if params.alpha.is_some() && !takes_alpha {
            Some("alpha")
        } else if params.beta.is_some() && !takes_beta {
            Some("beta")
        } else {
            None
        };
        if let Some(parameter) = unexpected {
            return Err(ScalarGradError::UnexpectedActivationParameter {
                activation: activation.name().to_string(),
                parameter: parameter.to_string(),
            });
        }

        Ok(activation)
    }

    /// The identifier this activation resolves from.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::LeakyRelu { .. } => "leaky_relu",
            Activation::Elu { .. } => "elu",
            Activation::Sigmoid => "sigmoid",
            Activation::Swish { .. } => "swish",
            Activation::Softplus { .. } => "softplus",
            Activation::Gelu => "gelu",
        }
    }

    /// Applies the activation to `input`. `Linear` returns `input` itself.
    pub fn apply(&self, input: &Value) -> Value {
        match *self {
            Activation::Linear => input.clone(),
            Activation::Relu => relu_op(input),
            Activation::LeakyRelu { alpha } => leaky_relu_op(input, alpha),
            Activation::Elu { alpha } => elu_op(input, alpha),
            Activation::Sigmoid => sigmoid_op(input),
            Activation::Swish { beta } => swish_op(input, beta),
            Activation::Softplus { beta } => softplus_op(input, beta),
            Activation::Gelu => gelu_op(input),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    /// Resolves `s` with default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::resolve(s, &ActivationParams::default())
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::LeakyRelu { alpha } | Activation::Elu { alpha } => {
                write!(f, "{}(alpha={})", self.name(), alpha)
            }
            Activation::Swish { beta } | Activation::Softplus { beta } => {
                write!(f, "{}(beta={})", self.name(), beta)
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl Value {
    /// Applies `activation` to this node. See [`Activation::apply`].
    pub fn activate(&self, activation: &Activation) -> Value {
        activation.apply(self)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
