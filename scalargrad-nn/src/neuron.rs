use crate::error::NnError;
use crate::init::Init;
use crate::module::Module;
use log::trace;
use rand::Rng;
use scalargrad_core::{Activation, ActivationParams, Value};
use std::fmt;

/// How a [`Neuron`] is built: its activation and weight initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeuronConfig {
    pub activation: Activation,
    pub init: Init,
}

impl NeuronConfig {
    /// Config with the activation selected by name.
    ///
    /// # Errors
    /// [`NnError::Engine`] wrapping `UnknownActivation` or
    /// `UnexpectedActivationParameter`.
    pub fn from_name(name: &str, params: &ActivationParams) -> Result<Self, NnError> {
        Ok(Self {
            activation: Activation::resolve(name, params)?,
            init: Init::default(),
        })
    }

    /// A linear (identity activation) config, as used for output layers.
    pub fn linear() -> Self {
        Self::default().with_activation(Activation::Linear)
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }
}

/// A single unit computing `activation(Σ wᵢxᵢ + b)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `config.init` and a
    /// zero bias.
    ///
    /// # Errors
    /// - [`NnError::InvalidLayerSizes`] if `nin == 0`.
    /// - [`NnError::InitializationError`] if the weights cannot be drawn.
    pub fn new<R: Rng + ?Sized>(nin: usize, config: &NeuronConfig, rng: &mut R) -> Result<Self, NnError> {
        if nin == 0 {
            return Err(NnError::InvalidLayerSizes(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = config
            .init
            .sample_weights(nin, rng)?
            .into_iter()
            .map(Value::new)
            .collect();
        Ok(Self {
            weights,
            bias: Value::new(0.0),
            activation: config.activation,
        })
    }

    /// Creates a neuron with the given weights and bias.
    ///
    /// # Errors
    /// [`NnError::InvalidLayerSizes`] if `weights` is empty.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Result<Self, NnError> {
        if weights.is_empty() {
            return Err(NnError::InvalidLayerSizes(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Self {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        })
    }

    /// Forward pass on one input vector.
    ///
    /// The weighted sum starts from the bias and adds `wᵢ·xᵢ` in input order.
    pub fn output(&self, input: &[Value]) -> Result<Value, NnError> {
        if input.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        trace!(
            "Neuron pre-activation {} -> {}",
            pre_activation.data(),
            self.activation
        );
        Ok(pre_activation.activate(&self.activation))
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NnError> {
        Ok(vec![self.output(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        params.push(("b".to_string(), self.bias.clone()));
        params
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Neuron ({})", capitalize(self.activation.name()), self.nin())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
