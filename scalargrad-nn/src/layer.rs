use crate::error::NnError;
use crate::module::{prefixed, Module};
use crate::neuron::{Neuron, NeuronConfig};
use rand::Rng;
use scalargrad_core::Value;
use std::fmt;

/// `nout` independent neurons reading the same `nin` inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// # Errors
    /// - [`NnError::InvalidLayerSizes`] if `nin` or `nout` is 0.
    /// - [`NnError::InitializationError`] if the weights cannot be drawn.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        config: &NeuronConfig,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nout == 0 {
            return Err(NnError::InvalidLayerSizes(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, config, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { neurons })
    }

    /// Builds a layer from existing neurons. All must share the same input size.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NnError> {
        let Some(first) = neurons.first() else {
            return Err(NnError::InvalidLayerSizes(
                "a layer needs at least one neuron".to_string(),
            ));
        };
        let nin = first.nin();
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NnError::InvalidLayerSizes(format!(
                "neurons disagree on input size: {} vs {}",
                nin,
                odd.nin()
            )));
        }
        Ok(Self { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NnError> {
        self.neurons.iter().map(|n| n.output(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neuron{}", i), n.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
