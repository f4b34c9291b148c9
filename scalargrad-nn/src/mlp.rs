use crate::error::NnError;
use crate::layer::Layer;
use crate::module::{prefixed, Module};
use crate::neuron::NeuronConfig;
use log::debug;
use rand::Rng;
use scalargrad_core::Value;
use std::fmt;

/// A multi-layer perceptron: layers applied in sequence.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of sizes `nin -> nouts[0] -> ... -> nouts[n-1]`.
    ///
    /// Every layer but the last uses `hidden`; the last uses `output`
    /// (usually [`NeuronConfig::linear`]).
    ///
    /// # Errors
    /// - [`NnError::InvalidLayerSizes`] if `nouts` is empty or any size is 0.
    /// - [`NnError::InitializationError`] if the weights cannot be drawn.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        hidden: &NeuronConfig,
        output: &NeuronConfig,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nouts.is_empty() {
            return Err(NnError::InvalidLayerSizes(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let last = nouts.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let config = if i == last { output } else { hidden };
                Layer::new(pair[0], pair[1], config, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mlp = Self { layers };
        debug!(
            "Built MLP {:?} with {} parameters (hidden: {}, output: {})",
            sizes,
            mlp.num_parameters(),
            hidden.activation,
            output.activation
        );
        Ok(mlp)
    }

    /// Builds an MLP from existing layers, checking adjacent sizes agree.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NnError> {
        if layers.is_empty() {
            return Err(NnError::InvalidLayerSizes(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(NnError::InvalidLayerSizes(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    i,
                    pair[0].nout(),
                    i + 1,
                    pair[1].nin()
                )));
            }
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NnError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layer{}", i), l.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}
