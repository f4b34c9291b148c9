use crate::error::NnError;
use scalargrad_core::Value;

/// The base trait for network building blocks (neurons, layers, networks).
///
/// Parameters are leaf [`Value`] handles shared with the module: reading
/// `grad()` on a returned handle sees the gradient of the module's own
/// weight.
pub trait Module: std::fmt::Debug {
    /// Runs the module on `input`, extending the graph rooted at the inputs.
    ///
    /// # Errors
    /// [`NnError::InputSizeMismatch`] if `input` does not have the expected
    /// number of elements.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NnError>;

    /// All learnable parameters, sub-modules included.
    fn parameters(&self) -> Vec<Value>;

    /// Parameters with hierarchical names such as `"layer0.neuron1.w2"`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name in `params` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, params: Vec<(String, Value)>) -> Vec<(String, Value)> {
    params
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}
