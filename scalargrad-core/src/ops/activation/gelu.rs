use crate::autograd::BackwardOp;
use crate::ops::numeric;
use crate::value::Value;

/// Gaussian Error Linear Unit, tanh approximation:
/// `0.5x(1 + tanh(√(2/π)(x + 0.044715x³)))`.
///
/// The backward rule is the exact derivative of this approximation
/// ([`numeric::gelu_derivative`]), not of the erf-based GELU.
pub fn gelu_op(input: &Value) -> Value {
    Value::from_op(
        numeric::gelu(input.data()),
        vec![input.clone()],
        "GELU",
        BackwardOp::Gelu,
    )
}

impl Value {
    pub fn gelu(&self) -> Value {
        gelu_op(self)
    }
}
