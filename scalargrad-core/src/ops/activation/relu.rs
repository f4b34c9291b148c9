use crate::autograd::BackwardOp;
use crate::value::Value;

/// Rectified Linear Unit: `max(0, x)`.
///
/// The gradient at exactly `x = 0` is taken as 0.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let out = if x > 0.0 { x } else { 0.0 };
    Value::from_op(out, vec![input.clone()], "ReLU", BackwardOp::Relu)
}

/// Leaky ReLU: `x` if `x > 0`, else `alpha * x`.
pub fn leaky_relu_op(input: &Value, alpha: f64) -> Value {
    let x = input.data();
    let out = if x > 0.0 { x } else { alpha * x };
    Value::from_op(
        out,
        vec![input.clone()],
        format!("LeakyReLU({})", alpha),
        BackwardOp::LeakyRelu { alpha },
    )
}

/// Exponential Linear Unit: `x` if `x > 0`, else `alpha * (e^x - 1)`.
///
/// For `x <= 0` the derivative is `alpha * e^x`, which equals `out + alpha`.
pub fn elu_op(input: &Value, alpha: f64) -> Value {
    let x = input.data();
    // exp_m1 keeps precision near 0 and tends to -1 without overflow.
    let out = if x > 0.0 { x } else { alpha * x.exp_m1() };
    Value::from_op(
        out,
        vec![input.clone()],
        format!("ELU({})", alpha),
        BackwardOp::Elu { alpha },
    )
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    pub fn leaky_relu(&self, alpha: f64) -> Value {
        leaky_relu_op(self, alpha)
    }

    pub fn elu(&self, alpha: f64) -> Value {
        elu_op(self, alpha)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
