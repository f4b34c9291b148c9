//! The sigmoid family: sigmoid, swish and softplus.
//!
//! All three have saturating tails. They are evaluated through the
//! branch-based kernels in [`numeric`] so that `exp` never sees a large
//! argument, and their gradients in the saturated region are the exact
//! limits (0 or 1) rather than a diverging or NaN value.

use crate::autograd::BackwardOp;
use crate::ops::numeric::{self, SATURATION_BOUND};
use crate::value::Value;
use log::trace;

/// Reports that an activation took its clamped branch. Expected and handled,
/// never an error.
fn note_saturation(activation: &str, z: f64) {
    if numeric::is_saturated(z) {
        trace!(
            "{}: argument {} outside ±{}, using saturated branch",
            activation,
            z,
            SATURATION_BOUND
        );
    }
}

/// σ(x) = 1 / (1 + e^(−x)), clamped to exactly 0 below −20 and 1 above 20.
///
/// Derivative σ(1 − σ), which is exactly 0 in the clamped regions.
pub fn sigmoid_op(input: &Value) -> Value {
    let x = input.data();
    note_saturation("sigmoid", x);
    Value::from_op(
        numeric::sigmoid(x),
        vec![input.clone()],
        "sigmoid",
        BackwardOp::Sigmoid,
    )
}

/// Swish(x) = x·σ(βx).
///
/// Derivative σ(βx) + β·out·(1 − σ(βx)); for β = 1 this is the familiar
/// `out + σ(x)(1 − out)`.
pub fn swish_op(input: &Value, beta: f64) -> Value {
    let x = input.data();
    note_saturation("swish", beta * x);
    let gate = numeric::sigmoid(beta * x);
    Value::from_op(
        x * gate,
        vec![input.clone()],
        format!("Swish({})", beta),
        BackwardOp::Swish { beta, gate },
    )
}

/// Softplus(x) = ln(1 + e^(βx)) / β.
///
/// For βx > 20 the value saturates to `x` and the gradient to 1; otherwise
/// the gradient is σ(βx).
pub fn softplus_op(input: &Value, beta: f64) -> Value {
    let x = input.data();
    let z = beta * x;
    let (out, gate) = if z > SATURATION_BOUND {
        trace!("softplus: argument {} above {}, using linear branch", z, SATURATION_BOUND);
        (x, 1.0)
    } else {
        (numeric::softplus(z) / beta, numeric::sigmoid(z))
    };
    Value::from_op(
        out,
        vec![input.clone()],
        format!("Softplus({})", beta),
        BackwardOp::Softplus { gate },
    )
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }

    pub fn swish(&self, beta: f64) -> Value {
        swish_op(self, beta)
    }

    pub fn softplus(&self, beta: f64) -> Value {
        softplus_op(self, beta)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
