//! Arithmetic operations: add, multiply, constant power and everything
//! derived from them (negate, subtract, divide).
//!
//! Only `add`, `mul` and `pow` carry gradient code. Negation, subtraction
//! and division are compositions (`x·(−1)`, `x + (−y)`, `x·y^(−1)`), so their
//! gradients follow from the chain rule without dedicated rules.

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::{Operand, Value};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// `a + b`.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    Value::from_op(a.data() + b.data(), vec![a.clone(), b], "+", BackwardOp::Add)
}

/// `a * b`.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    Value::from_op(a.data() * b.data(), vec![a.clone(), b], "*", BackwardOp::Mul)
}

/// `base ^ exponent` for a constant exponent.
///
/// # Errors
/// [`ScalarGradError::UnsupportedOperandKind`] if `exponent` is a graph node:
/// differentiating with respect to the exponent is not supported.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
    match exponent.into() {
        Operand::Constant(e) => Ok(powf_op(base, e)),
        other => Err(ScalarGradError::UnsupportedOperandKind {
            operation: "pow".to_string(),
            operand: format!("{} used as exponent; only int/float powers are supported", other.kind()),
        }),
    }
}

/// Infallible form of [`pow_op`] for an `f64` exponent.
pub fn powf_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        vec![base.clone()],
        format!("**{}", exponent),
        BackwardOp::Pow { exponent },
    )
}

/// `-a`, built as `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, -1.0)
}

/// `a - b`, built as `a + (-b)`.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    add_op(a, neg_op(&b))
}

/// `a / b`, built as `a * b^-1`.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    mul_op(a, powf_op(&b, -1.0))
}

// --- Value methods ---
// `+ - * /` and unary `-` go through the std::ops impls below.

impl Value {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    pub fn powf(&self, exponent: f64) -> Value {
        powf_op(self, exponent)
    }
}

// --- std::ops: Value (owned or borrowed) on the left ---

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<R: Into<Operand>> $trait<R> for &Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<R: Into<Operand>> $trait<R> for Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(&self, rhs)
            }
        }
    };
}

binary_operator!(Add, add, add_op);
binary_operator!(Sub, sub, sub_op);
binary_operator!(Mul, mul, mul_op);
binary_operator!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// --- std::ops: f64 on the left (2.0 * x, 1.0 - x, ...) ---

macro_rules! reflected_operator {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                let $lhs = Value::new(self);
                let $rhs = rhs;
                $body
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                let $lhs = Value::new(self);
                let $rhs = &rhs;
                $body
            }
        }
    };
}

// other + self
reflected_operator!(Add, add, |lhs, rhs| add_op(rhs, lhs));
// other * self
reflected_operator!(Mul, mul, |lhs, rhs| mul_op(rhs, lhs));
// other + (-self)
reflected_operator!(Sub, sub, |lhs, rhs| add_op(&lhs, neg_op(rhs)));
// other * self^-1
reflected_operator!(Div, div, |lhs, rhs| mul_op(&lhs, powf_op(rhs, -1.0)));

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
