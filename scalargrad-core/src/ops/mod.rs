//! # Operations
//!
//! Every operation here is a factory: it computes the forward value of a
//! new [`Value`](crate::Value) and installs the local gradient rule for it
//! in the same step.
//!
//! - [`arithmetic`]: `+ - * /`, negation and constant powers.
//! - [`activation`]: ReLU family, sigmoid family and GELU, plus the
//!   [`Activation`](activation::Activation) enum for selection by name.
//! - [`numeric`]: overflow-safe kernels the activations are built on.

pub mod activation;
pub mod arithmetic;
pub mod numeric;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};
