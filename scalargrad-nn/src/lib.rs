//! # scalargrad-nn
//!
//! Perceptron-style building blocks on top of [`scalargrad_core`]: a
//! [`Neuron`] computes `activation(w·x + b)`, a [`Layer`] is a row of
//! neurons over the same inputs and an [`Mlp`] chains layers. Every weight
//! and bias is a leaf [`Value`](scalargrad_core::Value), so one backward
//! pass from a loss fills in their gradients.
//!
//! The engine never resets gradients. Call [`Module::zero_grad`] before
//! each new backward pass over the same parameters.

pub mod error;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use error::NnError;
pub use init::Init;
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Neuron, NeuronConfig};
