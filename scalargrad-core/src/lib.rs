//! # scalargrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar `f64` values.
//!
//! Every arithmetic or activation operation on a [`Value`] creates a new node
//! that remembers its operands and how to route gradient back to them.
//! Calling [`Value::backward`] on an output walks that graph once, in reverse
//! topological order, and accumulates `d(output)/d(node)` into every node
//! reachable from it.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(3.0);
//! let b = &a * &a + 2.0 * &a; // a^2 + 2a
//! b.backward();
//! assert_eq!(b.data(), 15.0);
//! assert_eq!(a.grad(), 8.0); // 2a + 2
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;

pub use error::ScalarGradError;
pub use ops::activation::{Activation, ActivationParams, SUPPORTED_ACTIVATIONS};
pub use value::{Operand, Value};

// Re-export traits required by public generic kernels
pub use num_traits;
