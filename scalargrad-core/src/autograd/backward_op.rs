use crate::ops::numeric;
use crate::value::Node;

/// Local gradient rule of a node: one variant per operation kind, carrying
/// only what that operation's partial derivatives need.
///
/// The rule is applied by [`BackwardOp::apply`] during the backward pass.
/// It reads the node's gradient at *invocation* time, after every consumer
/// of the node has already added its contribution, and adds
/// `∂out/∂input_i * out.grad` into each operand.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp {
    /// Inputs and constants: nothing to propagate.
    Leaf,
    Add,
    Mul,
    /// `x^exponent` with a constant exponent.
    Pow { exponent: f64 },
    Relu,
    LeakyRelu { alpha: f64 },
    Elu { alpha: f64 },
    Sigmoid,
    /// `gate` is σ(βx) as computed in the forward pass.
    Swish { beta: f64, gate: f64 },
    /// `gate` is σ(βx), or exactly 1 in the saturated region.
    Softplus { gate: f64 },
    Gelu,
}

impl BackwardOp {
    /// Runs the local chain-rule step for `out`.
    pub(crate) fn apply(&self, out: &Node) {
        let upstream = out.grad.get();
        let operands = &out.operands;
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add => {
                for operand in operands {
                    operand.accumulate_grad(upstream);
                }
            }
            BackwardOp::Mul => {
                // ∂(Π x_j)/∂x_i is the product of every other factor.
                for (i, operand) in operands.iter().enumerate() {
                    let others: f64 = operands
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, v)| v.data())
                        .product();
                    operand.accumulate_grad(others * upstream);
                }
            }
            unary => {
                for operand in operands {
                    let local = unary.unary_derivative(operand.data(), out.data);
                    operand.accumulate_grad(local * upstream);
                }
            }
        }
    }

    /// d(out)/d(x) for single-operand operations.
    fn unary_derivative(&self, x: f64, out: f64) -> f64 {
        match *self {
            BackwardOp::Pow { exponent } => exponent * x.powf(exponent - 1.0),
            BackwardOp::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            BackwardOp::LeakyRelu { alpha } => {
                if x > 0.0 {
                    1.0
                } else {
                    alpha
                }
            }
            BackwardOp::Elu { alpha } => {
                if x > 0.0 {
                    1.0
                } else {
                    out + alpha
                }
            }
            // Clamped outputs are exactly 0 or 1, which makes this exactly 0.
            BackwardOp::Sigmoid => out * (1.0 - out),
            BackwardOp::Swish { beta, gate } => gate + beta * out * (1.0 - gate),
            BackwardOp::Softplus { gate } => gate,
            BackwardOp::Gelu => numeric::gelu_derivative(x),
            BackwardOp::Leaf | BackwardOp::Add | BackwardOp::Mul => 0.0,
        }
    }
}
