//! # Autograd
//!
//! The backward scheduler. [`run_backward`] sorts the graph rooted at an
//! output node topologically, seeds the output's gradient with 1 and replays
//! the nodes in reverse order, invoking each node's local gradient rule
//! ([`BackwardOp`]). Since a node is only replayed after every consumer has
//! added its contribution, a node used several times receives the sum of
//! all of them.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::topological_sort;

use crate::value::Value;
use log::{debug, trace};

/// Computes `d(root)/d(node)` for every node reachable from `root` and adds
/// it into that node's gradient.
///
/// `root.grad` is *set* to 1; every other reachable node is expected to hold
/// 0 beforehand. Gradients are never reset here, so running a second pass
/// over the same leaves without [`zero_grad_graph`] (or
/// [`Value::zero_grad`]) accumulates into the previous results.
pub fn run_backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    debug!(
        "backward: {} nodes in topological order (root op '{}')",
        sorted_nodes.len(),
        root.op()
    );

    root.set_grad(1.0);
    for node in sorted_nodes.iter().rev() {
        trace!(
            "backward: op '{}' data {} grad {}",
            node.op(),
            node.data(),
            node.grad()
        );
        node.node.backward_op.apply(&node.node);
    }
}

/// Zeros the gradient of every node reachable from `root`, `root` included.
pub fn zero_grad_graph(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}

impl Value {
    /// Runs the backward pass from this node. See [`run_backward`].
    pub fn backward(&self) {
        run_backward(self);
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
