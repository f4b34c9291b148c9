use crate::autograd::BackwardOp;
use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Internal graph vertex: forward value, accumulated gradient and edges.
pub(crate) struct Node {
    /// Forward result. Never changes after construction.
    pub(crate) data: f64,
    /// d(root)/d(this node), accumulated by the backward pass.
    pub(crate) grad: Cell<f64>,
    /// Label of the producing operation, for debugging only.
    pub(crate) op: Cow<'static, str>,
    /// Direct predecessors, in the order the operation received them.
    pub(crate) operands: Vec<Value>,
    /// Local chain-rule step for this node.
    pub(crate) backward_op: BackwardOp,
}

impl Drop for Node {
    // Unlinks operands iteratively; the default recursive drop would overflow
    // the stack on long chains such as a running sum over many inputs.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(value) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(value.node) {
                pending.append(&mut node.operands);
            }
        }
    }
}

/// Handle to a scalar node in the computation graph.
///
/// Cloning a `Value` is cheap (shallow clone via `Rc`) and yields another
/// handle to the *same* vertex. Equality of graph vertices is reference
/// identity, see [`Value::ptr_eq`]; two leaves holding the same number are
/// distinct vertices.
///
/// `Value` is neither `Send` nor `Sync`: a graph belongs to one thread.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<Node>,
}

impl Value {
    /// Creates a leaf node (input, constant or parameter) with zero gradient.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Vec::new(), "", BackwardOp::Leaf)
    }

    /// Creates an interior node. Only operations call this, so a node is
    /// always built with its value and backward rule in one step.
    pub(crate) fn from_op(
        data: f64,
        operands: Vec<Value>,
        op: impl Into<Cow<'static, str>>,
        backward_op: BackwardOp,
    ) -> Self {
        Value {
            node: Rc::new(Node {
                data,
                grad: Cell::new(0.0),
                op: op.into(),
                operands,
                backward_op,
            }),
        }
    }

    /// Returns the forward value.
    #[inline]
    pub fn data(&self) -> f64 {
        self.node.data
    }

    /// Returns the gradient accumulated so far.
    #[inline]
    pub fn grad(&self) -> f64 {
        self.node.grad.get()
    }

    /// Resets this node's gradient to 0.
    ///
    /// Gradients are never reset implicitly. Callers that run several
    /// backward passes over the same leaves must zero them in between.
    pub fn zero_grad(&self) {
        self.node.grad.set(0.0);
    }

    /// The tag of the operation that produced this node (`""` for leaves).
    pub fn op(&self) -> &str {
        &self.node.op
    }

    pub fn operands(&self) -> &[Value] {
        &self.node.operands
    }

    pub fn is_leaf(&self) -> bool {
        self.node.operands.is_empty()
    }

    /// Returns `true` if both handles point at the same graph vertex.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Identity of the underlying vertex, stable for the node's lifetime.
    pub(crate) fn node_ptr(&self) -> *const Node {
        Rc::as_ptr(&self.node)
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.grad.set(grad);
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.node.grad.set(self.node.grad.get() + delta);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Debug for Value {
    // Operands are not printed: a deep graph would flood the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Value");
        s.field("data", &self.data()).field("grad", &self.grad());
        if !self.is_leaf() {
            s.field("op", &self.op());
        }
        s.finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

/// Right-hand side of an operation: either an existing node or a raw number.
///
/// Raw numbers are promoted to fresh leaf nodes, so numbers and nodes
/// interoperate in every binary operation.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Constant(f64),
}

impl Operand {
    /// Promotes the operand into a graph node.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Operand::Node(v) => v,
            Operand::Constant(c) => Value::new(c),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Operand::Node(_) => "graph node",
            Operand::Constant(_) => "constant",
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Node(v)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        Operand::Node(v.clone())
    }
}

macro_rules! constant_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(c: $t) -> Self {
                    Operand::Constant(c as f64)
                }
            }
        )*
    };
}

constant_operand!(f64, f32, i32, i64, u32, usize);

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
