use crate::value::{Node, Value};
use std::collections::HashSet;

/// Builds a topological order of the graph rooted at `root`.
///
/// Depth-first, post-order: every node is appended after all of its
/// operands, so the returned vector lists leaves first and `root` last.
/// Nodes are keyed by identity (`Rc` pointer), so a vertex shared by several
/// consumers (diamond dependencies) appears exactly once.
///
/// Uses an explicit stack rather than recursion so long chains (e.g. a sum
/// over thousands of inputs) cannot overflow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<*const Node> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands already pushed?)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_ptr()) {
            continue;
        }
        stack.push((node.clone(), true));
        // Reversed so operands are visited in their declared order.
        for operand in node.operands().iter().rev() {
            if !visited.contains(&operand.node_ptr()) {
                stack.push((operand.clone(), false));
            }
        }
    }

    sorted_list
}
