use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::error::ScalarGradError;

#[test]
fn test_topological_sort_leaf() {
    let a = Value::new(1.0);
    let sorted = topological_sort(&a);
    assert_eq!(sorted.len(), 1);
    assert!(sorted[0].ptr_eq(&a));
}

#[test]
fn test_topological_sort_operands_first() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    let d = &c + &a;
    let sorted = topological_sort(&d);

    assert_eq!(sorted.len(), 4);
    assert!(sorted.last().unwrap().ptr_eq(&d));
    let position = |v: &Value| sorted.iter().position(|s| s.ptr_eq(v)).unwrap();
    assert!(position(&a) < position(&c));
    assert!(position(&b) < position(&c));
    assert!(position(&c) < position(&d));
}

#[test]
fn test_topological_sort_visits_shared_node_once() {
    let a = Value::new(1.0);
    let b = &a * &a;
    let c = &a + &a;
    let d = &b + &c;
    let sorted = topological_sort(&d);
    // a, b, c, d
    assert_eq!(sorted.len(), 4);
    assert_eq!(sorted.iter().filter(|v| v.ptr_eq(&a)).count(), 1);
}

#[test]
fn test_topological_sort_deep_chain() {
    let x = Value::new(1.0);
    let mut acc = x.clone();
    for _ in 0..100_000 {
        acc = &acc + 1.0;
    }
    // x, then one constant leaf and one sum per step.
    assert_eq!(topological_sort(&acc).len(), 1 + 2 * 100_000);
    acc.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_backward_seeds_root() {
    let a = Value::new(5.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_reads_grad_at_invocation_time() {
    // b feeds two consumers; its rule must run only after both contributed.
    let a = Value::new(3.0);
    let b = &a * 2.0;
    let c = &b * &b;
    let d = &c + &b;
    d.backward();
    // d = 4a^2 + 2a, dd/da = 8a + 2
    assert_eq!(b.grad(), 2.0 * 6.0 + 1.0);
    assert_eq!(a.grad(), 26.0);
}

#[test]
fn test_zero_grad_graph() {
    let a = Value::new(2.0);
    let b = Value::new(-1.0);
    let c = (&a * &b).relu() + &a;
    c.backward();
    assert_ne!(a.grad(), 0.0);

    zero_grad_graph(&c);
    for node in topological_sort(&c) {
        assert_eq!(node.grad(), 0.0);
    }
}

#[test]
fn test_independent_graphs_do_not_interact() {
    let x1 = Value::new(2.0);
    let x2 = Value::new(2.0);
    let y1 = &x1 * &x1;
    let y2 = &x2 * 3.0;
    y1.backward();
    assert_eq!(x1.grad(), 4.0);
    assert_eq!(x2.grad(), 0.0);
    y2.backward();
    assert_eq!(x1.grad(), 4.0);
    assert_eq!(x2.grad(), 3.0);
}

#[test]
fn test_grad_check_reports_mismatch() {
    // A deliberately wrong "gradient": the constant leaf hides the dependency.
    let config = GradCheckConfig::default();
    let result = check_grad(
        |v: &[Value]| Ok(Value::new(v[0].data() * v[0].data()) + &v[0]),
        &[3.0],
        &config,
    );
    match result {
        Err(GradCheckError::GradientMismatch { input_index, analytical_grad, .. }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 1.0);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_grad_check_propagates_forward_errors() {
    let config = GradCheckConfig::default();
    let result = check_grad(|v: &[Value]| v[0].pow(&v[1]), &[2.0, 3.0], &config);
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPassError(ScalarGradError::UnsupportedOperandKind { .. }))
    ));
}
