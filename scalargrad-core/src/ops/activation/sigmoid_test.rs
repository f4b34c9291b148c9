use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_forward_backward() {
    let x = Value::new(0.0);
    let s = x.sigmoid();
    assert_eq!(s.data(), 0.5);
    assert_eq!(s.op(), "sigmoid");
    s.backward();
    assert_eq!(x.grad(), 0.25);
}

#[test]
fn test_sigmoid_saturates_high() {
    let x = Value::new(50.0);
    let s = x.sigmoid();
    assert_eq!(s.data(), 1.0);
    s.backward();
    assert_eq!(x.grad(), 0.0);
    assert!(!x.grad().is_nan());
}

#[test]
fn test_sigmoid_saturates_low() {
    let x = Value::new(-50.0);
    let s = x.sigmoid();
    assert_eq!(s.data(), 0.0);
    s.backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_swish_beta_one() {
    let x = Value::new(1.0);
    let out = x.swish(1.0);
    let sig = 1.0 / (1.0 + (-1.0_f64).exp());
    assert_relative_eq!(out.data(), sig, epsilon = 1e-15);
    assert_eq!(out.op(), "Swish(1)");
    out.backward();
    // out + σ(1 - out)
    let expected = out.data() + sig * (1.0 - out.data());
    assert_relative_eq!(x.grad(), expected, epsilon = 1e-15);
}

#[test]
fn test_swish_tails() {
    let big = Value::new(100.0);
    let out = big.swish(2.0);
    assert_eq!(out.data(), 100.0);
    out.backward();
    assert_eq!(big.grad(), 1.0);

    let small = Value::new(-100.0);
    let out = small.swish(2.0);
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert_eq!(small.grad(), 0.0);
}

#[test]
fn test_softplus_asymptote() {
    let x = Value::new(30.0);
    let out = x.softplus(1.0);
    assert_relative_eq!(out.data(), 30.0, epsilon = 1e-9);
    assert!(out.data().is_finite());
    out.backward();
    assert_relative_eq!(x.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_softplus_regular_region() {
    let x = Value::new(0.5);
    let out = x.softplus(2.0);
    let expected = (1.0 + 1.0_f64.exp()).ln() / 2.0;
    assert_relative_eq!(out.data(), expected, epsilon = 1e-15);
    assert_eq!(out.op(), "Softplus(2)");
    out.backward();
    assert_relative_eq!(x.grad(), 1.0 / (1.0 + (-1.0_f64).exp()), epsilon = 1e-15);
}

#[test]
fn test_sigmoid_family_grad_check() {
    let config = GradCheckConfig::default();
    for &x in &[-3.0, -0.8, 0.0, 0.6, 4.5] {
        let result = check_grad(
            |v: &[Value]| Ok(v[0].sigmoid() * v[0].swish(1.5) + v[0].softplus(0.7)),
            &[x],
            &config,
        );
        assert!(result.is_ok(), "sigmoid family grad check failed at {}: {:?}", x, result.err());
    }
}

#[test]
fn test_swish_general_beta_grad_check() {
    let config = GradCheckConfig::default();
    for &beta in &[0.5, 1.0, 3.0] {
        let result = check_grad(|v: &[Value]| Ok(v[0].swish(beta)), &[0.9], &config);
        assert!(result.is_ok(), "swish(beta={}) grad check failed: {:?}", beta, result.err());
    }
}
