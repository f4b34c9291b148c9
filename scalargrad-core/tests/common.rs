use scalargrad_core::Value;

/// Central finite difference of a one-input graph builder at `x`.
#[allow(dead_code)]
pub fn central_difference<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(&Value) -> Value,
{
    let plus = f(&Value::new(x + eps)).data();
    let minus = f(&Value::new(x - eps)).data();
    (plus - minus) / (2.0 * eps)
}

/// Builds `f` on a fresh leaf at `x`, runs backward and returns the leaf's gradient.
#[allow(dead_code)]
pub fn analytical_grad<F>(f: F, x: f64) -> f64
where
    F: Fn(&Value) -> Value,
{
    let leaf = Value::new(x);
    f(&leaf).backward();
    leaf.grad()
}
