use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::Value;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5ca1ab1e)
}

#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::new).collect()
}

/// Sum of squared errors between `predictions` and `targets`.
#[allow(dead_code)]
pub fn squared_error(predictions: &[Value], targets: &[f64]) -> Value {
    predictions
        .iter()
        .zip(targets)
        .fold(Value::new(0.0), |acc, (p, &t)| acc + (p - t).powf(2.0))
}
