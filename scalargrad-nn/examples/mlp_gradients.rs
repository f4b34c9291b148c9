//! # Gradients of a small MLP
//!
//! Builds a 3 -> 4 -> 4 -> 1 perceptron, runs one forward pass over a few
//! samples, sums the squared errors into a single loss and backpropagates.
//! Every weight and bias then holds d(loss)/d(parameter).
//!
//! Run with `RUST_LOG=debug cargo run --example mlp_gradients` to see the
//! engine's backward-pass summaries.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{ActivationParams, Value};
use scalargrad_nn::{Init, Mlp, Module, NeuronConfig, NnError};

fn main() -> Result<(), NnError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1337);
    let hidden = NeuronConfig::from_name("leaky_relu", &ActivationParams::new().with_alpha(0.05))?
        .with_init(Init::KaimingNormal);
    let mlp = Mlp::new(3, &[4, 4, 1], &hidden, &NeuronConfig::linear(), &mut rng)?;
    println!("{}", mlp);
    println!("{} parameters", mlp.num_parameters());

    let samples = [
        ([2.0, 3.0, -1.0], 1.0),
        ([3.0, -1.0, 0.5], -1.0),
        ([0.5, 1.0, 1.0], -1.0),
        ([1.0, 1.0, -1.0], 1.0),
    ];

    let mut loss = Value::new(0.0);
    for (x, target) in &samples {
        let input: Vec<Value> = x.iter().copied().map(Value::new).collect();
        let prediction = mlp.forward(&input)?;
        println!("prediction {:>9.5} target {:>4}", prediction[0].data(), target);
        loss = loss + (&prediction[0] - *target).powf(2.0);
    }
    println!("loss {:.6}", loss.data());

    mlp.zero_grad();
    loss.backward();

    for (name, param) in mlp.named_parameters() {
        println!("{:<20} data {:>9.5} grad {:>9.5}", name, param.data(), param.grad());
    }
    Ok(())
}
