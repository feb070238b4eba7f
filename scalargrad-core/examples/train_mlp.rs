//! # Training a small MLP with scalar autograd
//!
//! Builds the lecture network MLP(3, [4, 4, 1]) with random weights, trains
//! it with full-batch gradient descent on four samples and prints the loss
//! curve and the final predictions.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp -- [seed]`

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{Module, MseLoss, Reduction};
use scalargrad_core::train::{fit, TrainConfig};
use scalargrad_core::{ScalarGradError, Tape};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| ScalarGradError::ConfigurationError(format!("seed {:?}: {}", s, e)))
        })
        .transpose()?
        .unwrap_or(1337);

    // --- 1. Data ---
    let samples = vec![
        (vec![2.0, 3.0, -1.0], 1.0),
        (vec![3.0, -1.0, 0.5], -1.0),
        (vec![0.5, 1.0, 1.0], -1.0),
        (vec![1.0, 1.0, -1.0], 1.0),
    ];

    // --- 2. Model ---
    let mut tape = Tape::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let model = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng)?;
    info!("Model has {} parameters (seed {})", model.num_parameters(), seed);

    // --- 3. Training ---
    let config = TrainConfig::default();
    let report = fit(
        &mut tape,
        &model,
        &samples,
        &MseLoss::new(Reduction::Sum),
        &config,
    )?;

    for (step, loss) in report.losses.iter().enumerate().step_by(10) {
        println!("step {:>3}  loss {:.6}", step + 1, loss);
    }
    if let Some(loss) = report.final_loss() {
        println!("final     loss {:.6}", loss);
    }
    for ((_, target), prediction) in samples.iter().zip(&report.predictions) {
        println!("target {:>5.2}  prediction {:>8.5}", target, prediction);
    }
    Ok(())
}
