//! # Mini-batch gradient descent
//!
//! Trains an MLP(2, [8, 1]) on noisy samples of `y = tanh(x0 - x1)` using a
//! shuffling `DataLoader`. Every batch is built on the tape, differentiated and
//! then rewound, so the tape only ever holds the parameters plus one batch.
//!
//! ## Running
//! `RUST_LOG=debug cargo run -p scalargrad-data --example minibatch_sgd`

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{Module, MseLoss, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{ScalarGradError, Tape};
use scalargrad_data::{DataLoader, RandomSampler, VecDataset};

type Sample = (Vec<f64>, f64);

fn batch_loss(
    tape: &Tape,
    model: &Mlp,
    loss: &MseLoss,
    batch: &[Sample],
    optimizer: &mut Sgd,
) -> Result<f64, ScalarGradError> {
    let mut predictions = Vec::with_capacity(batch.len());
    for (inputs, _) in batch {
        predictions.extend(model.predict(tape, inputs)?);
    }
    let targets: Vec<f64> = batch.iter().map(|(_, y)| *y).collect();
    let total = loss.calculate(&predictions, &targets)?;
    optimizer.zero_grad(tape)?;
    total.backward()?;
    optimizer.step(tape)?;
    Ok(total.value())
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(7);

    // --- 1. Data ---
    let samples: Vec<Sample> = (0..64)
        .map(|_| {
            let x0: f64 = rng.gen_range(-1.0..1.0);
            let x1: f64 = rng.gen_range(-1.0..1.0);
            let noise: f64 = rng.gen_range(-0.05..0.05);
            (vec![x0, x1], (x0 - x1).tanh() + noise)
        })
        .collect();
    let sampler = RandomSampler::with_seed(false, None, 11);
    let mut loader = DataLoader::new(VecDataset::new(samples), 8, sampler, false, None)?;

    // --- 2. Model ---
    let mut tape = Tape::new();
    let model = Mlp::new(&tape, 2, &[8, 1], &mut rng)?;
    let checkpoint = tape.checkpoint();
    let mut optimizer = Sgd::new(model.parameter_ids(), 0.1)?;
    let loss = MseLoss::new(Reduction::Mean);
    info!(
        "{} parameters, {} batches per epoch",
        model.num_parameters(),
        loader.num_batches()
    );

    // --- 3. Training ---
    for epoch in 1..=30 {
        let mut epoch_loss = 0.0;
        let mut batches = 0;
        for batch in loader.by_ref() {
            let batch = batch?;
            let result = batch_loss(&tape, &model, &loss, &batch, &mut optimizer);
            tape.rewind(checkpoint)?;
            epoch_loss += result?;
            batches += 1;
        }
        loader.reset();
        if epoch % 5 == 0 {
            println!("epoch {:>2}  mean batch loss {:.6}", epoch, epoch_loss / batches as f64);
        }
    }

    // --- 4. Check ---
    for inputs in [[0.5, -0.5], [-0.8, 0.2], [0.1, 0.1]] {
        let prediction = model.predict(&tape, &inputs)?[0].value();
        println!(
            "x = {:?}  target {:>8.5}  prediction {:>8.5}",
            inputs,
            (inputs[0] - inputs[1]).tanh(),
            prediction
        );
    }
    Ok(())
}
