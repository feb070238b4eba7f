//! Full-batch gradient-descent training loop.
//!
//! Each step builds the forward graph of every sample on the tape, runs one
//! backward pass from the loss, updates the parameters and then rewinds the tape
//! to the checkpoint taken on entry, so the tape never grows beyond one step.

use crate::error::ScalarGradError;
use crate::nn::losses::MseLoss;
use crate::nn::module::Module;
use crate::optim::{Optimizer, Sgd};
use crate::scalar::Scalar;
use crate::tape::Tape;
use log::{debug, info, warn};

/// Hyper-parameters of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of gradient-descent steps.
    pub steps: usize,
    pub learning_rate: f64,
    /// Log the loss at `info` level every `log_every` steps; 0 disables it.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 100,
            learning_rate: 0.05,
            log_every: 10,
        }
    }
}

impl TrainConfig {
    /// # Errors
    /// `ConfigurationError` if `steps` is zero or the learning rate is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.steps == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "steps must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::ConfigurationError(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Outcome of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Loss of every step, measured before that step's update.
    pub losses: Vec<f64>,
    /// Model output for every sample after the last update.
    pub predictions: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Trains a single-output `model` on `(inputs, target)` pairs with plain SGD.
///
/// The model's parameters must already live on `tape`. Nodes created after
/// the call starts are discarded before it returns, on success and on error.
///
/// # Errors
/// * `ConfigurationError` for an invalid `config`.
/// * `EmptyInput` if `samples` is empty.
/// * `DimensionMismatch` if a sample has the wrong number of inputs or the
///   model does not produce exactly one output.
/// * Any error of the forward or backward pass.
pub fn fit<M: Module + ?Sized>(
    tape: &mut Tape,
    model: &M,
    samples: &[(Vec<f64>, f64)],
    loss: &MseLoss,
    config: &TrainConfig,
) -> Result<TrainReport, ScalarGradError> {
    config.validate()?;
    if samples.is_empty() {
        return Err(ScalarGradError::EmptyInput("fit".to_string()));
    }

    let checkpoint = tape.checkpoint();
    let mut optimizer = Sgd::new(model.parameter_ids(), config.learning_rate)?;
    let targets: Vec<f64> = samples.iter().map(|(_, y)| *y).collect();
    info!(
        "Training {} parameters on {} samples for {} steps (lr {})",
        model.num_parameters(),
        samples.len(),
        config.steps,
        config.learning_rate
    );

    let mut losses = Vec::with_capacity(config.steps);
    for step in 1..=config.steps {
        let result = train_step(tape, model, samples, &targets, loss, &mut optimizer);
        tape.rewind(checkpoint)?;
        let value = result?;

        if !value.is_finite() {
            warn!("Step {}: loss is not finite ({})", step, value);
        }
        if config.log_every != 0 && step % config.log_every == 0 {
            info!("Step {}/{}: loss {:.6}", step, config.steps, value);
        }
        losses.push(value);
    }

    let predictions = forward_all(tape, model, samples)
        .map(|preds| preds.iter().map(|p| p.value()).collect::<Vec<f64>>());
    tape.rewind(checkpoint)?;
    let predictions = predictions?;
    debug!("Final predictions: {:?}", predictions);

    Ok(TrainReport {
        losses,
        predictions,
    })
}

/// One forward, backward and update. Returns the loss before the update.
fn train_step<M: Module + ?Sized>(
    tape: &Tape,
    model: &M,
    samples: &[(Vec<f64>, f64)],
    targets: &[f64],
    loss: &MseLoss,
    optimizer: &mut Sgd,
) -> Result<f64, ScalarGradError> {
    let predictions = forward_all(tape, model, samples)?;
    let total = loss.calculate(&predictions, targets)?;
    let value = total.value();
    optimizer.zero_grad(tape)?;
    total.backward()?;
    optimizer.step(tape)?;
    Ok(value)
}

/// Runs every sample through the model, inputs as fresh leaves.
fn forward_all<'t, M: Module + ?Sized>(
    tape: &'t Tape,
    model: &M,
    samples: &[(Vec<f64>, f64)],
) -> Result<Vec<Scalar<'t>>, ScalarGradError> {
    samples
        .iter()
        .map(|(inputs, _)| {
            let leaves: Vec<Scalar<'t>> = inputs.iter().map(|&x| tape.leaf(x)).collect();
            let mut outputs = model.forward(tape, &leaves)?;
            match (outputs.len(), outputs.pop()) {
                (1, Some(out)) => Ok(out),
                (actual, _) => Err(ScalarGradError::DimensionMismatch {
                    expected: 1,
                    actual,
                    operation: "fit model output".to_string(),
                }),
            }
        })
        .collect()
}
