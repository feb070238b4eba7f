use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Dense};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use crate::tape::Tape;
use rand::Rng;

/// Multi-layer perceptron: a stack of [`Dense`] layers, every neuron tanh.
///
/// `Mlp::new(tape, 3, &[4, 4, 1], rng)` maps 3 inputs through two hidden
/// layers of 4 neurons to a single output.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    /// Random uniform `[-1, 1)` initialization.
    ///
    /// # Errors
    /// `ConfigurationError` if `nouts` is empty.
    pub fn new<R: Rng + ?Sized>(
        tape: &Tape,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::check_layout(nouts)?;
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for &nout in nouts {
            layers.push(Dense::new(tape, fan_in, nout, Activation::Tanh, rng)?);
            fan_in = nout;
        }
        Ok(Mlp { layers })
    }

    /// Builds the network from explicit values, given in [`Module::parameters`]
    /// order: layer by layer, neuron by neuron, weights then bias.
    ///
    /// # Errors
    /// * `ConfigurationError` if `nouts` is empty.
    /// * `DimensionMismatch` if `values` does not hold exactly one value per parameter.
    pub fn from_values(
        tape: &Tape,
        nin: usize,
        nouts: &[usize],
        values: &[f64],
    ) -> Result<Self, ScalarGradError> {
        Self::check_layout(nouts)?;
        let expected = Self::parameter_count(nin, nouts);
        if values.len() != expected {
            return Err(ScalarGradError::DimensionMismatch {
                expected,
                actual: values.len(),
                operation: "Mlp from_values".to_string(),
            });
        }

        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        let mut offset = 0;
        for &nout in nouts {
            let count = Dense::parameter_count(fan_in, nout);
            layers.push(Dense::from_values(
                tape,
                fan_in,
                nout,
                Activation::Tanh,
                &values[offset..offset + count],
            )?);
            offset += count;
            fan_in = nout;
        }
        Ok(Mlp { layers })
    }

    /// Total number of parameters of a network with this layout.
    pub fn parameter_count(nin: usize, nouts: &[usize]) -> usize {
        let mut fan_in = nin;
        let mut total = 0;
        for &nout in nouts {
            total += Dense::parameter_count(fan_in, nout);
            fan_in = nout;
        }
        total
    }

    fn check_layout(nouts: &[usize]) -> Result<(), ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::ConfigurationError(
                "Mlp needs at least one layer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, |l| l.nin())
    }

    /// Feeds plain numbers through the network; each input becomes a fresh leaf.
    pub fn predict<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[f64],
    ) -> Result<Vec<Scalar<'t>>, ScalarGradError> {
        let leaves: Vec<Scalar<'t>> = inputs.iter().map(|&x| tape.leaf(x)).collect();
        self.forward(tape, &leaves)
    }
}

impl Module for Mlp {
    fn forward<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[Scalar<'t>],
    ) -> Result<Vec<Scalar<'t>>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(tape, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
