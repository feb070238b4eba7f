use crate::error::ScalarGradError;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::{check_input_len, Module};
use crate::nn::Parameter;
use crate::scalar::Scalar;
use crate::tape::Tape;
use rand::Rng;

/// `nout` neurons reading the same `nin` inputs.
#[derive(Debug)]
pub struct Dense {
    nin: usize,
    neurons: Vec<Neuron>,
}

impl Dense {
    pub fn new<R: Rng + ?Sized>(
        tape: &Tape,
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(tape, nin, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense { nin, neurons })
    }

    /// Builds the layer from `nout * (nin + 1)` values, neuron by neuron, each
    /// neuron's weights followed by its bias.
    ///
    /// # Errors
    /// `DimensionMismatch` if `values` has the wrong length.
    pub fn from_values(
        tape: &Tape,
        nin: usize,
        nout: usize,
        activation: Activation,
        values: &[f64],
    ) -> Result<Self, ScalarGradError> {
        let expected = Self::parameter_count(nin, nout);
        if values.len() != expected {
            return Err(ScalarGradError::DimensionMismatch {
                expected,
                actual: values.len(),
                operation: "Dense from_values".to_string(),
            });
        }
        let neurons = values
            .chunks(nin + 1)
            .map(|chunk| Neuron::from_values(tape, &chunk[..nin], chunk[nin], activation))
            .collect();
        Ok(Dense { nin, neurons })
    }

    /// Number of parameters of a layer with this shape.
    pub fn parameter_count(nin: usize, nout: usize) -> usize {
        nout * (nin + 1)
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Dense {
    fn forward<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[Scalar<'t>],
    ) -> Result<Vec<Scalar<'t>>, ScalarGradError> {
        check_input_len("Dense forward", self.nin, inputs)?;
        self.neurons
            .iter()
            .map(|neuron| neuron.call(tape, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }
}
