use super::traits::Sampler;
use rand::seq::SliceRandom;

/// Randomly permutes a fixed list of indices each epoch.
///
/// Useful to split one dataset into training and validation parts. The
/// `dataset_len` passed to [`Sampler::iter`] is ignored, so the indices must
/// be valid for the dataset the loader reads from.
#[derive(Debug, Clone)]
pub struct SubsetRandomSampler {
    indices: Vec<usize>,
}

impl SubsetRandomSampler {
    pub fn new(indices: Vec<usize>) -> Self {
        SubsetRandomSampler { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Sampler for SubsetRandomSampler {
    fn iter(&self, _dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices = self.indices.clone();
        indices.shuffle(&mut rand::thread_rng());
        Box::new(indices.into_iter())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
#[path = "subset_random_sampler_test.rs"]
mod tests;
