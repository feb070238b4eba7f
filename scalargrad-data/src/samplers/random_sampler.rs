use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Samples dataset indices in random order.
///
/// Without replacement every epoch is a permutation of (a prefix of) the
/// indices; with replacement indices are drawn independently. A seeded sampler
/// keeps its generator between epochs, so a run is reproducible as a whole
/// while consecutive epochs still differ.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: Option<Mutex<StdRng>>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` drawing from the thread-local generator.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The number of indices per epoch. Defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: None,
        }
    }

    /// Same as [`RandomSampler::new`] but with a deterministic generator.
    pub fn with_seed(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    fn requested(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }

    fn draw<R: Rng>(&self, dataset_len: usize, rng: &mut R) -> Vec<usize> {
        let count = self.requested(dataset_len);
        if self.replacement {
            (0..count).map(|_| rng.gen_range(0..dataset_len)).collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(count);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let count = self.requested(dataset_len);
        if !self.replacement && count > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                count, dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let indices = match &self.rng {
            Some(rng) => {
                // A panic while holding the lock cannot leave the generator invalid.
                let mut guard = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                self.draw(dataset_len, &mut *guard)
            }
            None => self.draw(dataset_len, &mut rand::thread_rng()),
        };
        Box::new(indices.into_iter())
    }

    /// Zero whenever [`Sampler::iter`] yields nothing: an empty dataset, or more
    /// samples than items without replacement.
    fn len(&self, dataset_len: usize) -> usize {
        let count = self.requested(dataset_len);
        if dataset_len == 0 || (!self.replacement && count > dataset_len) {
            0
        } else {
            count
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
