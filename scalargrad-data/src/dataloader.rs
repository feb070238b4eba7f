//! # DataLoader
//!
//! Groups the samples of a [`Dataset`] into batches, visiting indices in the
//! order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::VecDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None).unwrap();
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! The loader is an [`Iterator`] over one epoch; call [`DataLoader::reset`] to
//! start the next one (a random sampler then draws a new order).

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use log::debug;
use scalargrad_core::ScalarGradError;

/// Custom batch assembly, applied to every batch before it is yielded.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, ScalarGradError>
        + Send
        + Sync,
>;

/// Batching iterator over a dataset.
///
/// # Type parameters
/// - `D`: the dataset, see [`Dataset`].
/// - `S`: the index order, see [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
    epoch: usize,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader positioned at the start of the first epoch.
    ///
    /// # Arguments
    /// - `batch_size`: number of samples per batch.
    /// - `drop_last`: skip the final batch if it is shorter than `batch_size`.
    /// - `collate_fn`: optional function applied to each batch.
    ///
    /// # Errors
    /// `ConfigurationError` if `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
            epoch: 0,
        })
    }

    /// Starts a new epoch, drawing a fresh index order from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
        self.epoch += 1;
        debug!("DataLoader epoch {} started", self.epoch);
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Number of completed calls to [`DataLoader::reset`].
    pub fn epoch(&self) -> usize {
        self.epoch
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, ScalarGradError>;

    /// Returns the next batch, `Some(Err(_))` if fetching one of its samples
    /// failed, or `None` at the end of the epoch.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match &self.collate_fn {
            Some(collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
