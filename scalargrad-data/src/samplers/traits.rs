use std::fmt::Debug;

/// Defines the order in which the indices of a dataset are visited.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// to fetch samples from a `Dataset`. Each call to [`Sampler::iter`] starts a
/// new epoch.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of a dataset of `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices [`Sampler::iter`] yields for a dataset of
    /// `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
