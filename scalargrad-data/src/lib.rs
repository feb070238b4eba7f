//! Datasets, samplers and mini-batching for `scalargrad-core`.
//!
//! A [`Dataset`] gives indexed access to samples, a [`Sampler`] decides the
//! order in which indices are visited and a [`DataLoader`] groups the samples
//! into batches, e.g. for mini-batch gradient descent.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler, SubsetRandomSampler};
