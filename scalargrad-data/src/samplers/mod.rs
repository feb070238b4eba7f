pub mod random_sampler;
pub mod sequential_sampler;
pub mod subset_random_sampler;
pub mod traits;

pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;
pub use subset_random_sampler::SubsetRandomSampler;
pub use traits::Sampler;
