//! Bucket sampling
//!
//! One trial of the simulation scatters `num_items` documents uniformly at
//! random across `num_buckets` shards and asks how large the hottest shard
//! got. That single integer is all the estimator consumes, so the whole
//! randomness surface of the crate sits behind the [`MaxBucketSampler`]
//! trait: production code plugs in the xoshiro-backed
//! [`UniformScatterSampler`], tests plug in deterministic stubs.
//!
//! # Streams
//!
//! Trials run in parallel, so samplers take no `&mut self`. Instead each
//! call names a `stream`: a caller-chosen identifier (trial index, in
//! practice) that selects an independent random stream. Seeded samplers
//! derive the per-stream generator from `(base_seed, stream)`, which makes a
//! seeded sweep reproducible no matter how rayon schedules the trials.

pub mod uniform;

pub use uniform::UniformScatterSampler;

use crate::error::EstimateError;

/// Source of max-bucket-occupancy samples
///
/// Implementations must be safe to call concurrently; the estimator invokes
/// this from rayon workers with distinct `stream` values.
pub trait MaxBucketSampler: Sync {
    /// Scatter `num_items` items into `num_buckets` buckets and return the
    /// size of the largest bucket.
    ///
    /// `num_items = 0` returns 0, and a single bucket receives everything.
    /// `num_buckets = 0` is rejected with
    /// [`EstimateError::InvalidArgument`].
    fn sample_max_bucket(
        &self,
        num_items: u64,
        num_buckets: u64,
        stream: u64,
    ) -> Result<u64, EstimateError>;
}

/// SplitMix64 finalizer, used to decorrelate stream ids before seeding
///
/// Consecutive stream ids differ in few bits; pushing them through a strong
/// mixer keeps the derived generators statistically independent.
pub(crate) fn mix_stream(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
