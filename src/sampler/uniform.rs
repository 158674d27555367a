//! Uniform scatter sampler
//!
//! Models Solr/Lucene-style random assignment of documents to shards at
//! index time: each item picks a bucket independently and uniformly at
//! random. The simulation assumes uniform randomness, not any particular
//! sharding hash.
//!
//! Uses the xoshiro256++ PRNG, which is fast and has good statistical
//! properties; a full sweep at default settings places tens of millions of
//! items.

use super::{mix_stream, MaxBucketSampler};
use crate::error::EstimateError;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random item-to-bucket scatter
///
/// Stateless between calls: each call derives a fresh generator from the
/// base seed and the caller's stream id, so the sampler can be shared across
/// rayon workers without locking.
pub struct UniformScatterSampler {
    base_seed: u64,
}

impl UniformScatterSampler {
    /// Create a sampler with a random base seed
    pub fn new() -> Self {
        Self {
            base_seed: rand::random(),
        }
    }

    /// Create a sampler with a specific base seed
    ///
    /// Two samplers built from the same seed produce identical samples for
    /// identical `(num_items, num_buckets, stream)` calls. Useful for
    /// reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self { base_seed: seed }
    }
}

impl Default for UniformScatterSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxBucketSampler for UniformScatterSampler {
    fn sample_max_bucket(
        &self,
        num_items: u64,
        num_buckets: u64,
        stream: u64,
    ) -> Result<u64, EstimateError> {
        if num_buckets == 0 {
            return Err(EstimateError::InvalidArgument(
                "num_buckets must be at least 1".to_string(),
            ));
        }
        if num_items == 0 {
            return Ok(0);
        }
        if num_buckets == 1 {
            // Everything lands in the one bucket; no need to draw.
            return Ok(num_items);
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.base_seed ^ mix_stream(stream));
        let mut counts = vec![0u64; num_buckets as usize];
        for _ in 0..num_items {
            counts[rng.gen_range(0..num_buckets) as usize] += 1;
        }

        Ok(counts.into_iter().max().unwrap_or(0))
    }
}
