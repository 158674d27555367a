//! shardrows - per-shard row count estimation for distributed search clusters
//!
//! When a top-N query runs against a sharded index, each shard is asked for
//! some number of rows and the results are merged. Requesting the full depth
//! (offset + limit) from every shard is always correct but wasteful: the
//! documents that make the merged top-N rarely concentrate on one shard.
//! shardrows runs a Monte Carlo simulation of random document-to-shard
//! assignment and reports, per query depth, the fraction of the depth that
//! must be fetched from each shard to be correct with a target probability.
//!
//! # Architecture
//!
//! - **Bucket sampler**: scatters items uniformly at random into buckets and
//!   reports the largest bucket, behind an injectable trait so tests can
//!   substitute deterministic sources
//! - **Depth sweep estimator**: drives the sampler over a grid of query
//!   depths, extracts a confidence percentile from each trial set, and emits
//!   the depth table
//! - **Outputs**: the canonical tab-separated table, plus JSON and CSV
//!
//! Two runs with identical parameters are not expected to produce identical
//! tables - the estimator is randomized, and convergence improves with the
//! trial count. Pass a fixed seed for reproducible runs.

pub mod config;
pub mod error;
pub mod estimator;
pub mod output;
pub mod sampler;
pub mod stats;

pub use error::EstimateError;
pub use estimator::{DepthEntry, DepthSweep, SweepParams};
pub use sampler::{MaxBucketSampler, UniformScatterSampler};

/// Result type used throughout shardrows
pub type Result<T> = anyhow::Result<T>;
