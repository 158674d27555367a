//! Configuration module
//!
//! Handles CLI argument parsing, TOML parameter files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::estimator::SweepParams;
use crate::output::OutputFormat;
use crate::Result;
use cli::Cli;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Monte Carlo trials per depth
    #[serde(default = "default_trial_count")]
    pub trial_count: u64,
    /// Number of depth levels to compute
    #[serde(default = "default_page_count")]
    pub page_count: u64,
    /// Page size; the depth increment
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: u64,
    /// Number of shards to simulate
    #[serde(default = "default_shard_count")]
    pub shard_count: u64,
    /// Target percentile of trials that must be fully satisfied
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,
    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
    /// Worker threads for trial execution (rayon default when unset)
    #[serde(default)]
    pub threads: Option<usize>,
    /// Output format for the depth table
    #[serde(default)]
    pub format: OutputFormat,
}

pub(crate) fn default_trial_count() -> u64 {
    10_000
}

pub(crate) fn default_page_count() -> u64 {
    10
}

pub(crate) fn default_rows_per_page() -> u64 {
    100
}

pub(crate) fn default_shard_count() -> u64 {
    4
}

pub(crate) fn default_accuracy() -> f64 {
    99.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trial_count: default_trial_count(),
            page_count: default_page_count(),
            rows_per_page: default_rows_per_page(),
            shard_count: default_shard_count(),
            accuracy: default_accuracy(),
            seed: None,
            threads: None,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Estimator parameters carried by this configuration
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            trial_count: self.trial_count,
            page_count: self.page_count,
            rows_per_page: self.rows_per_page,
            shard_count: self.shard_count,
            accuracy_percent: self.accuracy,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials x {} pages of {} rows, {} shard(s), accuracy p{}",
            self.trial_count, self.page_count, self.rows_per_page, self.shard_count, self.accuracy
        )?;
        if let Some(seed) = self.seed {
            write!(f, ", seed={}", seed)?;
        }
        if let Some(threads) = self.threads {
            write!(f, ", threads={}", threads)?;
        }
        Ok(())
    }
}

/// Build the effective configuration from CLI arguments
///
/// When a TOML parameter file is given it forms the base and CLI arguments
/// override it; otherwise the CLI stands alone.
pub fn build_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => toml::parse_toml_file(path)?,
        None => Config::default(),
    };
    Ok(toml::merge_cli_with_config(cli, config))
}
