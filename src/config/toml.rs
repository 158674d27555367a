//! TOML configuration file parsing
//!
//! A parameter file sets the sweep baseline; CLI arguments override it.
//! Useful when the same cluster geometry is swept repeatedly with varying
//! accuracy targets.

use super::{
    default_accuracy, default_page_count, default_rows_per_page, default_shard_count,
    default_trial_count, Config,
};
use crate::config::cli::Cli;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a TOML configuration from a string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments onto a base configuration (CLI takes precedence)
///
/// Scalar flags carry clap defaults, so a flag is treated as set when it
/// differs from its default value. The flip side is intentional: passing a
/// flag explicitly at its default (e.g. `--trial_count 10000`) is
/// indistinguishable from omitting it and defers to the file's value.
/// Optional flags override whenever given.
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if cli.trial_count != default_trial_count() {
        config.trial_count = cli.trial_count;
    }
    if cli.page_count != default_page_count() {
        config.page_count = cli.page_count;
    }
    if cli.rows_per_page != default_rows_per_page() {
        config.rows_per_page = cli.rows_per_page;
    }
    if cli.shard_count != default_shard_count() {
        config.shard_count = cli.shard_count;
    }
    if cli.accuracy != default_accuracy() {
        config.accuracy = cli.accuracy;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(threads) = cli.threads {
        config.threads = Some(threads);
    }
    if cli.format != OutputFormat::default() {
        config.format = cli.format;
    }
    config
}
