//! CLI argument parsing using clap
//!
//! Long flag spellings keep the underscore form the original estimation
//! script used (`--trial_count`, not `--trial-count`) so existing
//! invocations and wrapper scripts keep working unchanged.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Estimate per-shard row counts for correct deep pagination
///
/// Simulates random document-to-shard assignment and prints, for each query
/// depth, the percentage of the depth that must be requested from every
/// shard to merge a correct top-N result with the target probability.
#[derive(Parser, Debug)]
#[command(name = "shardrows")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of Monte Carlo trials to run per depth
    #[arg(short = 't', long = "trial_count", default_value = "10000")]
    pub trial_count: u64,

    /// Number of depth levels (pages) to compute
    #[arg(short = 'p', long = "page_count", default_value = "10")]
    pub page_count: u64,

    /// Page size; depths are multiples of this
    #[arg(short = 'r', long = "rows_per_page", default_value = "100")]
    pub rows_per_page: u64,

    /// Number of shards to simulate
    #[arg(short = 's', long = "shard_count", default_value = "4")]
    pub shard_count: u64,

    /// Minimum percentage of trials that must be fully satisfied (0-100)
    #[arg(short = 'a', long = "accuracy", default_value = "99.0")]
    pub accuracy: f64,

    /// Fixed RNG seed for a reproducible table
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for trial execution (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output format for the table
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML parameter file; CLI arguments take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["shardrows"]);
        assert_eq!(cli.trial_count, 10_000);
        assert_eq!(cli.page_count, 10);
        assert_eq!(cli.rows_per_page, 100);
        assert_eq!(cli.shard_count, 4);
        assert_eq!(cli.accuracy, 99.0);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "shardrows", "-t", "500", "-p", "4", "-r", "50", "-s", "12", "-a", "99.9",
        ]);
        assert_eq!(cli.trial_count, 500);
        assert_eq!(cli.page_count, 4);
        assert_eq!(cli.rows_per_page, 50);
        assert_eq!(cli.shard_count, 12);
        assert_eq!(cli.accuracy, 99.9);
    }

    #[test]
    fn test_underscore_long_flags() {
        let cli = Cli::parse_from([
            "shardrows",
            "--trial_count",
            "100",
            "--page_count",
            "2",
            "--rows_per_page",
            "10",
            "--shard_count",
            "3",
            "--accuracy",
            "95",
        ]);
        assert_eq!(cli.trial_count, 100);
        assert_eq!(cli.page_count, 2);
        assert_eq!(cli.rows_per_page, 10);
        assert_eq!(cli.shard_count, 3);
        assert_eq!(cli.accuracy, 95.0);
    }

    #[test]
    fn test_format_and_seed() {
        let cli = Cli::parse_from(["shardrows", "--format", "json", "--seed", "42"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(42));
    }
}
