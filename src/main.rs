//! shardrows CLI entry point
//!
//! One-shot batch run: parse arguments, validate, sweep, print the depth
//! table to stdout, exit. Nothing is persisted; the caller captures stdout.

use anyhow::{Context, Result};
use shardrows::config::{self, cli::Cli, validator};
use shardrows::estimator::{DepthEntry, DepthSweep};
use shardrows::output;
use shardrows::sampler::UniformScatterSampler;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = config::build_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;

    let table = run_sweep(&config)?;

    let stdout = io::stdout();
    output::write_table(config.format, &table, stdout.lock())
        .context("Failed to write depth table")?;

    Ok(())
}

/// Run the configured sweep, on a dedicated rayon pool when a thread count
/// was requested
fn run_sweep(config: &config::Config) -> Result<Vec<DepthEntry>> {
    let sweep = DepthSweep::new(config.sweep_params())?;

    let sampler = match config.seed {
        Some(seed) => UniformScatterSampler::with_seed(seed),
        None => UniformScatterSampler::new(),
    };

    let table = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| sweep.run(&sampler))?
        }
        None => sweep.run(&sampler)?,
    };

    Ok(table)
}
