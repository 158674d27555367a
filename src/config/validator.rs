//! Configuration validation
//!
//! All checks run before any simulation work begins; a malformed parameter
//! exits with a message naming it instead of producing silent garbage.

use super::Config;
use anyhow::Result;

/// Validate the complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    // Numeric sweep parameters share their validation with the estimator.
    config.sweep_params().validate()?;

    if config.threads == Some(0) {
        anyhow::bail!("threads must be at least 1");
    }

    if config.trial_count < 100 {
        eprintln!(
            "Warning: trial_count {} is low; percentile estimates will be noisy",
            config.trial_count
        );
    }

    Ok(())
}
