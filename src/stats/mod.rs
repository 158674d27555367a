//! Trial statistics
//!
//! A [`TrialSet`] collects the max-bucket outcomes of all trials at one
//! depth and answers a single question: the value at a given percentile,
//! interpolated between the two nearest ranks. That value is the minimum
//! per-shard row count that would have fully satisfied the target fraction
//! of trials.

use crate::error::EstimateError;

/// Outcomes of all simulation trials at a fixed depth
///
/// Ephemeral: built, queried once, discarded. Recording order does not
/// matter; the percentile query sorts internally.
#[derive(Debug, Clone, Default)]
pub struct TrialSet {
    samples: Vec<u64>,
}

impl TrialSet {
    /// Create an empty trial set
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create an empty trial set with room for `capacity` outcomes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Record one trial outcome
    pub fn record(&mut self, max_bucket: u64) {
        self.samples.push(max_bucket);
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no outcomes have been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value at `percentile` over the recorded outcomes
    ///
    /// Standard linear-interpolation semantics: for percentile `p` over `n`
    /// sorted samples, the value at fractional rank `p/100 * (n - 1)`,
    /// interpolating between the neighboring ranks. Matches numpy's default
    /// `percentile`, which the published tables were produced with.
    pub fn value_at_percentile(&mut self, percentile: f64) -> Result<f64, EstimateError> {
        if !(0.0..=100.0).contains(&percentile) || !percentile.is_finite() {
            return Err(EstimateError::InvalidArgument(format!(
                "percentile must be in [0, 100], got {}",
                percentile
            )));
        }
        if self.samples.is_empty() {
            return Err(EstimateError::Internal(
                "percentile queried on an empty trial set".to_string(),
            ));
        }

        self.samples.sort_unstable();

        let n = self.samples.len();
        let rank = percentile / 100.0 * (n - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let lo_val = self.samples[lo] as f64;
        let hi_val = self.samples[hi] as f64;

        Ok(lo_val + (hi_val - lo_val) * (rank - lo as f64))
    }
}

impl FromIterator<u64> for TrialSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
