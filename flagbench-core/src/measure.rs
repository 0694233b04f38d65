//! Measurement Parsing
//!
//! A test program reports one elapsed time per run: a bare base-10 integer of
//! nanoseconds on stdout. Runs are reduced by a plain arithmetic mean.

/// Parse one run's stdout into a nanosecond count.
///
/// Surrounding whitespace is ignored. Returns `None` for empty, signed,
/// fractional or otherwise non-numeric output.
pub fn parse_measurement(stdout: &str) -> Option<u64> {
    let trimmed = stdout.trim();
    if trimmed.starts_with('+') {
        return None;
    }
    trimmed.parse().ok()
}

/// Arithmetic mean of `samples` in nanoseconds, or `None` if empty.
pub fn mean_ns(samples: &[u64]) -> Option<f64> {
    let mut mean = RunningMean::default();
    for &sample in samples {
        mean.push(sample);
    }
    mean.mean()
}

/// Incremental arithmetic mean over nanosecond samples.
///
/// Only the sum and count are kept, so memory does not grow with the number
/// of samples. Summation is done in `u128` and cannot overflow in practice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningMean {
    total: u128,
    count: u64,
}

impl RunningMean {
    /// Add one sample
    pub fn push(&mut self, sample: u64) {
        self.total += u128::from(sample);
        self.count += 1;
    }

    /// Number of samples seen
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the samples seen so far, or `None` before the first one
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total as f64 / self.count as f64)
    }
}
