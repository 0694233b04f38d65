//! Test Execution
//!
//! Runs one test program `iterations` times with the workload argument and
//! reduces the printed nanosecond counts to their mean.
//!
//! Runs are strictly sequential: each invocation blocks until the child exits,
//! and the next one starts only afterwards. Any failed or unparseable run
//! aborts the test immediately; nothing is retried and no partial mean is
//! produced.

use flagbench_core::{BenchError, ProcessRunner, RunningMean, parse_measurement};

/// Configuration for test execution
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Argument passed to every test program
    pub workload: String,
    /// Executions per test
    pub iterations: u32,
}

impl ExecutionConfig {
    /// Validated configuration; at least one iteration is required
    pub fn new(workload: impl Into<String>, iterations: u32) -> Result<Self, BenchError> {
        if iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            workload: workload.into(),
            iterations,
        })
    }
}

/// Executes test programs through a [`ProcessRunner`]
pub struct Executor<R> {
    runner: R,
    config: ExecutionConfig,
}

impl<R: ProcessRunner> Executor<R> {
    pub fn new(runner: R, config: ExecutionConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Run `test_id` for every iteration and return its mean time in nanoseconds
    pub fn measure(&mut self, test_id: &str) -> Result<f64, BenchError> {
        let mut mean = RunningMean::default();

        for iteration in 1..=self.config.iterations {
            let stdout = self
                .runner
                .invoke(test_id, &self.config.workload)
                .map_err(|cause| BenchError::Execution {
                    test_id: test_id.to_string(),
                    iteration,
                    cause,
                })?;

            let Some(ns) = parse_measurement(&stdout) else {
                return Err(BenchError::MeasurementParse {
                    test_id: test_id.to_string(),
                    iteration,
                    output: stdout,
                });
            };

            tracing::trace!(test_id, iteration, ns, "sample");
            mean.push(ns);
        }

        mean.mean().ok_or_else(|| {
            BenchError::InvalidConfig("iterations must be at least 1".to_string())
        })
    }
}
