//! Suite Aggregation
//!
//! Drives the [`Executor`] over every test of a [`SuitePlan`], in plan order,
//! and pairs each mean with the test's decoded flags.
//!
//! The sweep is all-or-nothing: the first failing test aborts it and the rows
//! gathered so far are dropped with the error.

use super::execution::Executor;
use crate::planner::SuitePlan;
use flagbench_core::{BenchError, ProcessRunner};
use flagbench_report::ResultRow;
use indicatif::{ProgressBar, ProgressStyle};

/// Run every test in `plan` without progress output
pub fn run_suite<R: ProcessRunner>(
    executor: &mut Executor<R>,
    plan: &SuitePlan,
) -> Result<Vec<ResultRow>, BenchError> {
    run_suite_with_progress(executor, plan, &ProgressBar::hidden())
}

/// Run every test in `plan`, advancing `pb` once per test
pub fn run_suite_with_progress<R: ProcessRunner>(
    executor: &mut Executor<R>,
    plan: &SuitePlan,
    pb: &ProgressBar,
) -> Result<Vec<ResultRow>, BenchError> {
    pb.set_length(plan.tests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut rows = Vec::with_capacity(plan.tests.len());

    for test_id in &plan.tests {
        pb.set_message(test_id.clone());
        tracing::debug!(
            test_id = %test_id,
            iterations = executor.config().iterations,
            "running test"
        );

        let average_ns = match executor.measure(test_id) {
            Ok(avg) => avg,
            Err(e) => {
                pb.abandon_with_message(format!("{} failed", test_id));
                return Err(e);
            }
        };
        let flags = plan.alphabet.decode(test_id, plan.prefix_len);

        tracing::info!(test_id = %test_id, average_ns, "test complete");
        rows.push(ResultRow::new(test_id.clone(), flags, average_ns));
        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    Ok(rows)
}
