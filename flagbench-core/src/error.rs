//! Error Taxonomy
//!
//! Every failure in the harness is terminal for the current run. There are no
//! retries and no partially filled reports; callers propagate these with `?`.

use thiserror::Error;

/// Errors raised while building or running a benchmark suite
#[derive(Debug, Error)]
pub enum BenchError {
    /// A test program could not be launched or terminated abnormally
    #[error("test `{test_id}` failed on iteration {iteration}: {cause}")]
    Execution {
        /// Identifier of the failing test
        test_id: String,
        /// 1-based iteration that failed
        iteration: u32,
        /// What went wrong with the process
        cause: InvocationFailure,
    },

    /// A test program's stdout was not a non-negative integer
    #[error("test `{test_id}` printed a non-integer measurement on iteration {iteration}: {output:?}")]
    MeasurementParse {
        /// Identifier of the failing test
        test_id: String,
        /// 1-based iteration that failed
        iteration: u32,
        /// Captured stdout, untrimmed
        output: String,
    },

    /// The compile step failed before any test was run
    #[error("compilation failed (`{command}`): {reason}{}", format_stderr(.stderr))]
    Compilation {
        /// Command line that was run
        command: String,
        /// Short description of the failure
        reason: String,
        /// Captured compiler diagnostics
        stderr: String,
    },

    /// Configuration rejected before running
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Outcome of a process invocation that did not produce usable output
#[derive(Debug, Error)]
pub enum InvocationFailure {
    /// The process could not be spawned or waited on
    #[error("could not launch process: {0}")]
    Launch(#[from] std::io::Error),

    /// The process was killed by a signal
    #[error("terminated by signal {signal}{}", format_stderr(.stderr))]
    Signaled {
        /// Signal number
        signal: i32,
        /// Captured stderr
        stderr: String,
    },

    /// The process exited with a non-zero status
    #[error("exited with status {code}{}", format_stderr(.stderr))]
    ExitCode {
        /// Exit code
        code: i32,
        /// Captured stderr
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}
