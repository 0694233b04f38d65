#![warn(missing_docs)]
//! # FlagBench
//!
//! Harness for comparing micro-benchmark variants whose names encode the
//! optimizations they apply.
//!
//! Each test is an external program named `Test_<FLAGS>`, where every
//! character after the prefix is a flag symbol (`A` array, `L` linked list,
//! `I` indexed loop, `E` enhanced loop, `C` cached size, `B` break,
//! `F` final, `R` reverse). FlagBench:
//! - **Compiles** the test sources once before the suite
//! - **Runs** each test a fixed number of times with one workload argument
//! - **Averages** the nanosecond figure each run prints on stdout
//! - **Reports** one row per test, flag columns plus the mean, as a table,
//!   JSON or CSV
//!
//! Any failure (a crashed process, unparsable output, a failed compile) stops
//! the run; a report is only produced when every test succeeded.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flagbench::prelude::*;
//!
//! let plan = build_plan(
//!     ["Test_AE".to_string(), "Test_LI".to_string()],
//!     None,
//!     FlagAlphabet::default(),
//!     DEFAULT_PREFIX_LEN,
//! );
//! let runner = CommandRunner::new("java", ["-cp", "bin/"]);
//! let mut executor = Executor::new(runner, ExecutionConfig::new("A5000", 10)?);
//! let rows = run_suite(&mut executor, &plan)?;
//! print!("{}", render_table(&rows, &plan.alphabet, 10, &TableOptions::default()));
//! ```

// Re-export core types
pub use flagbench_core::{
    BenchError, CommandRunner, DEFAULT_ALPHABET, DEFAULT_ITERATIONS, DEFAULT_PREFIX_LEN,
    DEFAULT_WORKLOAD, FlagAlphabet, FlagVector, InvocationFailure, ProcessRunner, RunningMean,
    mean_ns, parse_measurement,
};

// Re-export report types
pub use flagbench_report::{
    EnvironmentInfo, OutputFormat, Report, ReportMeta, ResultRow, TableOptions, TableStyle,
    generate_csv_report, generate_json_report, render_table,
};

// Re-export the suite driver
pub use flagbench_cli::{
    ExecutionConfig, Executor, FlagbenchConfig, SuitePlan, build_plan, build_report_meta,
    format_human_output, run_suite,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchError, CommandRunner, DEFAULT_PREFIX_LEN, ExecutionConfig, Executor, FlagAlphabet,
        InvocationFailure, ProcessRunner, Report, ResultRow, TableOptions, build_plan,
        render_table, run_suite,
    };
}

/// Run the FlagBench CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     flagbench::run()
/// }
/// ```
pub use flagbench_cli::run;
