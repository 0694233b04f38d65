#![warn(missing_docs)]
//! FlagBench Core - Decoding and Measurement
//!
//! This crate provides the pieces of the harness that do not touch the terminal:
//! - `FlagAlphabet` / `FlagVector` for decoding flags out of test identifiers
//! - Measurement parsing and mean reduction
//! - The `ProcessRunner` seam used to invoke external test programs
//! - The `BenchError` taxonomy shared by every crate in the workspace

mod error;
mod flags;
mod measure;
mod runner;

pub use error::{BenchError, InvocationFailure};
pub use flags::{DEFAULT_ALPHABET, DEFAULT_PREFIX_LEN, FlagAlphabet, FlagVector};
pub use measure::{RunningMean, mean_ns, parse_measurement};
pub use runner::{CommandRunner, ProcessRunner};

/// Workload argument passed to every test program unless configured otherwise
pub const DEFAULT_WORKLOAD: &str = "A5000";

/// Number of executions per test unless configured otherwise
pub const DEFAULT_ITERATIONS: u32 = 10;
