//! Suite Executor
//!
//! Runs the test programs and turns their output into report rows.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SuitePlan (tests, alphabet, prefix)
//!       │
//!       ▼
//! ┌─────────────┐
//! │ aggregation │  For each test, in order
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  execution  │  N blocking runs → parse → mean
//! └──────┬──────┘
//!        │
//!        ▼
//!   FlagAlphabet::decode → ResultRow
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Environment banner + table
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Repeated invocation of a single test program
//! - [`aggregation`] - Fail-fast sweep over the whole suite
//! - [`metadata`] - Host and runtime probe for report metadata
//! - [`formatting`] - Human-readable output

mod aggregation;
mod execution;
mod formatting;
mod metadata;

// Re-export public API
pub use aggregation::{run_suite, run_suite_with_progress};
pub use execution::{ExecutionConfig, Executor};
pub use formatting::{format_environment, format_human_output};
pub use metadata::{build_report_meta, probe_environment};
