//! Suite Planner
//!
//! Builds the execution plan from the configured test list.
//!
//! Filtering: an optional regex matched against each test id.
//!
//! Ordering: tests keep their configured order. The report is read top to
//! bottom as the suite author laid it out, so nothing is sorted.

use flagbench_core::FlagAlphabet;
use regex::Regex;

/// Execution plan for a suite
#[derive(Debug, Clone)]
pub struct SuitePlan {
    /// Test ids to run, in order
    pub tests: Vec<String>,
    /// Alphabet the flags are decoded against
    pub alphabet: FlagAlphabet,
    /// Leading id characters that are not scanned for flags
    pub prefix_len: usize,
}

/// Build execution plan from the configured tests
pub fn build_plan(
    tests: impl IntoIterator<Item = String>,
    filter: Option<&Regex>,
    alphabet: FlagAlphabet,
    prefix_len: usize,
) -> SuitePlan {
    let tests = tests
        .into_iter()
        .filter(|id| filter.is_none_or(|re| re.is_match(id)))
        .collect();

    SuitePlan {
        tests,
        alphabet,
        prefix_len,
    }
}
