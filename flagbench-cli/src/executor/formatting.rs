//! Output Formatting
//!
//! Human-readable output: a short environment banner followed by the
//! flag/average table.

use flagbench_core::{BenchError, FlagAlphabet};
use flagbench_report::{EnvironmentInfo, Report, TableOptions, render_table};

/// One-line description of the host, e.g. `Running on <cpu> (x86_64) @ 3.6000 GHz`
pub fn format_environment(env: &EnvironmentInfo) -> String {
    format!(
        "Running on {} ({}) @ {}",
        env.cpu,
        env.arch,
        env.clock_display()
    )
}

/// Format a report for human-readable terminal display
///
/// # Arguments
/// * `report` - Complete suite report
/// * `options` - Table presentation options
///
/// # Returns
/// Formatted string suitable for terminal output, or `InvalidConfig` when the
/// report's alphabet repeats a symbol
pub fn format_human_output(
    report: &Report,
    options: &TableOptions,
) -> Result<String, BenchError> {
    let alphabet = FlagAlphabet::new(report.alphabet.iter().copied())?;
    let mut output = String::new();

    output.push('\n');
    output.push_str("FlagBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');

    if let Some(env) = &report.meta.environment {
        if let Some(runtime) = &env.runtime_version {
            output.push_str(&format!("{}\n", runtime));
        }
        output.push_str(&format_environment(env));
        output.push('\n');
    }
    output.push_str(&format!(
        "Workload: {}  Iterations: {}  Tests: {}\n\n",
        report.workload,
        report.iterations,
        report.rows.len()
    ));

    output.push_str(&render_table(
        &report.rows,
        &alphabet,
        report.iterations,
        options,
    ));

    Ok(output)
}
