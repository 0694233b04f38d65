#![warn(missing_docs)]
//! FlagBench CLI Library
//!
//! Command-line driver for the harness: loads `flagbench.toml`, compiles the
//! test programs, runs the suite and prints the report.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     flagbench_cli::run()
//! }
//! ```

mod compiler;
mod config;
mod executor;
mod planner;

pub use compiler::{CompileSummary, collect_sources, compile};
pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, build_report_meta, format_environment, format_human_output,
    probe_environment, run_suite, run_suite_with_progress,
};
pub use planner::{SuitePlan, build_plan};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flagbench_core::BenchError;
use flagbench_report::{
    OutputFormat, Report, TableStyle, generate_csv_report, generate_json_report,
};
use indicatif::ProgressBar;
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// FlagBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "flagbench")]
#[command(author, version, about = "FlagBench - flag-annotated micro-benchmark harness")]
pub struct Cli {
    /// Optional subcommand (List, Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter tests by regex pattern (configured order is kept)
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Configuration file (default: nearest flagbench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Executions per test
    #[arg(long, short = 'n')]
    pub iterations: Option<u32>,

    /// Workload argument passed to every test
    #[arg(long)]
    pub workload: Option<String>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not run the compile step
    #[arg(long)]
    pub skip_compile: bool,

    /// Do not probe the runtime and host
    #[arg(long)]
    pub no_probe: bool,

    /// Plain table without box drawing
    #[arg(long)]
    pub plain: bool,

    /// Dry run - list tests and their flags without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tests that would run, with their decoded flags
    List,
    /// Run the suite (default)
    Run,
    /// Print a default flagbench.toml
    Init,
}

/// Run the FlagBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` once the report is written, or the error that aborted the run.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the FlagBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Init) => write_output(&cli, &FlagbenchConfig::default_toml()),
        Some(Commands::List) => {
            let config = load_config(&cli)?;
            list_tests(&cli, &config)
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            if cli.dry_run {
                list_tests(&cli, &config)
            } else {
                run_benchmarks(&cli, &config)
            }
        }
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "flagbench={level},flagbench_cli={level},flagbench_core={level}"
        ))
    });
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Explicit `--config`, else the nearest flagbench.toml, else defaults; CLI flags win.
fn load_config(cli: &Cli) -> anyhow::Result<FlagbenchConfig> {
    let mut config = match &cli.config {
        Some(path) => FlagbenchConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => match FlagbenchConfig::discover()? {
            Some((path, config)) => {
                tracing::debug!(path = %path.display(), "using configuration file");
                config
            }
            None => FlagbenchConfig::default(),
        },
    };

    if let Some(iterations) = cli.iterations {
        config.suite.iterations = iterations;
    }
    if let Some(workload) = &cli.workload {
        config.suite.workload = workload.clone();
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }
    if cli.skip_compile {
        config.compiler.enabled = false;
    }
    if cli.no_probe {
        config.probe.enabled = false;
    }
    if cli.plain {
        config.output.style = TableStyle::Plain;
    }
    Ok(config)
}

/// Validate the configuration and keep the tests matching the CLI filter.
fn plan_suite(cli: &Cli, config: &FlagbenchConfig) -> anyhow::Result<SuitePlan> {
    let filter = Regex::new(&cli.filter).map_err(|e| {
        BenchError::InvalidConfig(format!("invalid filter '{}': {}", cli.filter, e))
    })?;
    Ok(config.validate(Some(&filter))?)
}

fn list_tests(cli: &Cli, config: &FlagbenchConfig) -> anyhow::Result<()> {
    let plan = plan_suite(cli, config)?;

    println!("FlagBench Plan:");
    for test_id in &plan.tests {
        let flags = plan.alphabet.decode(test_id, plan.prefix_len);
        let active: String = flags.active_symbols(&plan.alphabet).into_iter().collect();
        if active.is_empty() {
            println!("├── {}", test_id);
        } else {
            println!("├── {} [{}]", test_id, active);
        }
    }
    println!(
        "{} tests found (workload {}, {} iterations each).",
        plan.tests.len(),
        config.suite.workload,
        config.suite.iterations
    );
    Ok(())
}

fn run_benchmarks(cli: &Cli, config: &FlagbenchConfig) -> anyhow::Result<()> {
    let format: OutputFormat = config
        .output
        .format
        .parse()
        .map_err(BenchError::InvalidConfig)?;
    let plan = plan_suite(cli, config)?;
    let exec_config = config.execution_config()?;

    if plan.tests.is_empty() {
        eprintln!("No tests matched '{}'.", cli.filter);
        return Ok(());
    }

    let environment = if config.probe.enabled {
        let env = probe_environment(&config.probe.version_command);
        if let Some(runtime) = &env.runtime_version {
            eprintln!("{}", runtime);
        }
        eprintln!("{}\n", format_environment(&env));
        Some(env)
    } else {
        None
    };

    if config.compiler.enabled {
        eprint!("Compiling... ");
        let summary = compile(&config.compiler)?;
        eprintln!(
            "Done! ({} sources in {:.2}s)",
            summary.sources,
            summary.duration.as_secs_f64()
        );
    }

    eprintln!(
        "Running {} tests, {} iterations each, workload {}...\n",
        plan.tests.len(),
        exec_config.iterations,
        exec_config.workload
    );

    let start_time = Instant::now();
    let mut executor = Executor::new(config.runner.command_runner(), exec_config);
    let pb = ProgressBar::new(plan.tests.len() as u64);
    let rows = run_suite_with_progress(&mut executor, &plan, &pb)?;
    tracing::info!(
        tests = rows.len(),
        elapsed_s = start_time.elapsed().as_secs_f64(),
        "suite complete"
    );

    let report = Report::new(
        build_report_meta(environment),
        &plan.alphabet,
        executor.config().workload.clone(),
        executor.config().iterations,
        rows,
    );

    let output = match format {
        OutputFormat::Human => format_human_output(&report, &config.table_options())?,
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
    };
    write_output(cli, &output)
}

fn write_output(cli: &Cli, output: &str) -> anyhow::Result<()> {
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}
