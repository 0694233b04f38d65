//! Configuration loading from flagbench.toml
//!
//! The suite, the command used to launch each test, the compile step and the
//! report presentation can all be set in a `flagbench.toml` file. The file is
//! discovered by walking up from the current directory; every field has a
//! default, so an absent file reproduces the stock Java suite.

use crate::executor::ExecutionConfig;
use crate::planner::{SuitePlan, build_plan};
use flagbench_core::{
    BenchError, CommandRunner, DEFAULT_ITERATIONS, DEFAULT_PREFIX_LEN, DEFAULT_WORKLOAD,
    FlagAlphabet,
};
use flagbench_report::{TableOptions, TableStyle};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`FlagbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "flagbench.toml";

/// FlagBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlagbenchConfig {
    /// Tests, flag alphabet and workload
    #[serde(default)]
    pub suite: SuiteConfig,
    /// How each test program is launched
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Compile step run before the suite
    #[serde(default)]
    pub compiler: CompilerConfig,
    /// Environment probe
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Report presentation
    #[serde(default)]
    pub output: OutputConfig,
}

/// Suite definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Test identifiers, run in this order
    #[serde(default = "default_tests")]
    pub tests: Vec<String>,
    /// Flag symbols in column order (e.g. "ALIECBFR")
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Leading identifier characters that are not scanned for flags
    #[serde(default = "default_prefix_len")]
    pub prefix_len: usize,
    /// Argument passed to every test program
    #[serde(default = "default_workload")]
    pub workload: String,
    /// Executions per test
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            tests: default_tests(),
            alphabet: default_alphabet(),
            prefix_len: default_prefix_len(),
            workload: default_workload(),
            iterations: default_iterations(),
        }
    }
}

/// Stock suite: array (A) and linked (L) list lookups in their loop variants
pub const DEFAULT_TESTS: [&str; 27] = [
    "Test_AE",
    "Test_AEB",
    "Test_AEBF",
    "Test_AEF",
    "Test_AI",
    "Test_AIB",
    "Test_AIC",
    "Test_AICB",
    "Test_AICBF",
    "Test_AICBR",
    "Test_AICF",
    "Test_AICR",
    "Test_LE",
    "Test_LEB",
    "Test_LEBF",
    "Test_LEF",
    "Test_LI",
    "Test_LIB",
    "Test_LIC",
    "Test_LICR",
    "Test_LICB",
    "Test_LICBF",
    "Test_LICBR",
    "Test_LICF",
    "Test_one_liner",
    "Test_hash",
    "Test_linkedhash",
];

fn default_tests() -> Vec<String> {
    DEFAULT_TESTS.iter().map(|t| t.to_string()).collect()
}
fn default_alphabet() -> String {
    FlagAlphabet::default().to_string()
}
fn default_prefix_len() -> usize {
    DEFAULT_PREFIX_LEN
}
fn default_workload() -> String {
    DEFAULT_WORKLOAD.to_string()
}
fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

/// Test program launcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Executable that runs a test
    #[serde(default = "default_runner_program")]
    pub program: String,
    /// Arguments placed before the test id and workload
    #[serde(default = "default_runner_args")]
    pub args: Vec<String>,
    /// Directory the test programs run in (current directory if unset)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_runner_program(),
            args: default_runner_args(),
            working_dir: None,
        }
    }
}

impl RunnerConfig {
    /// Build the process runner described by this section
    pub fn command_runner(&self) -> CommandRunner {
        let runner = CommandRunner::new(self.program.clone(), self.args.clone());
        match &self.working_dir {
            Some(dir) => runner.with_working_dir(dir),
            None => runner,
        }
    }
}

fn default_runner_program() -> String {
    "java".to_string()
}
fn default_runner_args() -> Vec<String> {
    vec!["-cp".to_string(), "bin/".to_string()]
}

/// Compile step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Run the compiler before the suite
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Compiler executable
    #[serde(default = "default_compiler_program")]
    pub program: String,
    /// Arguments placed before the source files
    #[serde(default = "default_compiler_args")]
    pub args: Vec<String>,
    /// Directory scanned for sources
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Extension (without dot) of source files
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_compiler_program(),
            args: default_compiler_args(),
            source_dir: default_source_dir(),
            source_extension: default_source_extension(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_compiler_program() -> String {
    "javac".to_string()
}
fn default_compiler_args() -> Vec<String> {
    ["-cp", "src/", "-d", "bin/"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}
fn default_source_extension() -> String {
    "java".to_string()
}

/// Environment probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Probe host and runtime at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Command printing the runtime version (stdout or stderr)
    #[serde(default = "default_version_command")]
    pub version_command: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            version_command: default_version_command(),
        }
    }
}

fn default_version_command() -> Vec<String> {
    vec!["java".to_string(), "-version".to_string()]
}

/// Report presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Marker for an active flag
    #[serde(default = "default_active_marker")]
    pub active_marker: String,
    /// Marker for an inactive flag
    #[serde(default = "default_inactive_marker")]
    pub inactive_marker: String,
    /// Decimal places of the average column
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Table style: "rounded", "rounded_grid" or "plain"
    #[serde(default)]
    pub style: TableStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            active_marker: default_active_marker(),
            inactive_marker: default_inactive_marker(),
            decimals: default_decimals(),
            style: TableStyle::default(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_active_marker() -> String {
    "🟢".to_string()
}
fn default_inactive_marker() -> String {
    "🔴".to_string()
}
fn default_decimals() -> usize {
    1
}

impl FlagbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Walk up from the current directory looking for `flagbench.toml`.
    ///
    /// Returns `Ok(None)` when no file exists; a file that exists but does not
    /// parse is an error.
    pub fn discover() -> anyhow::Result<Option<(PathBuf, Self)>> {
        let mut dir = std::env::current_dir()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parsed flag alphabet
    pub fn alphabet(&self) -> Result<FlagAlphabet, BenchError> {
        self.suite.alphabet.parse()
    }

    /// Workload and iteration count for the executor
    pub fn execution_config(&self) -> Result<ExecutionConfig, BenchError> {
        ExecutionConfig::new(self.suite.workload.clone(), self.suite.iterations)
    }

    /// Check the suite section and build the plan for the tests matching `filter`.
    ///
    /// An empty test list, a bad alphabet or zero iterations is rejected
    /// before anything runs. A filter that matches nothing is not an error.
    pub fn validate(&self, filter: Option<&Regex>) -> Result<SuitePlan, BenchError> {
        if self.suite.tests.is_empty() {
            return Err(BenchError::InvalidConfig(
                "suite.tests must list at least one test".to_string(),
            ));
        }
        self.execution_config()?;
        Ok(build_plan(
            self.suite.tests.iter().cloned(),
            filter,
            self.alphabet()?,
            self.suite.prefix_len,
        ))
    }

    /// Table options for human output
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            style: self.output.style,
            active_marker: self.output.active_marker.clone(),
            inactive_marker: self.output.inactive_marker.clone(),
            decimals: self.output.decimals,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        let tests = DEFAULT_TESTS
            .iter()
            .map(|t| format!("    \"{}\",", t))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# FlagBench Configuration

[suite]
# Test programs, run in this order
tests = [
{tests}
]
# Flag symbols in report column order
alphabet = "ALIECBFR"
# Leading characters of each test id that are not scanned for flags
prefix_len = 5
# Argument passed to every test program
workload = "A5000"
# Executions per test; the report shows their mean
iterations = 10

[runner]
# Each test runs as: <program> <args...> <test id> <workload>
program = "java"
args = ["-cp", "bin/"]
# working_dir = "."

[compiler]
enabled = true
# Runs as: <program> <args...> <every source file>
program = "javac"
args = ["-cp", "src/", "-d", "bin/"]
source_dir = "src"
source_extension = "java"

[probe]
enabled = true
version_command = ["java", "-version"]

[output]
# human, json or csv
format = "human"
active_marker = "🟢"
inactive_marker = "🔴"
decimals = 1
# rounded, rounded_grid or plain
style = "rounded"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlagbenchConfig::default();
        assert_eq!(config.suite.tests.len(), 27);
        assert_eq!(config.suite.tests[0], "Test_AE");
        assert_eq!(config.suite.alphabet, "ALIECBFR");
        assert_eq!(config.suite.prefix_len, 5);
        assert_eq!(config.suite.workload, "A5000");
        assert_eq!(config.suite.iterations, 10);
        assert_eq!(config.runner.program, "java");
        assert!(config.compiler.enabled);
        assert_eq!(config.output.style, TableStyle::Rounded);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [suite]
            tests = ["Test_B", "Test_A"]
            alphabet = "AB"
            iterations = 3

            [runner]
            program = "python3"
            args = ["-m", "bench"]

            [output]
            style = "plain"
        "#;

        let config: FlagbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.suite.tests, vec!["Test_B", "Test_A"]);
        assert_eq!(config.suite.iterations, 3);
        assert_eq!(config.runner.args, vec!["-m", "bench"]);
        assert_eq!(config.output.style, TableStyle::Plain);
        // Defaults should still apply
        assert_eq!(config.suite.workload, "A5000");
        assert_eq!(config.compiler.program, "javac");
        assert_eq!(config.alphabet().unwrap().len(), 2);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: FlagbenchConfig = toml::from_str(&FlagbenchConfig::default_toml()).unwrap();
        let defaults = FlagbenchConfig::default();
        assert_eq!(config.suite.tests, defaults.suite.tests);
        assert_eq!(config.suite.alphabet, defaults.suite.alphabet);
        assert_eq!(config.compiler.args, defaults.compiler.args);
        assert_eq!(config.output.active_marker, "🟢");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = FlagbenchConfig::default();
        config.suite.alphabet = "AA".to_string();
        assert!(config.alphabet().is_err());

        config.suite.iterations = 0;
        assert!(config.execution_config().is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = FlagbenchConfig::default();
        let re = Regex::new("^Test_L").unwrap();
        let plan = config.validate(Some(&re)).unwrap();
        assert_eq!(plan.tests.len(), 12);
        assert!(plan.tests.iter().all(|t| t.starts_with("Test_L")));
        assert_eq!(plan.alphabet.len(), 8);
        assert_eq!(plan.prefix_len, 5);

        config.suite.tests.clear();
        assert!(matches!(
            config.validate(None),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[suite]\nworkload = \"B10\"\n").unwrap();

        let config = FlagbenchConfig::load(&path).unwrap();
        assert_eq!(config.suite.workload, "B10");

        std::fs::write(&path, "[suite]\niterations = \"many\"\n").unwrap();
        assert!(FlagbenchConfig::load(&path).is_err());
    }
}
