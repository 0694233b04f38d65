//! Environment Probe
//!
//! Collects host and runtime information for the report header and metadata.
//! None of it influences measurements.
//!
//! ## Collected Data
//!
//! - **Runtime**: first line printed by the configured version command
//!   (e.g. `java -version`, which writes to stderr)
//! - **CPU**: model name and clock from `/proc/cpuinfo`, core count
//! - **OS**: operating system and architecture
//! - **Timestamp**: UTC time of report generation
//!
//! Linux-specific data gracefully degrades on other platforms to "Unknown"
//! or `None`.

use chrono::Utc;
use flagbench_report::{EnvironmentInfo, ReportMeta};
use std::process::{Command, Stdio};

/// Probe the host, running `version_command` to identify the runtime
pub fn probe_environment(version_command: &[String]) -> EnvironmentInfo {
    let (cpu, cpu_mhz) = read_cpuinfo();
    let env = EnvironmentInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: cpu.unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
        cpu_mhz,
        runtime_version: runtime_version(version_command),
    };
    tracing::debug!(?env, "probed environment");
    env
}

/// Build report metadata
pub fn build_report_meta(environment: Option<EnvironmentInfo>) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        environment,
    }
}

fn runtime_version(command: &[String]) -> Option<String> {
    let (program, args) = command.split_first()?;
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            first_line(&stdout).or_else(|| first_line(&stderr))
        }
        Err(e) => {
            tracing::warn!(program = %program, error = %e, "runtime version probe failed");
            None
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Get CPU model name and clock from /proc/cpuinfo (Linux only)
fn read_cpuinfo() -> (Option<String>, Option<f64>) {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .map(|content| parse_cpuinfo(&content))
            .unwrap_or((None, None))
    }
    #[cfg(not(target_os = "linux"))]
    {
        (None, None)
    }
}

fn parse_cpuinfo(content: &str) -> (Option<String>, Option<f64>) {
    let field = |name: &str| {
        content
            .lines()
            .find(|l| l.starts_with(name))
            .and_then(|l| l.split(':').nth(1))
            .map(|s| s.trim().to_string())
    };

    let model = field("model name");
    let mhz = field("cpu MHz").and_then(|s| s.parse::<f64>().ok());
    (model, mhz)
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
