//! Compile Step
//!
//! Builds the test programs before the suite runs:
//! `<program> <args...> <every source file>`. Sources are the files in
//! `source_dir` with `source_extension`, passed in sorted order. A non-zero
//! compiler exit aborts the run before any test executes.

use crate::config::CompilerConfig;
use flagbench_core::BenchError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of a successful compile
#[derive(Debug, Clone)]
pub struct CompileSummary {
    /// Number of source files handed to the compiler
    pub sources: usize,
    /// Wall-clock compile time
    pub duration: Duration,
}

/// Compile every source file described by `config`
pub fn compile(config: &CompilerConfig) -> Result<CompileSummary, BenchError> {
    let command_line = || {
        let mut parts = vec![config.program.clone()];
        parts.extend(config.args.iter().cloned());
        parts.push(format!(
            "{}/*.{}",
            config.source_dir.display(),
            config.source_extension
        ));
        parts.join(" ")
    };

    let sources = collect_sources(&config.source_dir, &config.source_extension).map_err(|e| {
        BenchError::Compilation {
            command: command_line(),
            reason: format!(
                "cannot read source directory {}: {}",
                config.source_dir.display(),
                e
            ),
            stderr: String::new(),
        }
    })?;

    if sources.is_empty() {
        return Err(BenchError::Compilation {
            command: command_line(),
            reason: format!(
                "no .{} files in {}",
                config.source_extension,
                config.source_dir.display()
            ),
            stderr: String::new(),
        });
    }

    tracing::info!(
        program = %config.program,
        sources = sources.len(),
        "compiling test programs"
    );
    let start = Instant::now();

    let output = Command::new(&config.program)
        .args(&config.args)
        .args(&sources)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| BenchError::Compilation {
            command: command_line(),
            reason: format!("could not launch compiler: {}", e),
            stderr: String::new(),
        })?;

    if !output.status.success() {
        return Err(BenchError::Compilation {
            command: command_line(),
            reason: format!("compiler {}", output.status),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let duration = start.elapsed();
    tracing::debug!(elapsed_ms = duration.as_millis() as u64, "compile finished");

    Ok(CompileSummary {
        sources: sources.len(),
        duration,
    })
}

/// Files in `dir` whose extension is `extension`, sorted by path
pub fn collect_sources(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}
