//! Process Runner
//!
//! The seam between the harness and the external test programs. Each call
//! blocks until the child exits and hands back either its captured stdout or
//! the reason it produced none.
//!
//! There is no timeout: a test program that never exits blocks the suite.

use crate::error::InvocationFailure;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Runs one test program with one workload argument
pub trait ProcessRunner {
    /// Invoke `test_id` with `workload` and return its full stdout
    fn invoke(&mut self, test_id: &str, workload: &str) -> Result<String, InvocationFailure>;
}

impl<F> ProcessRunner for F
where
    F: FnMut(&str, &str) -> Result<String, InvocationFailure>,
{
    fn invoke(&mut self, test_id: &str, workload: &str) -> Result<String, InvocationFailure> {
        self(test_id, workload)
    }
}

/// Spawns `<program> <args...> <test_id> <workload>` for every invocation
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandRunner {
    /// Runner for `program` with fixed leading arguments
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
        }
    }

    /// Run every child in `dir`
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Command line used for `test_id`, for logging
    pub fn describe(&self, test_id: &str, workload: &str) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 3);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(test_id);
        parts.push(workload);
        parts.join(" ")
    }
}

impl ProcessRunner for CommandRunner {
    fn invoke(&mut self, test_id: &str, workload: &str) -> Result<String, InvocationFailure> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(test_id)
            .arg(workload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        tracing::trace!(command = %self.describe(test_id, workload), "spawning test program");
        let output = command.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(match output.status.code() {
                Some(code) => InvocationFailure::ExitCode { code, stderr },
                None => InvocationFailure::Signaled {
                    signal: termination_signal(output.status),
                    stderr,
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(unix)]
fn termination_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(-1)
}

#[cfg(not(unix))]
fn termination_signal(_status: ExitStatus) -> i32 {
    -1
}
