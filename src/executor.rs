// file: src/executor.rs
// version: 1.0.0
// guid: 8b2e4d61-0a9f-4c37-b5d8-2e7f1a6c9b03

//! Process execution for the conversion script

use crate::error::RunError;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A program plus its arguments, run without an intermediate shell string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Create a new invocation
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Shell-interpretable rendering, for logs
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push_str(" \"");
            line.push_str(&arg.replace('\\', "\\\\").replace('"', "\\\""));
            line.push('"');
        }
        line
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Informational only
    pub exit_code: Option<i32>,
}

/// Trait for running an invocation to completion and capturing its output
#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, RunError>;
}

/// Runs invocations as local child processes
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    working_directory: Option<PathBuf>,
}

impl ShellRunner {
    /// Create a runner that inherits the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that starts processes in `dir`
    pub fn with_working_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: Some(dir.into()),
        }
    }
}

#[async_trait::async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, RunError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(ref wd) = self.working_directory {
            cmd.current_dir(wd);
        }

        debug!("Executing: {}", invocation.command_line());

        // Spawned so that a panic while waiting surfaces as a JoinError
        let handle = tokio::spawn(async move { cmd.output().await });
        let output = match handle.await {
            Ok(result) => result?,
            Err(e) if e.is_panic() => return Err(RunError::Opaque),
            Err(e) => return Err(RunError::Failed(e.to_string())),
        };

        let exit_code = output.status.code();
        debug!("Process exited with status {:?}", exit_code);

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code,
        })
    }
}
