use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use tokio::process::Command;

/// A build tool invocation: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub current_dir: PathBuf,
}

impl BuildCommand {
    /// `uv build`, run from the project directory.
    pub fn uv_build(current_dir: PathBuf) -> Self {
        Self {
            program: "uv",
            args: &["build"],
            current_dir,
        }
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a build to completion and reports how it exited.
pub trait Builder {
    async fn run(&self, command: &BuildCommand) -> Result<ExitStatus>;
}

/// Spawns the build tool as a child process sharing our stdio.
#[derive(Debug)]
pub struct ProcessBuilder;

impl Builder for ProcessBuilder {
    async fn run(&self, command: &BuildCommand) -> Result<ExitStatus> {
        Command::new(command.program)
            .args(command.args)
            .current_dir(&command.current_dir)
            .status()
            .await
            .with_context(|| format!("Failed to execute command: {}", command))
    }
}
