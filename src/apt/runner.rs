//! Package manager invocation
//!
//! `PackageManager` is the seam between the step and the external
//! `apt-get` binary, so the orchestration can be driven by a recording
//! stub in tests.

use crate::apt::args::printable;
use crate::error::{StepError, StepResult};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Which of the two package manager invocations is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Package index refresh (`apt-get update`)
    Update,
    /// The install or upgrade of the requested packages
    Install,
}

impl Phase {
    /// Label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Update => "update",
            Phase::Install => "install packages",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Abstract package manager interface
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Program name or path, used for the printed command line
    fn program(&self) -> &str;

    /// Run the package manager with `args`, blocking until it exits
    ///
    /// Output goes straight to the step's own stdout/stderr. A non-zero
    /// exit is reported as an error tagged with `phase`.
    async fn run(&self, phase: Phase, args: &[String]) -> StepResult<()>;
}

/// Package manager backed by the `apt-get` executable
pub struct AptGet {
    program: String,
}

impl AptGet {
    /// Create a runner for the given `apt-get` program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for AptGet {
    fn default() -> Self {
        Self::new("apt-get")
    }
}

#[async_trait]
impl PackageManager for AptGet {
    fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, phase: Phase, args: &[String]) -> StepResult<()> {
        let command = printable(&self.program, args);
        debug!("Executing: {}", command);

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| StepError::CommandSpawn {
                phase,
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(StepError::ExternalCommand {
                phase,
                command,
                status: status.to_string(),
            });
        }

        info!("{} finished", phase);
        Ok(())
    }
}
