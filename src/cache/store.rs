//! Pipeline cache collaborator
//!
//! The pipeline's cache step snapshots whatever paths are listed in
//! `BITRISE_CACHE_INCLUDE_PATHS` at the end of the build. Registering a
//! path means appending it to that list and exporting the new value with
//! `envman`, so later steps in the same build see it. The value is written
//! to `envman`'s stdin, which keeps long include lists off the argv.

use crate::error::{StepError, StepResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Environment key holding the newline-separated include list
pub const CACHE_INCLUDE_PATHS_KEY: &str = "BITRISE_CACHE_INCLUDE_PATHS";

/// Marks paths for persistence between pipeline runs
#[async_trait]
pub trait CacheStore: Send {
    /// Mark `path` for inclusion in the next commit
    fn include_path(&mut self, path: &Path);

    /// Persist the registered paths
    async fn commit(&mut self) -> StepResult<()>;
}

/// Cache store that exports the include list through `envman`
pub struct EnvmanCacheStore {
    envman: String,
    existing: Option<String>,
    include: Vec<PathBuf>,
}

impl EnvmanCacheStore {
    /// Create a store
    ///
    /// `existing` is the current value of `BITRISE_CACHE_INCLUDE_PATHS`, if
    /// an earlier step already registered paths.
    pub fn new(envman: impl Into<String>, existing: Option<String>) -> Self {
        Self {
            envman: envman.into(),
            existing: existing.filter(|v| !v.is_empty()),
            include: Vec::new(),
        }
    }

    /// Paths registered so far
    pub fn included(&self) -> &[PathBuf] {
        &self.include
    }

    /// The include list value to export: earlier entries first
    pub fn merged_value(&self) -> String {
        let mut lines: Vec<String> = self.existing.iter().cloned().collect();
        lines.extend(self.include.iter().map(|p| p.display().to_string()));
        lines.join("\n")
    }

    fn envman_args(&self) -> Vec<String> {
        vec![
            "add".to_string(),
            "--key".to_string(),
            CACHE_INCLUDE_PATHS_KEY.to_string(),
        ]
    }
}

#[async_trait]
impl CacheStore for EnvmanCacheStore {
    fn include_path(&mut self, path: &Path) {
        debug!("Including {} in pipeline cache", path.display());
        self.include.push(path.to_path_buf());
    }

    async fn commit(&mut self) -> StepResult<()> {
        if self.include.is_empty() {
            debug!("No cache paths registered, nothing to commit");
            return Ok(());
        }

        let spawn_failed = |e: std::io::Error| {
            StepError::CacheCommit(format!("failed to run {}: {}", self.envman, e))
        };

        let mut child = Command::new(&self.envman)
            .args(self.envman_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_failed)?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(self.merged_value().as_bytes()).await {
                // envman exited without reading; its status decides below
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                result => result.map_err(spawn_failed)?,
            }
            // Dropping closes the pipe so envman sees EOF
        }

        let output = child.wait_with_output().await.map_err(spawn_failed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StepError::CacheCommit(format!(
                "{} exited with {}: {}",
                self.envman,
                output.status,
                stderr.trim()
            )));
        }

        info!(
            "Registered {} path(s) in {}",
            self.include.len(),
            CACHE_INCLUDE_PATHS_KEY
        );
        Ok(())
    }
}
