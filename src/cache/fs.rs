//! Filesystem operations used by the cache policy

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Filesystem mutations performed during cache housekeeping
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Append `contents` to the file at `path`, creating it if missing
    async fn append(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Remove a file or a directory tree; an absent path is not an error
    async fn remove_all(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFilesystem;

#[async_trait]
impl Filesystem for HostFilesystem {
    async fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn remove_all(&self, path: &Path) -> io::Result<()> {
        let metadata = match fs::symlink_metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} already absent", path.display());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let result = if metadata.is_dir() {
            fs::remove_dir_all(path).await
        } else {
            fs::remove_file(path).await
        };

        match result {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
