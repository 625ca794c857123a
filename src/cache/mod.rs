//! apt package cache policy
//!
//! Applied once per run, before `apt-get update`.
//!
//! # Policies
//!
//! | Level | Effect |
//! |-------|--------|
//! | `none` | apt cache disabled via config drop-in, archives and lookup files purged |
//! | `all` | container auto-clean hook removed, archives registered with the pipeline cache |
//! | unset | nothing touched |

pub mod fs;
pub mod paths;
pub mod store;

pub use fs::{Filesystem, HostFilesystem};
pub use paths::{AptPaths, DISABLE_CACHE_DIRECTIVES};
pub use store::{CacheStore, EnvmanCacheStore, CACHE_INCLUDE_PATHS_KEY};

use crate::config::CacheLevel;
use crate::error::{StepError, StepResult};
use tracing::{debug, info};

/// Apply the selected cache policy
pub async fn apply(
    level: Option<CacheLevel>,
    paths: &AptPaths,
    fs: &dyn Filesystem,
    store: &mut dyn CacheStore,
) -> StepResult<()> {
    match level {
        Some(CacheLevel::Disabled) => apply_no_cache(paths, fs).await,
        Some(CacheLevel::All) => apply_all_cache(paths, fs, store).await,
        None => {
            debug!("No cache level set, leaving apt cache untouched");
            Ok(())
        }
    }
}

async fn apply_no_cache(paths: &AptPaths, fs: &dyn Filesystem) -> StepResult<()> {
    let conf = paths.disable_cache_conf();
    fs.append(&conf, DISABLE_CACHE_DIRECTIVES)
        .await
        .map_err(|e| StepError::housekeeping("disable package cache", &conf, e))?;

    let archives = paths.archives_dir();
    fs.remove_all(&archives)
        .await
        .map_err(|e| StepError::housekeeping("remove downloaded packages", &archives, e))?;

    // Removed twice; the second call is a no-op once the file is gone
    let pkgcache = paths.pkgcache_bin();
    for _ in 0..2 {
        fs.remove_all(&pkgcache)
            .await
            .map_err(|e| StepError::housekeeping("remove lookup files", &pkgcache, e))?;
    }

    info!("apt package cache disabled");
    Ok(())
}

async fn apply_all_cache(
    paths: &AptPaths,
    fs: &dyn Filesystem,
    store: &mut dyn CacheStore,
) -> StepResult<()> {
    let docker_clean = paths.docker_clean();
    fs.remove_all(&docker_clean)
        .await
        .map_err(|e| StepError::housekeeping("remove docker clean file", &docker_clean, e))?;

    store.include_path(&paths.archives_dir());
    store.commit().await?;

    info!("apt archives registered for caching");
    Ok(())
}
