//! Well-known apt paths touched by the cache policy

use std::path::{Path, PathBuf};

/// apt configuration drop-in that turns the on-disk cache off
const DISABLE_CACHE_CONF: &str = "etc/apt/apt.conf.d/00_disable-cache";
/// Downloaded `.deb` archives
const ARCHIVES_DIR: &str = "var/cache/apt/archives";
/// Binary package lookup cache
const PKGCACHE_BIN: &str = "var/cache/apt/pkgcache.bin";
/// Debian/Ubuntu container images ship this hook to clean the cache after
/// every install
const DOCKER_CLEAN: &str = "etc/apt/apt.conf.d/docker-clean";

/// Directives appended to `00_disable-cache` for the `none` policy
pub const DISABLE_CACHE_DIRECTIVES: &str = "Dir::Cache::pkgcache \"\";\n\
    Dir::Cache::srcpkgcache \"\";\n\
    Dir::Cache \"\";\n\
    Dir::Cache::archives \"\";\n";

/// apt paths resolved under a filesystem root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AptPaths {
    root: PathBuf,
}

impl AptPaths {
    /// Paths under `root` (`/` on a real host)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn disable_cache_conf(&self) -> PathBuf {
        self.root.join(DISABLE_CACHE_CONF)
    }

    pub fn archives_dir(&self) -> PathBuf {
        self.root.join(ARCHIVES_DIR)
    }

    pub fn pkgcache_bin(&self) -> PathBuf {
        self.root.join(PKGCACHE_BIN)
    }

    pub fn docker_clean(&self) -> PathBuf {
        self.root.join(DOCKER_CLEAN)
    }
}

impl Default for AptPaths {
    fn default() -> Self {
        Self::new("/")
    }
}
