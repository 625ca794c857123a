//! Configuration schema for the step
//!
//! `StepInputs` holds the raw strings exactly as the CI platform injected
//! them; `StepConfig` is the validated, immutable record built from them.

use clap::Args;
use std::fmt;
use std::str::FromStr;

/// Raw step inputs, read from the environment or the equivalent flags
#[derive(Args, Debug, Clone, Default)]
pub struct StepInputs {
    /// Space-separated list of packages to install
    #[arg(long, env = "packages")]
    pub packages: Option<String>,

    /// Extra apt-get arguments, shell-quoted
    #[arg(long, env = "options", allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Run `apt-get upgrade` instead of `install` (yes/no)
    #[arg(long, env = "upgrade")]
    pub upgrade: Option<String>,

    /// Package cache policy (all/none)
    #[arg(long, env = "cache_level")]
    pub cache_level: Option<String>,
}

/// Whether to upgrade instead of install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upgrade {
    Yes,
    No,
}

impl Upgrade {
    /// Accepted input values
    pub const VALUES: &'static [&'static str] = &["yes", "no"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl FromStr for Upgrade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package archive cache policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLevel {
    /// Keep downloaded archives and hand them to the pipeline cache
    All,
    /// Disable apt's on-disk cache and purge what is there
    Disabled,
}

impl CacheLevel {
    /// Accepted input values
    pub const VALUES: &'static [&'static str] = &["all", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Disabled => "none",
        }
    }
}

impl FromStr for CacheLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "none" => Ok(Self::Disabled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated step configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// Space-separated package list, kept verbatim
    pub packages: String,

    /// Shell-quoted extra arguments (empty when unset)
    pub options: String,

    /// Upgrade selection, `None` when unset
    pub upgrade: Option<Upgrade>,

    /// Cache policy, `None` when unset
    pub cache_level: Option<CacheLevel>,
}

impl StepConfig {
    /// Whether the step should run `apt-get upgrade`
    pub fn is_upgrade(&self) -> bool {
        self.upgrade == Some(Upgrade::Yes)
    }
}
