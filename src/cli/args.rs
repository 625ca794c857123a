//! CLI argument definitions using clap derive
//!
//! Every flag has an environment variable fallback so the binary can run
//! as a pipeline step with no arguments at all.

use crate::config::StepInputs;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Install or upgrade apt packages, with optional archive caching
///
/// Step inputs are read from the `packages`, `options`, `upgrade` and
/// `cache_level` environment variables unless passed as flags.
#[derive(Parser, Debug)]
#[command(name = "apt-install-step")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Step inputs
    #[command(flatten)]
    pub inputs: StepInputs,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, env = "APT_STEP_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Filesystem root the apt cache paths are resolved under
    #[arg(long, env = "APT_STEP_ROOT", default_value = "/")]
    pub root: PathBuf,

    /// apt-get executable
    #[arg(long, env = "APT_STEP_APT_GET", default_value = "apt-get")]
    pub apt_get: String,

    /// envman executable used to export cache paths
    #[arg(long, env = "APT_STEP_ENVMAN", default_value = "envman")]
    pub envman: String,

    /// Paths already registered for the pipeline cache by earlier steps
    #[arg(long, env = "BITRISE_CACHE_INCLUDE_PATHS", hide = true)]
    pub cache_include_paths: Option<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}
