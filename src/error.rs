//! Error types for the apt install step
//!
//! All modules use `StepResult<T>` as their return type. Every error is
//! terminal: `main` prints it once and exits with status 1.

use crate::apt::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for step operations
pub type StepResult<T> = Result<T, StepError>;

/// All errors that can occur while running the step
#[derive(Error, Debug)]
pub enum StepError {
    // Input errors
    #[error("Issue with input: no {field} parameter specified")]
    MissingRequiredInput { field: &'static str },

    #[error("Issue with input: invalid '{field}' specified ({value}), valid options: [{}]", .allowed.join(" "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Can't split options ({options}): {reason}")]
    OptionsParse { options: String, reason: String },

    // Cache errors
    #[error("Could not apply caching: could not {step} at {path}: {source}")]
    CacheHousekeeping {
        step: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not apply caching: could not add packages to cache: {0}")]
    CacheCommit(String),

    // Process errors
    #[error("Can't {phase}: `{command}` exited with {status}")]
    ExternalCommand {
        phase: Phase,
        command: String,
        status: String,
    },

    #[error("Can't {phase}: failed to start `{command}`: {source}")]
    CommandSpawn {
        phase: Phase,
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl StepError {
    /// Create a cache housekeeping error for a failed sub-step
    pub fn housekeeping(
        step: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheHousekeeping {
            step,
            path: path.into(),
            source,
        }
    }

    /// Create an invalid enum value error
    pub fn invalid_enum(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
            allowed,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredInput { .. } => {
                Some("Set the `packages` input to a space-separated list, e.g. `curl git`")
            }
            Self::OptionsParse { .. } => Some("Check the `options` input for unbalanced quotes"),
            Self::CacheHousekeeping { .. } => {
                Some("Cache housekeeping writes under /etc/apt and /var/cache/apt; run the step as root")
            }
            Self::CommandSpawn { .. } => Some("Make sure apt-get is installed and on PATH"),
            _ => None,
        }
    }
}
