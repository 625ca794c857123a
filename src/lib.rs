//! apt install step
//!
//! CI pipeline step that installs or upgrades apt packages, optionally
//! keeping downloaded archives in the pipeline cache between runs.

pub mod apt;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod step;
pub mod ui;

pub use error::{StepError, StepResult};
