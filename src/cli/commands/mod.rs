//! CLI command implementations

pub mod install;

pub use install::execute as install;
