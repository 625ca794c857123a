//! UI module for the step's run log
//!
//! Plain, greppable lines in CI; `cliclack` styling only when a person is
//! running the binary from a terminal.
//!
//! # Example
//!
//! ```rust,ignore
//! use apt_install_step::ui::{self, UiContext};
//!
//! let ctx = UiContext::detect();
//!
//! ui::intro(&ctx, "Install apt packages");
//! ui::command(&ctx, "apt-get update");
//! ui::outro_success(&ctx, "Packages installed");
//! ```

mod context;
mod output;

pub use context::UiContext;
pub use output::{command, config_entry, intro, outro_success, section, step_ok};
