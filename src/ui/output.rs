//! Output functions for consistent step log formatting
//!
//! Everything here writes to stdout: the run log of a CI step is its
//! stdout, and tracing diagnostics go to stderr separately.

use super::context::UiContext;
use console::style;

/// Display intro banner
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}", style(title).cyan().bold());
    }
}

/// Display success outro
pub fn outro_success(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).green().bold()).ok();
    } else {
        println!();
        println!("{} {}", style("[OK]").green(), message);
    }
}

/// Display a section header
pub fn section(ctx: &UiContext, title: &str) {
    println!();
    if ctx.use_fancy_output() {
        cliclack::log::info(style(title).bold()).ok();
    } else {
        println!("{}", style(title).bold());
    }
}

/// Print one `- Key: value` line of the configuration echo
pub fn config_entry(ctx: &UiContext, key: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("- {}: {}", style(key).dim(), value);
    } else {
        println!("- {}: {}", key, value);
    }
}

/// Print a command line about to be executed
pub fn command(ctx: &UiContext, line: &str) {
    println!();
    if ctx.use_fancy_output() {
        cliclack::log::step(format!("$ {}", style(line).cyan())).ok();
    } else {
        println!("{}", style(format!("$ {}", line)).cyan());
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(message).ok();
    } else {
        println!("  {} {}", style("[OK]").green(), message);
    }
}
