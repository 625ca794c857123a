//! Step configuration loading
//!
//! Inputs are read once at process entry (clap pulls them from the
//! environment) and validated into an immutable `StepConfig`.

pub mod schema;

pub use schema::{CacheLevel, StepConfig, StepInputs, Upgrade};

use crate::error::{StepError, StepResult};
use crate::ui::{self, UiContext};
use tracing::debug;

/// Treat an input injected as an empty string the same as an unset one
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl StepInputs {
    /// Echo the raw inputs so the run log shows what the step received
    pub fn print(&self, ctx: &UiContext) {
        ui::section(ctx, "Configs:");
        ui::config_entry(ctx, "Packages", non_empty(&self.packages).unwrap_or(""));
        ui::config_entry(ctx, "Options", non_empty(&self.options).unwrap_or(""));
        ui::config_entry(ctx, "Upgrade", non_empty(&self.upgrade).unwrap_or(""));
        ui::config_entry(
            ctx,
            "Cache Level",
            non_empty(&self.cache_level).unwrap_or(""),
        );
    }
}

impl StepConfig {
    /// Validate raw inputs into a step configuration
    ///
    /// Checks run in a fixed order: `packages` first, then `upgrade`, then
    /// `cache_level`, so the first offending field is the one reported.
    pub fn load(inputs: &StepInputs) -> StepResult<Self> {
        let packages = match non_empty(&inputs.packages) {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => return Err(StepError::MissingRequiredInput { field: "packages" }),
        };

        let upgrade = non_empty(&inputs.upgrade)
            .map(|v| {
                v.parse::<Upgrade>()
                    .map_err(|_| StepError::invalid_enum("upgrade", v, Upgrade::VALUES))
            })
            .transpose()?;

        let cache_level = non_empty(&inputs.cache_level)
            .map(|v| {
                v.parse::<CacheLevel>()
                    .map_err(|_| StepError::invalid_enum("cache_level", v, CacheLevel::VALUES))
            })
            .transpose()?;

        let config = Self {
            packages,
            options: non_empty(&inputs.options).unwrap_or_default().to_string(),
            upgrade,
            cache_level,
        };
        debug!(config = ?config, "Loaded step configuration");

        Ok(config)
    }
}
