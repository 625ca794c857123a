//! Install command - the whole step run

use crate::apt::AptGet;
use crate::cache::{AptPaths, EnvmanCacheStore, HostFilesystem};
use crate::cli::args::Cli;
use crate::config::StepConfig;
use crate::error::StepResult;
use crate::step::Step;
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the step with the parsed command line
pub async fn execute(cli: Cli) -> StepResult<()> {
    let ctx = UiContext::detect();

    ui::intro(&ctx, "Install apt packages");
    cli.inputs.print(&ctx);

    let config = StepConfig::load(&cli.inputs)?;

    let paths = AptPaths::new(cli.root);
    debug!("Resolving apt paths under {}", paths.root().display());

    let mut step = Step::new(
        ctx.clone(),
        paths,
        Box::new(AptGet::new(cli.apt_get)),
        Box::new(HostFilesystem),
        Box::new(EnvmanCacheStore::new(cli.envman, cli.cache_include_paths)),
    );
    step.execute(&config).await?;

    let verb = if config.is_upgrade() { "upgraded" } else { "installed" };
    ui::outro_success(&ctx, &format!("Packages {}", verb));
    Ok(())
}
