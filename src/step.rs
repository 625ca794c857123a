//! Step orchestration
//!
//! Runs the phases of one invocation in order: assemble the install
//! arguments, apply the cache policy, `apt-get update`, then
//! `apt-get install|upgrade`. The first failure ends the run.

use crate::apt::{install_args, printable, update_args, PackageManager, Phase};
use crate::cache::{self, AptPaths, CacheStore, Filesystem};
use crate::config::StepConfig;
use crate::error::StepResult;
use crate::ui::{self, UiContext};
use tracing::debug;

/// One configured run of the step
pub struct Step {
    ctx: UiContext,
    paths: AptPaths,
    manager: Box<dyn PackageManager>,
    fs: Box<dyn Filesystem>,
    store: Box<dyn CacheStore>,
}

impl Step {
    pub fn new(
        ctx: UiContext,
        paths: AptPaths,
        manager: Box<dyn PackageManager>,
        fs: Box<dyn Filesystem>,
        store: Box<dyn CacheStore>,
    ) -> Self {
        Self {
            ctx,
            paths,
            manager,
            fs,
            store,
        }
    }

    /// Run every phase for `config`
    pub async fn execute(&mut self, config: &StepConfig) -> StepResult<()> {
        // Assembled up front: bad quoting in `options` must fail before
        // anything on the host is touched.
        let install = install_args(config)?;
        debug!("Install arguments: {:?}", install);

        cache::apply(
            config.cache_level,
            &self.paths,
            self.fs.as_ref(),
            self.store.as_mut(),
        )
        .await?;
        if let Some(level) = config.cache_level {
            ui::step_ok(&self.ctx, &format!("Cache level '{}' applied", level));
        }

        self.run(Phase::Update, &update_args()).await?;
        self.run(Phase::Install, &install).await
    }

    async fn run(&self, phase: Phase, args: &[String]) -> StepResult<()> {
        ui::command(&self.ctx, &printable(self.manager.program(), args));
        self.manager.run(phase, args).await
    }
}
