//! Post-configuration steps as a typestate pipeline.
//!
//! Each stage can only be reached from the one before it, so migrations
//! cannot run until the database file has been reset, and the database is
//! only reset once the environment reflects the written `.env`.

use std::marker::PhantomData;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::prompt::ConfirmPrompt;
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

pub const MULTISITE_PROMPT: ConfirmPrompt = ConfirmPrompt::new(
    "multisite",
    "Would you like to configure multisite? (Requires Statamic PRO license)",
    false,
);

/// Config buffers have been written to disk.
#[derive(Debug)]
pub struct Configured;
/// The process environment matches the project's env file.
#[derive(Debug)]
pub struct EnvironmentReloaded;
#[derive(Debug)]
pub struct DatabaseReset;
#[derive(Debug)]
pub struct Migrated;
#[derive(Debug)]
pub struct Done;

/// A completed pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ConfigCacheCleared,
    EnvironmentReloaded,
    DatabaseReset,
    Migrated,
    Multisite,
}

#[derive(Debug)]
pub struct Pipeline<S> {
    completed: Vec<Step>,
    _stage: PhantomData<S>,
}

impl<S> Pipeline<S> {
    fn advance<T>(mut self, step: Step) -> Pipeline<T> {
        self.completed.push(step);
        Pipeline { completed: self.completed, _stage: PhantomData }
    }

    /// Steps completed so far, in order.
    pub fn completed(&self) -> &[Step] {
        &self.completed
    }
}

impl Pipeline<Configured> {
    pub(crate) fn configured() -> Self {
        Pipeline { completed: Vec::new(), _stage: PhantomData }
    }

    /// Clear the framework's config cache and load the written env file into
    /// this process.
    pub fn reload_environment(
        self,
        ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    ) -> Result<Pipeline<EnvironmentReloaded>, AppError> {
        ctx.run(&ctx.commands().config_clear())?;
        let pipeline: Pipeline<Configured> = self.advance(Step::ConfigCacheCleared);

        ctx.environment().reload(&ctx.config().paths.env_target)?;
        Ok(pipeline.advance(Step::EnvironmentReloaded))
    }
}

impl Pipeline<EnvironmentReloaded> {
    /// Entry point when the operator declined project configuration; the
    /// environment is whatever the project already had.
    pub fn skip_configuration() -> Self {
        Pipeline { completed: Vec::new(), _stage: PhantomData }
    }

    /// Delete the local SQLite database so migrations start from scratch.
    pub fn reset_database(
        self,
        ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    ) -> Result<Pipeline<DatabaseReset>, AppError> {
        println!("🗄️ Setting up database...");
        let database = &ctx.config().paths.database;
        if ctx.files().exists(database) {
            ctx.files().remove(database)?;
            tracing::debug!(path = %database.display(), "removed database file");
        }
        Ok(self.advance(Step::DatabaseReset))
    }
}

impl Pipeline<DatabaseReset> {
    pub fn migrate(
        self,
        ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    ) -> Result<Pipeline<Migrated>, AppError> {
        ctx.run(&ctx.commands().migrate())?;
        Ok(self.advance(Step::Migrated))
    }
}

impl Pipeline<Migrated> {
    /// Offer the licensed multisite setup.
    pub fn multisite(
        self,
        ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    ) -> Result<Pipeline<Done>, AppError> {
        if !ctx.prompter().confirm(&MULTISITE_PROMPT)? {
            return Ok(Pipeline { completed: self.completed, _stage: PhantomData });
        }
        ctx.run(&ctx.commands().multisite())?;
        Ok(self.advance(Step::Multisite))
    }
}

impl Pipeline<Done> {
    pub fn into_steps(self) -> Vec<Step> {
        self.completed
    }
}
