//! The full post-install session.

use super::configure::{self, ConfigureOutcome};
use super::pipeline::{Pipeline, Step};
use super::{addons, rapidez};
use crate::app::AppContext;
use crate::domain::{AddonSelection, AppError, Substitution};
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

/// What a completed session did.
#[derive(Debug)]
pub struct InstallOutcome {
    pub addons: AddonSelection,
    pub rapidez: bool,
    /// `None` when the operator skipped project configuration.
    pub configuration: Option<ConfigureOutcome>,
    pub steps: Vec<Step>,
}

impl InstallOutcome {
    /// Replacements that found nothing to replace.
    pub fn misses(&self) -> Vec<&Substitution> {
        self.configuration.iter().flat_map(|outcome| outcome.misses()).collect()
    }
}

/// Run every step in order. The first failure aborts the session.
pub fn execute(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
) -> Result<InstallOutcome, AppError> {
    println!("🚀 Setting up your JustBetter Statamic starter kit...");

    let selection = addons::select(ctx)?;
    addons::install(ctx, &selection)?;

    let rapidez = ctx.prompter().confirm(&rapidez::RAPIDEZ_PROMPT)?;
    if rapidez {
        rapidez::execute(ctx)?;
    }

    let (configuration, pipeline) = match configure::execute(ctx)? {
        Some((outcome, pipeline)) => (Some(outcome), pipeline.reload_environment(ctx)?),
        None => (None, Pipeline::skip_configuration()),
    };

    let steps = pipeline.reset_database(ctx)?.migrate(ctx)?.multisite(ctx)?.into_steps();

    println!("✅ Starter kit installation completed!");
    Ok(InstallOutcome { addons: selection, rapidez, configuration, steps })
}
