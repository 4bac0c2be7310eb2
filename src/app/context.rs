use crate::domain::command::Commands;
use crate::domain::{AppError, CommandResult, CommandSpec, WizardConfig};
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

/// Application context holding dependencies for a wizard session.
pub struct AppContext<P: Prompter, R: CommandRunner, F: ProjectFiles, E: Environment> {
    prompter: P,
    runner: R,
    files: F,
    environment: E,
    config: WizardConfig,
}

impl<P: Prompter, R: CommandRunner, F: ProjectFiles, E: Environment> AppContext<P, R, F, E> {
    /// Create a new application context.
    pub fn new(prompter: P, runner: R, files: F, environment: E, config: WizardConfig) -> Self {
        Self { prompter, runner, files, environment, config }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Builders for the fixed command set, bound to the configured binaries.
    pub fn commands(&self) -> Commands<'_> {
        Commands::new(&self.config.binaries, self.config.command_timeout())
    }

    /// Run a command and turn an unsuccessful exit into `CommandFailed`.
    pub fn run(&self, spec: &CommandSpec) -> Result<CommandResult, AppError> {
        let result = self.runner.run(spec)?;
        if !result.succeeded() {
            return Err(AppError::CommandFailed {
                command: result.command.clone(),
                details: result.failure_details(),
            });
        }
        Ok(result)
    }
}
