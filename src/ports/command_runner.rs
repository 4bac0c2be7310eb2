use crate::domain::AppError;
use crate::domain::command::{CommandResult, CommandSpec};

/// Port for running external commands.
pub trait CommandRunner {
    /// Run a command to completion or timeout.
    ///
    /// A command that starts but fails is `Ok` with a failed status; `Err` is
    /// reserved for commands that could not be started.
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, AppError>;
}
