use std::cell::RefCell;

use super::Journal;
use crate::domain::AppError;
use crate::domain::command::{CommandResult, CommandSpec, CommandStatus};
use crate::ports::CommandRunner;

/// Records every command and succeeds unless told to fail.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    specs: RefCell<Vec<CommandSpec>>,
    fail_on: Option<String>,
    journal: Journal,
}

impl RecordingRunner {
    pub fn new(journal: Journal) -> Self {
        Self { specs: RefCell::default(), fail_on: None, journal }
    }

    /// Fail any command whose command line contains `fragment`.
    pub fn failing_on(mut self, fragment: &str) -> Self {
        self.fail_on = Some(fragment.to_string());
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.specs.borrow().iter().map(CommandSpec::command_line).collect()
    }

    pub fn specs(&self) -> Vec<CommandSpec> {
        self.specs.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, AppError> {
        let command = spec.command_line();
        self.journal.record(format!("run {}", command));
        self.specs.borrow_mut().push(spec.clone());

        let failed = self.fail_on.as_deref().is_some_and(|fragment| command.contains(fragment));
        Ok(CommandResult {
            command,
            status: if failed { CommandStatus::Failed(Some(1)) } else { CommandStatus::Succeeded },
            stdout: String::new(),
            stderr: if failed { "simulated failure".to_string() } else { String::new() },
        })
    }
}
