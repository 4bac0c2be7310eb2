use std::io;

use thiserror::Error;

use super::BufferId;

/// Library-wide error type for kitsetup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Operator input was rejected.
    #[error("{0}")]
    Validation(String),

    /// Interactive prompt failed (terminal closed, not a TTY, ...).
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A source file the wizard depends on does not exist.
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// A token replacement found nothing to replace while running in strict mode.
    #[error("Token '{search}' not found in {buffer}")]
    SubstitutionMissed { buffer: BufferId, search: String },

    /// External command exited unsuccessfully or timed out.
    #[error("Failed to run: {command}\nError: {details}")]
    CommandFailed { command: String, details: String },

    /// External command could not be started at all.
    #[error("Failed to start '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// Answers or config file is not valid TOML.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// composer.json could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Validation(_)
            | AppError::SubstitutionMissed { .. }
            | AppError::TomlParse(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::MissingFile(_) => io::ErrorKind::NotFound,
            AppError::Prompt(_)
            | AppError::CommandFailed { .. }
            | AppError::CommandSpawn { .. } => io::ErrorKind::Other,
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
                AppError::Prompt("interrupted by operator".to_string())
            }
            other => AppError::Prompt(other.to_string()),
        }
    }
}
