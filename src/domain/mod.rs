pub mod addons;
pub mod buffer;
pub mod command;
pub mod composer;
pub mod config;
pub mod edits;
pub mod error;
pub mod mail;
pub mod prompt;
pub mod timezone;

pub use addons::AddonSelection;
pub use buffer::{BufferId, ConfigBuffer, ConfigBuffers, Substitution};
pub use command::{CommandResult, CommandSpec, CommandStatus, RunOptions};
pub use config::{Binaries, ProjectPaths, WizardConfig};
pub use edits::DatabaseSettings;
pub use error::AppError;
pub use mail::MailPreset;
