//! kitsetup: post-install setup wizard for the JustBetter Statamic starter kit.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InstallOptions, InstallOutcome, install, load_config};
pub use domain::{AppError, WizardConfig};
