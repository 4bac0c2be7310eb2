use std::path::Path;

use crate::domain::AppError;

/// Port for the process environment the framework reads at boot.
pub trait Environment {
    /// Current value of a variable, if set and valid Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Load `env_file` (relative to the project root) over the current
    /// environment, overriding variables already set.
    fn reload(&self, env_file: &Path) -> Result<(), AppError>;
}
