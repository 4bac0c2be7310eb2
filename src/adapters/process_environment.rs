use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Environment;

/// The real process environment, with `.env` loading through `dotenvy`.
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    root: PathBuf,
}

impl ProcessEnvironment {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Load an existing env file without overriding variables already set,
    /// the way the framework boots. A missing file is ignored.
    pub fn load_existing(&self, env_file: &Path) -> Result<bool, AppError> {
        let path = self.root.join(env_file);
        if !path.exists() {
            return Ok(false);
        }
        dotenvy::from_path(&path).map_err(|err| env_file_error(&path, err))?;
        tracing::debug!(path = %path.display(), "loaded existing env file");
        Ok(true)
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn reload(&self, env_file: &Path) -> Result<(), AppError> {
        let path = self.root.join(env_file);
        dotenvy::from_path_override(&path).map_err(|err| env_file_error(&path, err))?;
        tracing::debug!(path = %path.display(), "reloaded environment");
        Ok(())
    }
}

fn env_file_error(path: &Path, err: dotenvy::Error) -> AppError {
    AppError::config_error(format!("Failed to load {}: {}", path.display(), err))
}
