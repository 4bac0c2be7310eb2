use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::AppError;

/// Project-level config file looked up in the project root.
pub const CONFIG_FILE: &str = "kitsetup.toml";

pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// Wizard settings loaded from `kitsetup.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    /// Treat a token that is not found as a fatal error.
    pub strict: bool,
    /// Timeout for non-interactive commands.
    pub command_timeout_secs: u64,
    pub binaries: Binaries,
    pub paths: ProjectPaths,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            strict: false,
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            binaries: Binaries::default(),
            paths: ProjectPaths::default(),
        }
    }
}

impl WizardConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: WizardConfig = toml::from_str(content)?;
        if config.command_timeout_secs == 0 {
            return Err(AppError::config_error("command_timeout_secs must be greater than zero"));
        }
        Ok(config)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

/// External programs the wizard invokes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Binaries {
    pub php: String,
    pub composer: String,
}

impl Default for Binaries {
    fn default() -> Self {
        Self { php: "php".to_string(), composer: "composer".to_string() }
    }
}

/// File locations relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectPaths {
    pub env_source: PathBuf,
    pub env_target: PathBuf,
    pub app_config: PathBuf,
    pub sites: PathBuf,
    pub database: PathBuf,
    pub composer_manifest: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            env_source: PathBuf::from(".env.example"),
            env_target: PathBuf::from(".env"),
            app_config: PathBuf::from("config/app.php"),
            sites: PathBuf::from("resources/sites.yaml"),
            database: PathBuf::from("database/database.sqlite"),
            composer_manifest: PathBuf::from("composer.json"),
        }
    }
}
