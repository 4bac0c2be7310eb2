//! API facade: builds the production context and runs the wizard.

use std::path::{Path, PathBuf};

use crate::adapters::{
    AnswersFilePrompter, DialoguerPrompter, FilesystemProject, ProcessCommandRunner,
    ProcessEnvironment,
};
use crate::app::{AppContext, commands::install};
use crate::domain::config::CONFIG_FILE;
use crate::domain::{AppError, WizardConfig};
use crate::ports::{ProjectFiles, Prompter};

pub use crate::app::commands::install::InstallOutcome;

/// How to run a session.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Project root; the current directory when unset.
    pub root: Option<PathBuf>,
    /// Answers file for unattended runs; prompts interactively when unset.
    pub answers: Option<PathBuf>,
    /// Explicit config file; `kitsetup.toml` in the root is used when present.
    pub config: Option<PathBuf>,
    /// Fail on tokens that are not found, regardless of config.
    pub strict: bool,
}

/// Run the post-install wizard.
pub fn install(options: InstallOptions) -> Result<InstallOutcome, AppError> {
    let root = match options.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(AppError::config_error(format!(
            "Project directory not found: {}",
            root.display()
        )));
    }

    let mut config = load_config(&root, options.config.as_deref())?;
    config.strict |= options.strict;

    let environment = ProcessEnvironment::new(root.clone());
    environment.load_existing(&config.paths.env_target)?;

    tracing::debug!(root = %root.display(), strict = config.strict, "starting session");
    match options.answers {
        Some(path) => {
            let prompter = AnswersFilePrompter::from_path(&path)?;
            let ctx = context(prompter, root, environment, config);
            let outcome = install::execute(&ctx)?;
            ctx.prompter().warn_unused();
            Ok(outcome)
        }
        None => install::execute(&context(DialoguerPrompter::new(), root, environment, config)),
    }
}

fn context<P: Prompter>(
    prompter: P,
    root: PathBuf,
    environment: ProcessEnvironment,
    config: WizardConfig,
) -> AppContext<P, ProcessCommandRunner, FilesystemProject, ProcessEnvironment> {
    AppContext::new(
        prompter,
        ProcessCommandRunner::new(root.clone()),
        FilesystemProject::new(root),
        environment,
        config,
    )
}

/// Load wizard settings. An explicit path must exist; the default file is
/// optional.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<WizardConfig, AppError> {
    let files = FilesystemProject::new(root.to_path_buf());
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None if files.exists(Path::new(CONFIG_FILE)) => PathBuf::from(CONFIG_FILE),
        None => return Ok(WizardConfig::default()),
    };
    let content = files.read(&path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    WizardConfig::parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_default_config_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_config(dir.path(), None).unwrap(), WizardConfig::default());
    }

    #[test]
    fn default_config_file_is_picked_up() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "strict = true\n").unwrap();
        assert!(load_config(dir.path(), None).unwrap().strict);
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        let err = load_config(dir.path(), Some(Path::new("custom.toml"))).unwrap_err();
        assert!(matches!(err, AppError::MissingFile(_)));
    }

    #[test]
    fn missing_project_root_is_rejected() {
        let dir = tempdir().unwrap();
        let options =
            InstallOptions { root: Some(dir.path().join("nope")), ..InstallOptions::default() };
        assert!(matches!(install(options), Err(AppError::Configuration(_))));
    }
}
