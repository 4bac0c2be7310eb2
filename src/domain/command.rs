use std::fmt;
use std::time::Duration;

use super::Binaries;

/// How a command is presented and bounded while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Shown before the command starts.
    pub processing_label: String,
    /// Shown after the command succeeds.
    pub success_label: Option<String>,
    /// Attach the operator's terminal instead of capturing output.
    pub interactive: bool,
    /// Show a spinner while a captured command runs.
    pub spinner: bool,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
}

/// An external command with its arguments. Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub options: RunOptions,
}

impl CommandSpec {
    /// Non-interactive command with a spinner and the given timeout.
    pub fn captured(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        processing_label: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            options: RunOptions {
                processing_label: processing_label.into(),
                success_label: None,
                interactive: false,
                spinner: true,
                timeout: Some(timeout),
            },
        }
    }

    /// Command attached to the operator's terminal, without timeout.
    pub fn interactive(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        processing_label: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            options: RunOptions {
                processing_label: processing_label.into(),
                success_label: None,
                interactive: true,
                spinner: false,
                timeout: None,
            },
        }
    }

    pub fn with_success_label(mut self, label: impl Into<String>) -> Self {
        self.options.success_label = Some(label.into());
        self
    }

    /// Command line for display and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// Outcome of one external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: String,
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    /// Exit code, if the process exited normally.
    Failed(Option<i32>),
    TimedOut,
}

impl CommandResult {
    pub fn succeeded(&self) -> bool {
        self.status == CommandStatus::Succeeded
    }

    /// Operator-facing explanation of a failure: captured stderr, falling back
    /// to stdout or the exit status.
    pub fn failure_details(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.status {
            CommandStatus::Succeeded => String::new(),
            CommandStatus::Failed(Some(code)) => format!("exited with status {code}"),
            CommandStatus::Failed(None) => "terminated by signal".to_string(),
            CommandStatus::TimedOut => "timed out".to_string(),
        }
    }
}

pub const RAPIDEZ_PROVIDER: &str = r"Rapidez\Statamic\RapidezStatamicServiceProvider";
pub const RAPIDEZ_PUBLISH_TAGS: [(&str, &str); 3] = [
    ("rapidez-user-model", "Publishing user model..."),
    ("rapidez-statamic-content", "Publishing Rapidez content..."),
    ("views", "Publishing views..."),
];

/// The fixed set of commands the wizard may run.
pub struct Commands<'a> {
    binaries: &'a Binaries,
    timeout: Duration,
}

impl<'a> Commands<'a> {
    pub fn new(binaries: &'a Binaries, timeout: Duration) -> Self {
        Self { binaries, timeout }
    }

    fn artisan<'b>(&self, args: impl IntoIterator<Item = &'b str>) -> Vec<String> {
        std::iter::once("artisan").chain(args).map(String::from).collect()
    }

    pub fn composer_require(&self, packages: &[String]) -> CommandSpec {
        let args = std::iter::once("require".to_string()).chain(packages.iter().cloned());
        CommandSpec::interactive(&self.binaries.composer, args, "Installing selected addons...")
            .with_success_label("Addons installed")
    }

    pub fn statamic_install(&self) -> CommandSpec {
        CommandSpec::interactive(
            &self.binaries.php,
            self.artisan(["statamic:install"]),
            "Installing Statamic...",
        )
    }

    pub fn rapidez_publish(&self, tag: &str, label: &str) -> CommandSpec {
        let provider = format!("--provider={RAPIDEZ_PROVIDER}");
        let tag = format!("--tag={tag}");
        CommandSpec::captured(
            &self.binaries.php,
            self.artisan(["vendor:publish", provider.as_str(), tag.as_str()]),
            label,
            self.timeout,
        )
    }

    pub fn config_clear(&self) -> CommandSpec {
        CommandSpec::captured(
            &self.binaries.php,
            self.artisan(["config:clear"]),
            "Clearing config cache...",
            self.timeout,
        )
    }

    pub fn migrate(&self) -> CommandSpec {
        CommandSpec::interactive(
            &self.binaries.php,
            self.artisan(["migrate"]),
            "Running migrations...",
        )
        .with_success_label("Database migrated")
    }

    pub fn multisite(&self) -> CommandSpec {
        CommandSpec::interactive(
            &self.binaries.php,
            self.artisan(["statamic:multisite"]),
            "Setting up multisite...",
        )
    }
}
