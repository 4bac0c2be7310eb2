//! Project settings: prompts, token edits, and flushing the config files.

use std::path::PathBuf;

use url::Url;

use super::pipeline::{Configured, Pipeline};
use crate::app::AppContext;
use crate::domain::edits::{self, DEFAULT_APP_URL};
use crate::domain::mail::{self, MailPreset};
use crate::domain::prompt::{ConfirmPrompt, SearchPrompt, SelectOption, SelectPrompt, TextPrompt};
use crate::domain::timezone;
use crate::domain::{
    AppError, BufferId, ConfigBuffer, ConfigBuffers, DatabaseSettings, ProjectPaths, Substitution,
};
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

pub const CONFIGURE_PROMPT: ConfirmPrompt =
    ConfirmPrompt::new("configure", "Do you want to configure your project settings?", true);
pub const DEBUGBAR_PROMPT: ConfirmPrompt =
    ConfirmPrompt::new("debugbar", "Enable debugbar?", false);
pub const IMAGICK_PROMPT: ConfirmPrompt =
    ConfirmPrompt::new("imagick", "Use Imagick for image processing? (instead of GD)", true);

fn app_name_prompt() -> TextPrompt {
    TextPrompt::new("app_name", "What should be your app name?").placeholder("Statamic").required()
}

fn license_key_prompt() -> TextPrompt {
    TextPrompt::new("license_key", "Enter your Statamic License key").hint("Leave empty to skip")
}

fn database_prompts() -> [TextPrompt; 3] {
    [
        TextPrompt::new("db_database", "Database name?").required(),
        TextPrompt::new("db_username", "Database username?").default_value("root").required(),
        TextPrompt::new("db_password", "Database password?"),
    ]
}

fn locale_prompt() -> TextPrompt {
    TextPrompt::new("locale", "Default site locale?").default_value("nl_NL").required()
}

fn timezone_prompt() -> SearchPrompt {
    SearchPrompt::new("timezone", "App timezone?", timezone::timezone_identifiers())
        .placeholder("UTC")
}

fn mailer_prompt() -> SelectPrompt {
    let options = MailPreset::ALL
        .iter()
        .map(|preset| SelectOption::new(preset.key(), preset.label()))
        .collect();
    SelectPrompt::new("mailer", "Local mailer preference?", options)
        .with_default(MailPreset::DEFAULT.key())
}

/// Result of a configuration session.
#[derive(Debug)]
pub struct ConfigureOutcome {
    /// Every replacement attempted, in order.
    pub substitutions: Vec<Substitution>,
    /// Files written, relative to the project root.
    pub written: Vec<PathBuf>,
}

impl ConfigureOutcome {
    pub fn misses(&self) -> impl Iterator<Item = &Substitution> {
        self.substitutions.iter().filter(|sub| sub.is_miss())
    }
}

/// Ask for project settings and write them to the config files.
///
/// Returns `None` when the operator declines; nothing is read or written
/// then.
pub fn execute(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
) -> Result<Option<(ConfigureOutcome, Pipeline<Configured>)>, AppError> {
    if !ctx.prompter().confirm(&CONFIGURE_PROMPT)? {
        return Ok(None);
    }
    println!("⚙️ Configuring project settings...");

    let buffers = load_buffers(ctx.files(), &ctx.config().paths)?;
    let buffers = configure_buffers(ctx, buffers)?;

    if ctx.config().strict {
        if let Some(miss) = buffers.misses().next() {
            return Err(AppError::SubstitutionMissed {
                buffer: miss.buffer,
                search: miss.search.clone(),
            });
        }
    }

    let substitutions = buffers.log().to_vec();
    let written = flush(ctx.files(), buffers)?;
    println!("✅ Environment configuration updated");

    Ok(Some((ConfigureOutcome { substitutions, written }, Pipeline::configured())))
}

/// Read the three config files once. Missing sources are fatal.
pub fn load_buffers(
    files: &impl ProjectFiles,
    paths: &ProjectPaths,
) -> Result<ConfigBuffers, AppError> {
    Ok(ConfigBuffers::new(
        ConfigBuffer::new(BufferId::Env, &paths.env_target, files.read(&paths.env_source)?),
        ConfigBuffer::new(BufferId::AppConfig, &paths.app_config, files.read(&paths.app_config)?),
        ConfigBuffer::new(BufferId::Sites, &paths.sites, files.read(&paths.sites)?),
    ))
}

/// Run the settings prompts in order, applying each answer as it arrives.
pub fn configure_buffers(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    buffers: ConfigBuffers,
) -> Result<ConfigBuffers, AppError> {
    let prompter = ctx.prompter();
    let env = ctx.environment();

    let buffers = edits::set_app_name(buffers, &prompter.text(&app_name_prompt())?);
    let buffers = edits::set_license_key(buffers, &prompter.text(&license_key_prompt())?);
    let buffers = edits::set_app_url(buffers, &resolve_app_url(env.var("APP_URL")));
    let buffers = edits::set_app_key(buffers, env.var("APP_KEY").as_deref());

    let [database, username, password] = database_prompts();
    let database = DatabaseSettings {
        database: prompter.text(&database)?,
        username: prompter.text(&username)?,
        password: prompter.text(&password)?,
    };
    let buffers = edits::set_database(buffers, &database);

    let buffers = edits::set_locale(buffers, &prompter.text(&locale_prompt())?);

    let timezone = prompter.search(&timezone_prompt())?;
    let current = edits::resolve_current_timezone(
        env.var("APP_TIMEZONE").as_deref(),
        buffers.get(BufferId::AppConfig).content(),
    );
    if let Some(offset) = timezone::utc_offset(&timezone) {
        println!("🕐 {} (UTC{})", timezone, offset);
    }
    tracing::debug!(previous = %current, timezone = %timezone, "replacing timezone");
    let buffers = edits::set_timezone(buffers, &current, &timezone);

    let buffers = edits::set_debugbar(buffers, prompter.confirm(&DEBUGBAR_PROMPT)?);
    let buffers = edits::set_imagick(buffers, prompter.confirm(&IMAGICK_PROMPT)?);

    let mailer = prompter.select(&mailer_prompt())?;
    let preset = MailPreset::from_key(&mailer)
        .ok_or_else(|| AppError::Validation(format!("Unknown mailer '{}'", mailer)))?;
    Ok(mail::set_mailer(buffers, preset))
}

/// `APP_URL` from the environment when it parses as a URL, else the local
/// default.
pub fn resolve_app_url(value: Option<String>) -> String {
    match value.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) if Url::parse(url).is_ok() => url.to_string(),
        Some(url) => {
            tracing::warn!(url = %url, "APP_URL is not a valid URL, using {}", DEFAULT_APP_URL);
            DEFAULT_APP_URL.to_string()
        }
        None => DEFAULT_APP_URL.to_string(),
    }
}

/// Write each buffer to its target, in flush order.
pub fn flush(files: &impl ProjectFiles, buffers: ConfigBuffers) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::new();
    for buffer in buffers.into_buffers() {
        files.write(buffer.target(), buffer.content())?;
        written.push(buffer.target().to_path_buf());
    }
    Ok(written)
}
