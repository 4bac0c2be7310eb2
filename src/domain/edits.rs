//! Token edits applied to the configuration buffers.
//!
//! Each function takes the session by value and returns the edited session.
//! Search tokens match the values shipped in the starter kit's templates.

use super::{BufferId, ConfigBuffers};

pub const DEFAULT_APP_URL: &str = "http://localhost";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Strip characters that would break a quoted `.env` value.
pub fn sanitize_app_name(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '\'' | '"' | '#' | '|')).collect()
}

pub fn set_app_name(buffers: ConfigBuffers, name: &str) -> ConfigBuffers {
    let name = sanitize_app_name(name);
    buffers.replace(BufferId::Env, r#"APP_NAME="Statamic""#, &format!(r#"APP_NAME="{name}""#))
}

/// Blank keys leave the template untouched.
pub fn set_license_key(buffers: ConfigBuffers, key: &str) -> ConfigBuffers {
    let key = key.trim();
    if key.is_empty() {
        return buffers;
    }
    buffers.replace(
        BufferId::Env,
        "STATAMIC_LICENSE_KEY=",
        &format!(r#"STATAMIC_LICENSE_KEY="{key}""#),
    )
}

pub fn set_app_url(buffers: ConfigBuffers, url: &str) -> ConfigBuffers {
    buffers.replace(BufferId::Env, "APP_URL=", &format!(r#"APP_URL="{url}""#))
}

pub fn set_app_key(buffers: ConfigBuffers, key: Option<&str>) -> ConfigBuffers {
    match key.filter(|key| !key.is_empty()) {
        Some(key) => buffers.replace(BufferId::Env, "APP_KEY=", &format!(r#"APP_KEY="{key}""#)),
        None => buffers,
    }
}

/// Database connection settings collected from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub database: String,
    pub username: String,
    pub password: String,
}

pub fn set_database(buffers: ConfigBuffers, settings: &DatabaseSettings) -> ConfigBuffers {
    let database = format!("DB_DATABASE={}", settings.database);
    buffers
        .replace(BufferId::Env, "DB_DATABASE=laravel", &database)
        .replace(BufferId::Env, "DB_USERNAME=root", &format!("DB_USERNAME={}", settings.username))
        .replace(BufferId::Env, "DB_PASSWORD=", &format!("DB_PASSWORD={}", settings.password))
}

pub fn set_locale(buffers: ConfigBuffers, locale: &str) -> ConfigBuffers {
    buffers.replace(BufferId::Sites, "locale: en_US", &format!("locale: {locale}"))
}

/// Swap the configured timezone for `timezone`.
///
/// `current` is the timezone the application currently resolves to; the env
/// line and a literal `'timezone' => '...'` entry in the app config are both
/// keyed on it.
pub fn set_timezone(buffers: ConfigBuffers, current: &str, timezone: &str) -> ConfigBuffers {
    let buffers = buffers.replace(
        BufferId::Env,
        &format!(r#"APP_TIMEZONE="{current}""#),
        &format!(r#"APP_TIMEZONE="{timezone}""#),
    );
    // An `env('APP_TIMEZONE', ...)` entry follows the env file on its own.
    let literal = format!("'timezone' => '{current}'");
    if !buffers.get(BufferId::AppConfig).content().contains(&literal) {
        return buffers;
    }
    buffers.replace(BufferId::AppConfig, &literal, &format!("'timezone' => '{timezone}'"))
}

pub fn set_debugbar(buffers: ConfigBuffers, enabled: bool) -> ConfigBuffers {
    if enabled {
        return buffers;
    }
    buffers.replace(BufferId::Env, "DEBUGBAR_ENABLED=true", "DEBUGBAR_ENABLED=false")
}

pub fn set_imagick(buffers: ConfigBuffers, use_imagick: bool) -> ConfigBuffers {
    if !use_imagick {
        return buffers;
    }
    buffers.replace(
        BufferId::Env,
        "#IMAGE_MANIPULATION_DRIVER=imagick",
        "IMAGE_MANIPULATION_DRIVER=imagick",
    )
}

/// Resolve the timezone the application is currently configured with.
///
/// Mirrors the framework's lookup: the `APP_TIMEZONE` environment variable,
/// then the default in the app config's `'timezone' =>` entry, then UTC.
pub fn resolve_current_timezone(env_timezone: Option<&str>, app_config: &str) -> String {
    if let Some(tz) = env_timezone.map(str::trim).filter(|tz| !tz.is_empty()) {
        return tz.to_string();
    }
    configured_timezone_default(app_config).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
}

/// Extract the default from `'timezone' => env('APP_TIMEZONE', 'X')` or
/// `'timezone' => 'X'`.
fn configured_timezone_default(app_config: &str) -> Option<String> {
    let line = app_config.lines().find(|line| line.trim_start().starts_with("'timezone'"))?;
    let (_, value) = line.split_once("=>")?;
    // The last quoted literal on the line is the default in both forms.
    let quoted: Vec<&str> = value.split('\'').collect();
    if quoted.len() < 3 {
        return None;
    }
    let candidate = quoted[quoted.len() - 2].trim();
    (!candidate.is_empty() && candidate != "APP_TIMEZONE").then(|| candidate.to_string())
}
