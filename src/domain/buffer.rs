use std::fmt;
use std::path::{Path, PathBuf};

/// The three configuration files the wizard edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferId {
    /// Environment variables (`.env.example` → `.env`).
    Env,
    /// PHP array config (`config/app.php`).
    AppConfig,
    /// Site definitions (`resources/sites.yaml`).
    Sites,
}

impl BufferId {
    /// All buffers in flush order.
    pub const ALL: [BufferId; 3] = [BufferId::Env, BufferId::AppConfig, BufferId::Sites];

    /// Human-readable name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            BufferId::Env => "env file",
            BufferId::AppConfig => "app config",
            BufferId::Sites => "sites config",
        }
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of one literal token replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub buffer: BufferId,
    pub search: String,
    pub replacement: String,
    /// Number of occurrences replaced. Zero means the token was not found.
    pub occurrences: usize,
}

impl Substitution {
    pub fn is_miss(&self) -> bool {
        self.occurrences == 0
    }
}

/// In-memory copy of one configuration file.
///
/// The content is captured once from disk, transformed through
/// [`ConfigBuffer::replace`], and written verbatim to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuffer {
    id: BufferId,
    target: PathBuf,
    content: String,
}

impl ConfigBuffer {
    pub fn new(id: BufferId, target: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { id, target: target.into(), content: content.into() }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Path the buffer is flushed to, relative to the project root.
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace every literal occurrence of `search` with `replacement`.
    ///
    /// An absent (or empty) search token leaves the content untouched and is
    /// reported as a miss.
    #[must_use]
    pub fn replace(self, search: &str, replacement: &str) -> (Self, Substitution) {
        let occurrences = if search.is_empty() { 0 } else { self.content.matches(search).count() };
        let content =
            if occurrences == 0 { self.content } else { self.content.replace(search, replacement) };

        let substitution = Substitution {
            buffer: self.id,
            search: search.to_string(),
            replacement: replacement.to_string(),
            occurrences,
        };
        (Self { content, ..self }, substitution)
    }
}

/// The three buffers of a configuration session plus the log of every
/// replacement applied to them.
#[derive(Debug, Clone)]
pub struct ConfigBuffers {
    env: ConfigBuffer,
    app_config: ConfigBuffer,
    sites: ConfigBuffer,
    log: Vec<Substitution>,
}

impl ConfigBuffers {
    pub fn new(env: ConfigBuffer, app_config: ConfigBuffer, sites: ConfigBuffer) -> Self {
        Self { env, app_config, sites, log: Vec::new() }
    }

    pub fn get(&self, id: BufferId) -> &ConfigBuffer {
        match id {
            BufferId::Env => &self.env,
            BufferId::AppConfig => &self.app_config,
            BufferId::Sites => &self.sites,
        }
    }

    /// Apply a literal replacement to the named buffer and record the outcome.
    #[must_use]
    pub fn replace(self, id: BufferId, search: &str, replacement: &str) -> Self {
        let Self { mut env, mut app_config, mut sites, mut log } = self;

        let substitution = match id {
            BufferId::Env => {
                let (next, sub) = env.replace(search, replacement);
                env = next;
                sub
            }
            BufferId::AppConfig => {
                let (next, sub) = app_config.replace(search, replacement);
                app_config = next;
                sub
            }
            BufferId::Sites => {
                let (next, sub) = sites.replace(search, replacement);
                sites = next;
                sub
            }
        };

        if substitution.is_miss() {
            tracing::warn!(
                buffer = %id,
                search = %substitution.search,
                "token not found, left unchanged"
            );
        } else {
            tracing::debug!(
                buffer = %id,
                search = %substitution.search,
                occurrences = substitution.occurrences,
                "token replaced"
            );
        }
        log.push(substitution);

        Self { env, app_config, sites, log }
    }

    /// Every replacement applied so far, in order.
    pub fn log(&self) -> &[Substitution] {
        &self.log
    }

    /// Replacements whose token was not found.
    pub fn misses(&self) -> impl Iterator<Item = &Substitution> {
        self.log.iter().filter(|sub| sub.is_miss())
    }

    /// Consume the session, yielding buffers in flush order.
    pub fn into_buffers(self) -> [ConfigBuffer; 3] {
        [self.env, self.app_config, self.sites]
    }
}
