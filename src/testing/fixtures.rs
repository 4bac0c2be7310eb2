use super::{Answer, FakeEnvironment, Journal, MemoryProject, RecordingRunner, ScriptedPrompter};
use crate::app::AppContext;
use crate::domain::WizardConfig;

pub const ENV_EXAMPLE: &str = r#"APP_NAME="Statamic"
APP_ENV=local
APP_KEY=
APP_DEBUG=true
APP_TIMEZONE="UTC"
APP_URL=

DB_CONNECTION=sqlite
DB_DATABASE=laravel
DB_USERNAME=root
DB_PASSWORD=

MAIL_MAILER=smtp
MAIL_HOST=localhost
MAIL_PORT=1025
MAIL_USERNAME=null
MAIL_PASSWORD=null

STATAMIC_LICENSE_KEY=
DEBUGBAR_ENABLED=true
#IMAGE_MANIPULATION_DRIVER=imagick
"#;

pub const APP_CONFIG: &str = r#"<?php

return [
    'name' => env('APP_NAME', 'Laravel'),
    'timezone' => env('APP_TIMEZONE', 'UTC'),
    'locale' => env('APP_LOCALE', 'en'),
];
"#;

pub const SITES: &str = "default:\n  name: '{{ config:app:name }}'\n  url: /\n  locale: en_US\n";

/// Project tree containing the three starter-kit config templates.
pub fn seeded_project(journal: Journal) -> MemoryProject {
    MemoryProject::new(journal)
        .with_file(".env.example", ENV_EXAMPLE)
        .with_file("config/app.php", APP_CONFIG)
        .with_file("resources/sites.yaml", SITES)
        .with_file("database/database.sqlite", "stale")
}

pub type TestApp = AppContext<ScriptedPrompter, RecordingRunner, MemoryProject, FakeEnvironment>;

/// A wizard wired to in-memory fakes that share one journal.
pub struct TestContext {
    pub journal: Journal,
    pub app: TestApp,
}

impl TestContext {
    pub fn new(prompter: ScriptedPrompter) -> Self {
        Self::build(prompter, |runner| runner, |project| project, WizardConfig::default())
    }

    pub fn build(
        prompter: ScriptedPrompter,
        runner: impl FnOnce(RecordingRunner) -> RecordingRunner,
        project: impl FnOnce(MemoryProject) -> MemoryProject,
        config: WizardConfig,
    ) -> Self {
        let journal = Journal::new();
        let app = AppContext::new(
            prompter,
            runner(RecordingRunner::new(journal.clone())),
            project(seeded_project(journal.clone())),
            FakeEnvironment::new(journal.clone()).with_var("APP_URL", "https://acme.test"),
            config,
        );
        Self { journal, app }
    }

    /// Answers for every required prompt, defaults elsewhere.
    pub fn required_answers() -> ScriptedPrompter {
        ScriptedPrompter::new()
            .text("app_name", "Acme")
            .text("db_database", "acme_db")
            .text("timezone", "Europe/Amsterdam")
            .answer("configure", Answer::Yes)
    }

    pub fn file(&self, path: &str) -> String {
        self.app.files().content(path).unwrap_or_default()
    }

    pub fn commands(&self) -> Vec<String> {
        self.app.runner().command_lines()
    }
}
