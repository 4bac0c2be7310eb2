//! Shared testing utilities for kitsetup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ENV_EXAMPLE: &str = r#"APP_NAME="Statamic"
APP_ENV=local
APP_KEY=
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

STATAMIC_LICENSE_KEY=
DEBUGBAR_ENABLED=true
#IMAGE_MANIPULATION_DRIVER=imagick
"#;

pub const APP_CONFIG: &str =
    "<?php\n\nreturn [\n    'timezone' => env('APP_TIMEZONE', 'UTC'),\n];\n";

pub const SITES: &str = "default:\n  name: Site\n  url: /\n  locale: en_US\n";

/// Answers for every required prompt; everything else takes its default.
pub const BASE_ANSWERS: &str = r#"configure = true
app_name = "Acme"
db_database = "acme_db"
timezone = "Europe/Amsterdam"
"#;

/// Testing harness providing an isolated starter-kit project with fake `php`
/// and `composer` executables that log their arguments.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project: PathBuf,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a seeded project.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project = root.path().join("project");
        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).expect("Failed to create fake bin directory");

        let ctx = Self { root, project, bin };
        ctx.write(".env.example", ENV_EXAMPLE);
        ctx.write("config/app.php", APP_CONFIG);
        ctx.write("resources/sites.yaml", SITES);
        ctx.write("database/database.sqlite", "stale");
        ctx.install_fake_binaries();
        ctx
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project.join(relative))
            .unwrap_or_else(|_| panic!("{relative} should exist"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project.join(relative).exists()
    }

    /// Write the answers file and return its path.
    pub fn answers(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("answers.toml");
        fs::write(&path, content).expect("Failed to write answers file");
        path
    }

    /// Command lines the fake binaries were invoked with, in order.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn log_path(&self) -> PathBuf {
        self.root.path().join("invocations.log")
    }

    /// Build a command for the compiled binary, pointed at the project.
    ///
    /// Any command line containing `KITSETUP_FAIL` (when set) exits with 1.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kitsetup").expect("Failed to locate kitsetup binary");
        cmd.current_dir(&self.project)
            .env("APP_URL", "https://acme.test")
            .env_remove("APP_KEY")
            .env_remove("APP_TIMEZONE")
            .env_remove("KITSETUP_FAIL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`cli`](Self::cli), with the answers file passed in.
    pub fn cli_with_answers(&self, answers: &str) -> Command {
        let path = self.answers(answers);
        let mut cmd = self.cli();
        cmd.arg("--answers").arg(path);
        cmd
    }

    fn install_fake_binaries(&self) {
        let php = self.fake_binary("php");
        let composer = self.fake_binary("composer");
        self.write(
            "kitsetup.toml",
            &format!(
                "[binaries]\nphp = \"{}\"\ncomposer = \"{}\"\n",
                php.display(),
                composer.display()
            ),
        );
    }

    fn fake_binary(&self, name: &str) -> PathBuf {
        let path = self.bin.join(name);
        let script = format!(
            r#"#!/bin/sh
printf '%s\n' "{name} $*" >> "{log}"
if [ -n "$KITSETUP_FAIL" ]; then
  case "{name} $*" in
    *"$KITSETUP_FAIL"*) echo "simulated failure" >&2; exit 1 ;;
  esac
fi
exit 0
"#,
            log = self.log_path().display()
        );
        fs::write(&path, script).expect("Failed to write fake binary");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake binary executable");
        }
        path
    }
}
