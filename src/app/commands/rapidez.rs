//! Rapidez Statamic project setup.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::command::RAPIDEZ_PUBLISH_TAGS;
use crate::domain::composer::{STATAMIC_INSTALL_SCRIPT, ensure_post_autoload_dump_script};
use crate::domain::prompt::ConfirmPrompt;
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

pub const RAPIDEZ_PROMPT: ConfirmPrompt =
    ConfirmPrompt::new("rapidez", "Do you want to setup for a Rapidez Statamic project?", false);

/// Install Statamic, register its install hook, and publish the Rapidez assets.
pub fn execute(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
) -> Result<(), AppError> {
    println!("⚡ Setting up Rapidez Statamic...");

    let commands = ctx.commands();
    ctx.run(&commands.statamic_install())?;
    update_composer_scripts(ctx.files(), ctx.config().paths.composer_manifest.as_path())?;
    for (tag, label) in RAPIDEZ_PUBLISH_TAGS {
        ctx.run(&commands.rapidez_publish(tag, label))?;
    }
    Ok(())
}

/// Returns whether the manifest was rewritten. A project without a composer
/// manifest is left alone.
pub fn update_composer_scripts(
    files: &impl ProjectFiles,
    manifest: &std::path::Path,
) -> Result<bool, AppError> {
    if !files.exists(manifest) {
        return Ok(false);
    }
    let content = files.read(manifest)?;
    match ensure_post_autoload_dump_script(&content, STATAMIC_INSTALL_SCRIPT)? {
        Some(updated) => {
            files.write(manifest, &updated)?;
            println!("📝 Updated composer.json with Statamic install script");
            Ok(true)
        }
        None => Ok(false),
    }
}
