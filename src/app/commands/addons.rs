//! Optional addon selection and installation.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::addons::{
    AARDVARK_SEO, AARDVARK_TEMPLATES_SOURCE, AARDVARK_TEMPLATES_TARGET, ADDON_SLOTS,
};
use crate::domain::{AddonSelection, AppError};
use crate::ports::{CommandRunner, Environment, ProjectFiles, Prompter};

/// Ask for one package per addon slot.
///
/// Choosing the Aardvark SEO addon also copies its layout partials into the
/// project.
pub fn select(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
) -> Result<AddonSelection, AppError> {
    let mut selection = AddonSelection::default();
    for slot in ADDON_SLOTS {
        let package = ctx.prompter().select(&slot.prompt())?;
        if package == AARDVARK_SEO {
            copy_aardvark_templates(ctx.files())?;
        }
        selection.push(&package);
    }
    Ok(selection)
}

/// Returns whether templates were copied; a missing source is skipped.
pub fn copy_aardvark_templates(files: &impl ProjectFiles) -> Result<bool, AppError> {
    let source = Path::new(AARDVARK_TEMPLATES_SOURCE);
    if !files.exists(source) {
        tracing::debug!(source = AARDVARK_TEMPLATES_SOURCE, "no Aardvark SEO templates to copy");
        return Ok(false);
    }
    let copied = files.copy_dir(source, Path::new(AARDVARK_TEMPLATES_TARGET))?;
    println!("📁 Copied Aardvark SEO templates ({} file(s))", copied);
    Ok(true)
}

/// `composer require` the selected packages; nothing runs for an empty
/// selection.
pub fn install(
    ctx: &AppContext<impl Prompter, impl CommandRunner, impl ProjectFiles, impl Environment>,
    selection: &AddonSelection,
) -> Result<(), AppError> {
    if selection.is_empty() {
        return Ok(());
    }
    ctx.run(&ctx.commands().composer_require(selection.packages()))?;
    Ok(())
}
