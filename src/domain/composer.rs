use serde::Serialize;
use serde_json::{Map, Value};

use super::AppError;

pub const POST_AUTOLOAD_DUMP: &str = "post-autoload-dump";
pub const STATAMIC_INSTALL_SCRIPT: &str = "@php artisan statamic:install --ansi";

/// Ensure `scripts.post-autoload-dump` in a composer manifest runs `script`.
///
/// Returns the rewritten manifest, or `None` when the script is already
/// registered. Composer accepts the hook as a single string or an array; a
/// string hook is promoted to an array when the script is appended.
pub fn ensure_post_autoload_dump_script(
    manifest: &str,
    script: &str,
) -> Result<Option<String>, AppError> {
    let mut root: Value = serde_json::from_str(manifest)?;
    let root_map = root
        .as_object_mut()
        .ok_or_else(|| AppError::Validation("composer.json must contain a JSON object".into()))?;

    let scripts = root_map.entry("scripts").or_insert_with(|| Value::Object(Map::new()));
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| AppError::Validation("composer.json 'scripts' must be an object".into()))?;

    let hook = scripts.entry(POST_AUTOLOAD_DUMP).or_insert_with(|| Value::Array(Vec::new()));
    match hook {
        Value::String(existing) if existing.as_str() == script => return Ok(None),
        Value::String(existing) => {
            let existing = std::mem::take(existing);
            *hook = Value::Array(vec![Value::String(existing), Value::String(script.into())]);
        }
        Value::Array(entries) => {
            if entries.iter().any(|entry| entry.as_str() == Some(script)) {
                return Ok(None);
            }
            entries.push(Value::String(script.into()));
        }
        _ => {
            return Err(AppError::Validation(format!(
                "composer.json 'scripts.{POST_AUTOLOAD_DUMP}' must be a string or an array"
            )));
        }
    }

    Ok(Some(to_composer_json(&root)?))
}

/// Four-space indentation with a trailing newline, as composer writes it.
fn to_composer_json(value: &Value) -> Result<String, AppError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    out.push(b'\n');
    String::from_utf8(out).map_err(|err| AppError::Validation(err.to_string()))
}
