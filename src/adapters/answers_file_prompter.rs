use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use toml::Value;

use crate::domain::AppError;
use crate::domain::prompt::{ConfirmPrompt, SearchPrompt, SelectPrompt, TextPrompt};
use crate::ports::Prompter;

/// Answers prompts from a TOML table keyed by prompt key.
///
/// Keys that are absent fall back to the prompt's default. Each answer is
/// echoed so the run log reads like an interactive session.
#[derive(Debug, Clone, Default)]
pub struct AnswersFilePrompter {
    answers: BTreeMap<String, Value>,
    asked: RefCell<BTreeSet<String>>,
}

impl AnswersFilePrompter {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => AppError::MissingFile(path.display().to_string()),
            _ => AppError::Io(err),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let answers: BTreeMap<String, Value> = toml::from_str(content)?;
        Ok(Self { answers, asked: RefCell::default() })
    }

    fn answer(&self, key: &str) -> Option<&Value> {
        self.asked.borrow_mut().insert(key.to_string());
        self.answers.get(key)
    }

    /// Keys in the file that no prompt has asked for so far.
    pub fn unused_keys(&self) -> Vec<&str> {
        let asked = self.asked.borrow();
        self.answers.keys().filter(|key| !asked.contains(*key)).map(String::as_str).collect()
    }

    /// Warn about answers the session never used, typically misspelled keys.
    pub fn warn_unused(&self) {
        let unused = self.unused_keys();
        if !unused.is_empty() {
            tracing::warn!(keys = %unused.join(", "), "answers file entries were not used");
        }
    }

    /// Strings are taken as-is; numbers are accepted so `db_password = 1234`
    /// does not need quoting.
    fn string_answer(&self, key: &str) -> Result<Option<String>, AppError> {
        match self.answer(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(Value::Integer(value)) => Ok(Some(value.to_string())),
            Some(Value::Float(value)) => Ok(Some(value.to_string())),
            Some(other) => Err(AppError::Validation(format!(
                "Answer for '{}' must be a string, got {}",
                key,
                other.type_str()
            ))),
        }
    }
}

fn echo(question: &str, answer: &str) {
    println!("? {} {}", question, answer);
}

impl Prompter for AnswersFilePrompter {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, AppError> {
        let answer = match self.answer(prompt.key) {
            None => prompt.default,
            Some(Value::Boolean(value)) => *value,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "Answer for '{}' must be true or false, got {}",
                    prompt.key,
                    other.type_str()
                )));
            }
        };
        echo(prompt.question, if answer { "yes" } else { "no" });
        Ok(answer)
    }

    fn select(&self, prompt: &SelectPrompt) -> Result<String, AppError> {
        let option = match self.string_answer(prompt.key)? {
            None => prompt.default_option(),
            Some(key) => Some(prompt.option(&key).ok_or_else(|| {
                let available: Vec<&str> =
                    prompt.options.iter().map(|option| option.key.as_str()).collect();
                AppError::Validation(format!(
                    "Invalid answer '{}' for '{}'. Available: {}",
                    key,
                    prompt.key,
                    available.join(", ")
                ))
            })?),
        };
        let option = option
            .ok_or_else(|| AppError::Validation(format!("No options for '{}'", prompt.key)))?;
        echo(prompt.question, &option.label);
        Ok(option.key.clone())
    }

    fn text(&self, prompt: &TextPrompt) -> Result<String, AppError> {
        let raw = self.string_answer(prompt.key)?.unwrap_or_default();
        let value = prompt.accept(&raw).map_err(|reason| {
            AppError::Validation(format!("{} (answer key '{}')", reason, prompt.key))
        })?;
        echo(prompt.question, &value);
        Ok(value)
    }

    fn search(&self, prompt: &SearchPrompt) -> Result<String, AppError> {
        let query = self.string_answer(prompt.key)?.ok_or_else(|| {
            AppError::Validation(format!(
                "No answer for '{}' (answer key '{}')",
                prompt.question, prompt.key
            ))
        })?;

        let chosen = if let Some(exact) = prompt.candidates.iter().find(|c| **c == query) {
            exact.clone()
        } else {
            match prompt.filter(&query).as_slice() {
                [single] => single.to_string(),
                [] => {
                    return Err(AppError::Validation(format!(
                        "No match for '{}' in '{}'",
                        query, prompt.key
                    )));
                }
                many => {
                    return Err(AppError::Validation(format!(
                        "Answer '{}' for '{}' is ambiguous ({} matches)",
                        query,
                        prompt.key,
                        many.len()
                    )));
                }
            }
        };
        echo(prompt.question, &chosen);
        Ok(chosen)
    }
}
