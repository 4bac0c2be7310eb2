use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::domain::prompt::{ConfirmPrompt, SearchPrompt, SelectPrompt, TextPrompt};
use crate::ports::Prompter;

/// Number of search matches shown at once.
const SEARCH_PAGE_SIZE: usize = 15;

/// Interactive terminal prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Question text with placeholder and hint folded in, since dialoguer has no
/// separate slot for either.
fn question_text(question: &str, placeholder: Option<&str>, hint: Option<&str>) -> String {
    let mut text = question.to_string();
    if let Some(placeholder) = placeholder {
        text.push_str(&format!(" (e.g. {placeholder})"));
    }
    if let Some(hint) = hint {
        text.push_str(&format!(" [{hint}]"));
    }
    text
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, AppError> {
        Ok(Confirm::new().with_prompt(prompt.question).default(prompt.default).interact()?)
    }

    fn select(&self, prompt: &SelectPrompt) -> Result<String, AppError> {
        if prompt.options.is_empty() {
            return Err(AppError::Validation(format!("No options for '{}'", prompt.question)));
        }
        let labels: Vec<&str> = prompt.options.iter().map(|option| option.label.as_str()).collect();
        let index = Select::new()
            .with_prompt(prompt.question)
            .items(&labels)
            .default(prompt.default)
            .interact()?;
        Ok(prompt.options[index].key.clone())
    }

    fn text(&self, prompt: &TextPrompt) -> Result<String, AppError> {
        let mut input = Input::<String>::new()
            .with_prompt(question_text(
                prompt.question,
                prompt.placeholder.as_deref(),
                prompt.hint.as_deref(),
            ))
            .allow_empty(true)
            .validate_with(|value: &String| prompt.accept(value).map(|_| ()));
        if let Some(default) = &prompt.default {
            input = input.default(default.clone());
        }
        let answer = input.interact_text()?;
        prompt.accept(&answer).map_err(AppError::Validation)
    }

    fn search(&self, prompt: &SearchPrompt) -> Result<String, AppError> {
        let question = question_text(prompt.question, prompt.placeholder.as_deref(), None);
        loop {
            let query: String = Input::new()
                .with_prompt(format!("{question} search"))
                .allow_empty(true)
                .interact_text()?;

            let matches = prompt.filter(&query);
            if matches.is_empty() {
                println!("No matches for '{}', try again.", query.trim());
                continue;
            }
            if matches.len() == 1 {
                return Ok(matches[0].to_string());
            }

            let index = Select::new()
                .with_prompt(prompt.question)
                .items(&matches)
                .default(0)
                .max_length(SEARCH_PAGE_SIZE)
                .interact()?;
            return Ok(matches[index].to_string());
        }
    }
}
