use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;
use crate::domain::prompt::{ConfirmPrompt, SearchPrompt, SelectPrompt, TextPrompt};
use crate::ports::Prompter;

#[derive(Debug, Clone)]
pub enum Answer {
    Yes,
    No,
    Text(String),
}

/// Prompter answering from a fixed script; unanswered prompts take their
/// default. Records the key of every prompt asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<&'static str, Answer>,
    asked: RefCell<Vec<&'static str>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, key: &'static str, answer: Answer) -> Self {
        self.answers.insert(key, answer);
        self
    }

    pub fn text(self, key: &'static str, value: &str) -> Self {
        self.answer(key, Answer::Text(value.to_string()))
    }

    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.borrow().clone()
    }

    fn take(&self, key: &'static str) -> Option<&Answer> {
        self.asked.borrow_mut().push(key);
        self.answers.get(key)
    }

    fn unexpected(key: &str, answer: &Answer) -> AppError {
        AppError::Validation(format!("scripted answer {:?} does not fit prompt '{}'", answer, key))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, AppError> {
        match self.take(prompt.key) {
            None => Ok(prompt.default),
            Some(Answer::Yes) => Ok(true),
            Some(Answer::No) => Ok(false),
            Some(other) => Err(Self::unexpected(prompt.key, other)),
        }
    }

    fn select(&self, prompt: &SelectPrompt) -> Result<String, AppError> {
        match self.take(prompt.key) {
            None => Ok(prompt.default_option().map(|o| o.key.clone()).unwrap_or_default()),
            Some(Answer::Text(key)) if prompt.option(key).is_some() => Ok(key.clone()),
            Some(other) => Err(Self::unexpected(prompt.key, other)),
        }
    }

    fn text(&self, prompt: &TextPrompt) -> Result<String, AppError> {
        let raw = match self.take(prompt.key) {
            None => String::new(),
            Some(Answer::Text(value)) => value.clone(),
            Some(other) => return Err(Self::unexpected(prompt.key, other)),
        };
        prompt.accept(&raw).map_err(AppError::Validation)
    }

    fn search(&self, prompt: &SearchPrompt) -> Result<String, AppError> {
        match self.take(prompt.key) {
            Some(Answer::Text(query)) => prompt
                .candidates
                .iter()
                .find(|candidate| *candidate == query)
                .map(String::as_str)
                .or_else(|| prompt.filter(query).first().copied())
                .map(str::to_string)
                .ok_or_else(|| AppError::Validation(format!("no candidate matches '{}'", query))),
            None => Err(AppError::Validation(format!("no scripted answer for '{}'", prompt.key))),
            Some(other) => Err(Self::unexpected(prompt.key, other)),
        }
    }
}
