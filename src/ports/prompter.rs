use crate::domain::AppError;
use crate::domain::prompt::{ConfirmPrompt, SearchPrompt, SelectPrompt, TextPrompt};

/// Port for asking the operator questions.
///
/// Every call blocks until an answer satisfying the prompt's constraints is
/// available.
pub trait Prompter {
    /// Yes/no question.
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, AppError>;

    /// Pick one option; returns the option's key.
    fn select(&self, prompt: &SelectPrompt) -> Result<String, AppError>;

    /// Free-form text. Required prompts never return an empty string.
    fn text(&self, prompt: &TextPrompt) -> Result<String, AppError>;

    /// Filter the prompt's candidates by a query and pick one of them.
    fn search(&self, prompt: &SearchPrompt) -> Result<String, AppError>;
}
