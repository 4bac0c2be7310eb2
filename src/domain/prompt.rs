//! Question definitions shared by every prompter.
//!
//! Each prompt carries a stable `key` so unattended runs can answer it from a
//! file.

/// One option of a select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub key: &'static str,
    pub question: &'static str,
    pub default: bool,
}

impl ConfirmPrompt {
    pub const fn new(key: &'static str, question: &'static str, default: bool) -> Self {
        Self { key, question, default }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPrompt {
    pub key: &'static str,
    pub question: &'static str,
    pub options: Vec<SelectOption>,
    /// Index into `options`.
    pub default: usize,
}

impl SelectPrompt {
    pub fn new(key: &'static str, question: &'static str, options: Vec<SelectOption>) -> Self {
        Self { key, question, options, default: 0 }
    }

    pub fn with_default(mut self, default_key: &str) -> Self {
        if let Some(index) = self.options.iter().position(|option| option.key == default_key) {
            self.default = index;
        }
        self
    }

    pub fn default_option(&self) -> Option<&SelectOption> {
        self.options.get(self.default)
    }

    pub fn option(&self, key: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextPrompt {
    pub key: &'static str,
    pub question: &'static str,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub required: bool,
}

impl TextPrompt {
    pub fn new(key: &'static str, question: &'static str) -> Self {
        Self { key, question, ..Self::default() }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn hint(mut self, value: impl Into<String>) -> Self {
        self.hint = Some(value.into());
        self
    }

    /// Check an answer against the prompt's constraints.
    ///
    /// Returns the effective value: the trimmed-empty answer falls back to
    /// the default when one exists.
    pub fn accept(&self, answer: &str) -> Result<String, String> {
        if !answer.trim().is_empty() {
            return Ok(answer.to_string());
        }
        match (&self.default, self.required) {
            (Some(default), _) => Ok(default.clone()),
            (None, true) => Err(format!("'{}' is required", self.question)),
            (None, false) => Ok(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPrompt {
    pub key: &'static str,
    pub question: &'static str,
    pub placeholder: Option<String>,
    pub candidates: Vec<String>,
}

impl SearchPrompt {
    pub fn new(key: &'static str, question: &'static str, candidates: Vec<String>) -> Self {
        Self { key, question, placeholder: None, candidates }
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    /// Candidates containing `query`, case-insensitively, in their original
    /// order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        filter_candidates(&self.candidates, query)
    }
}

pub fn filter_candidates<'a>(candidates: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    candidates
        .iter()
        .map(String::as_str)
        .filter(|candidate| needle.is_empty() || candidate.to_lowercase().contains(&needle))
        .collect()
}
