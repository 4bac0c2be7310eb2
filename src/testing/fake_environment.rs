use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use super::Journal;
use crate::domain::AppError;
use crate::ports::Environment;

/// In-memory environment variables.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    vars: RefCell<HashMap<String, String>>,
    journal: Journal,
}

impl FakeEnvironment {
    pub fn new(journal: Journal) -> Self {
        Self { vars: RefCell::default(), journal }
    }

    pub fn with_var(self, key: &str, value: &str) -> Self {
        self.vars.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn reload(&self, env_file: &Path) -> Result<(), AppError> {
        self.journal.record(format!("reload {}", env_file.display()));
        Ok(())
    }
}
