use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::Journal;
use crate::domain::AppError;
use crate::ports::ProjectFiles;

/// In-memory project tree keyed by relative path.
#[derive(Debug, Default)]
pub struct MemoryProject {
    files: RefCell<BTreeMap<PathBuf, String>>,
    journal: Journal,
}

impl MemoryProject {
    pub fn new(journal: Journal) -> Self {
        Self { files: RefCell::default(), journal }
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl ProjectFiles for MemoryProject {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.borrow();
        files.contains_key(path) || files.keys().any(|key| key.starts_with(path))
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::MissingFile(path.display().to_string()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.journal.record(format!("write {}", path.display()));
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        self.journal.record(format!("remove {}", path.display()));
        self.files.borrow_mut().remove(path);
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<usize, AppError> {
        let mut files = self.files.borrow_mut();
        let copies: Vec<(PathBuf, String)> = files
            .iter()
            .filter_map(|(path, content)| {
                path.strip_prefix(from).ok().map(|rest| (to.join(rest), content.clone()))
            })
            .collect();
        let count = copies.len();
        files.extend(copies);
        self.journal.record(format!("copy {} -> {}", from.display(), to.display()));
        Ok(count)
    }
}
