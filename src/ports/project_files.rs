use std::path::Path;

use crate::domain::AppError;

/// Port for file access inside the project root. All paths are relative to
/// the root.
pub trait ProjectFiles {
    fn exists(&self, path: &Path) -> bool;

    /// Read a text file. A missing file is `AppError::MissingFile`.
    fn read(&self, path: &Path) -> Result<String, AppError>;

    /// Truncate and overwrite, creating parent directories.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Delete a file. Deleting a missing file is not an error.
    fn remove(&self, path: &Path) -> Result<(), AppError>;

    /// Copy a directory tree, overwriting existing files. Returns the number
    /// of files copied.
    fn copy_dir(&self, from: &Path, to: &Path) -> Result<usize, AppError>;
}
