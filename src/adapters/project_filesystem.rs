use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFiles;

/// Filesystem-backed project files rooted at the project directory.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
}

impl FilesystemProject {
    /// Create a store for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFiles for FilesystemProject {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve(path)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::MissingFile(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_file(self.resolve(path)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<usize, AppError> {
        copy_tree(&self.resolve(from), &self.resolve(to))
    }
}

fn copy_tree(from: &Path, to: &Path) -> Result<usize, AppError> {
    fs::create_dir_all(to)?;
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let destination = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_tree(&entry.path(), &destination)?;
        } else {
            fs::copy(entry.path(), &destination)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> (TempDir, FilesystemProject) {
        let dir = TempDir::new().unwrap();
        let project = FilesystemProject::new(dir.path().to_path_buf());
        (dir, project)
    }

    #[test]
    fn missing_file_is_reported_by_relative_path() {
        let (_dir, project) = project();
        let err = project.read(Path::new(".env.example")).unwrap_err();
        assert!(matches!(err, AppError::MissingFile(ref path) if path == ".env.example"));
    }

    #[test]
    fn write_creates_parents_and_truncates() {
        let (dir, project) = project();
        let path = Path::new("config/app.php");
        project.write(path, "long original content").unwrap();
        project.write(path, "short").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join(path)).unwrap(), "short");
    }

    #[test]
    fn remove_tolerates_missing_file() {
        let (dir, project) = project();
        let path = Path::new("database/database.sqlite");
        project.remove(path).unwrap();
        project.write(path, "").unwrap();
        project.remove(path).unwrap();
        assert!(!dir.path().join(path).exists());
    }

    #[test]
    fn copy_dir_copies_nested_files_and_overwrites() {
        use assert_fs::prelude::*;
        use predicates::prelude::*;

        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("src/seo/meta.blade.php").write_str("<meta>").unwrap();
        temp.child("src/seo/partials/og.blade.php").write_str("<og>").unwrap();
        temp.child("out/seo/meta.blade.php").write_str("old").unwrap();
        let project = FilesystemProject::new(temp.path().to_path_buf());

        let copied = project.copy_dir(Path::new("src/seo"), Path::new("out/seo")).unwrap();

        assert_eq!(copied, 2);
        temp.child("out/seo/meta.blade.php").assert("<meta>");
        temp.child("out/seo/partials/og.blade.php").assert(predicate::str::contains("<og>"));
    }
}
