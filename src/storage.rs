use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Todo;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to create data directory: {0}")]
    DirectoryError(String),
}

/// The persistence collaborator: a single JSON document holding the full
/// task list, replaced wholesale on every save.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted task list. A missing file is an empty list, not
    /// an error; unreadable or unparsable content is an error.
    pub fn load_todos(&self) -> Result<Vec<Todo>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let todos: Vec<Todo> = serde_json::from_str(&contents)?;
        Ok(todos)
    }

    /// Write the full task list, replacing any prior content. Creates the
    /// parent directory on first save.
    pub fn save_todos(&self, todos: &[Todo]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::DirectoryError(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("todos.json"));
        let todos = storage.load_todos().unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("todos.json"));

        let todos = vec![
            Todo::new(2, "Write tests".to_string(), Some("2025-11-01".to_string())),
            Todo::new(1, "Buy milk".to_string(), None),
        ];
        storage.save_todos(&todos).unwrap();

        let loaded = storage.load_todos().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 2);
        assert_eq!(loaded[0].due_date.as_deref(), Some("2025-11-01"));
        assert_eq!(loaded[1].text, "Buy milk");
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("nested").join("todos.json"));
        storage.save_todos(&[]).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = Storage::new(path);
        assert!(matches!(
            storage.load_todos(),
            Err(StorageError::JsonError(_))
        ));
    }
}
