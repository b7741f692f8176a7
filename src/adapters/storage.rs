use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the artifacts directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path))?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_list_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("people.txt", b"Alice\nBob\n").await.unwrap();
        storage.write_file("assigned_pairs_run_1.csv", b"Group,People\n").await.unwrap();
        std::fs::create_dir(temp_dir.path().join("archive")).unwrap();

        let names = storage.list_files().await.unwrap();
        assert_eq!(names, vec!["assigned_pairs_run_1.csv", "people.txt"]);

        let data = storage.read_file("people.txt").await.unwrap();
        assert_eq!(data, b"Alice\nBob\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("people.txt").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::RouletteError::IoError(_)));
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let storage = LocalStorage::new("/definitely/not/a/real/dir".to_string());
        assert!(storage.list_files().await.is_err());
    }
}
