use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.full_path(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Staged write, then rename over the target.
        let staging = full_path.with_extension("tmp");
        tokio::fs::write(&staging, data).await?;
        tokio::fs::rename(&staging, &full_path).await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let found = tokio::fs::try_exists(self.full_path(path)).await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(!storage.exists("nested/state.json").await.unwrap());
        storage.write_file("nested/state.json", b"{}").await.unwrap();
        assert!(storage.exists("nested/state.json").await.unwrap());
        assert_eq!(storage.read_file("nested/state.json").await.unwrap(), b"{}");
        assert!(!temp_dir.path().join("nested/state.tmp").exists());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        assert!(matches!(
            storage.read_file("missing.json").await,
            Err(crate::utils::error::SgaeaError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_exists_reports_io_errors() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("plain"), b"x").unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        // A path below a regular file cannot be probed.
        assert!(matches!(
            storage.exists("plain/academy.json").await,
            Err(crate::utils::error::SgaeaError::IoError(_))
        ));
    }
}
