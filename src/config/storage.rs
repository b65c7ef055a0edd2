use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
///
/// Absolute paths passed to `read_file`/`write_file` bypass the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).map_err(|e| {
            std::io::Error::new(e.kind(), format!("{}: {}", full_path.display(), e))
        })?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AnalysisError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/bigrams.csv", b"ngram,n,frequency").await.unwrap();
        let data = storage.read_file("nested/bigrams.csv").await.unwrap();

        assert_eq!(data, b"ngram,n,frequency");
    }

    #[tokio::test]
    async fn test_missing_file_keeps_not_found_kind() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("CorpusEducacion.txt").await.unwrap_err();
        match err {
            AnalysisError::IoError(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("CorpusEducacion.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
