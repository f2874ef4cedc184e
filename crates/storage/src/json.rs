use std::path::{Path, PathBuf};

use async_trait::async_trait;
use course_core::model::Catalog;

use crate::repository::{CatalogRepository, Storage, StorageError};

/// Catalog stored as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound);
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn replace_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(catalog)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl Storage {
    /// Build a `Storage` reading the catalog from a JSON file.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: std::sync::Arc::new(JsonCatalogRepository::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("course-tracker-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let repo = JsonCatalogRepository::new(temp_path("missing.json"));
        assert!(matches!(
            repo.load_catalog().await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn writes_and_reads_back() {
        let repo = JsonCatalogRepository::new(temp_path("round.json"));
        let catalog = sample_catalog().unwrap();
        repo.replace_catalog(&catalog).await.unwrap();
        assert_eq!(repo.load_catalog().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn invalid_catalog_is_rejected() {
        let path = temp_path("dupes.json");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(
            &path,
            r#"{"courses":[{"id":"a","title":"A"},{"id":"a","title":"B"}]}"#,
        )
        .await
        .unwrap();
        let repo = JsonCatalogRepository::new(&path);
        assert!(matches!(
            repo.load_catalog().await,
            Err(StorageError::Serialization(_))
        ));
    }
}
