use async_trait::async_trait;
use course_core::model::{Catalog, CatalogError};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),

    #[error(transparent)]
    InvalidCatalog(#[from] CatalogError),
}

/// Source of the course catalog loaded at mount time.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds an invalid catalog.
    async fn load_catalog(&self) -> Result<Catalog, StorageError>;

    /// Replace the stored catalog with `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be written.
    async fn replace_catalog(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

/// Simple in-memory catalog source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    catalog: Arc<Mutex<Catalog>>,
}

impl InMemoryCatalogRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn replace_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = catalog.clone();
        Ok(())
    }
}

/// Holds the catalog source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_catalog(Catalog::empty())
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let repo: Arc<dyn CatalogRepository> =
            Arc::new(InMemoryCatalogRepository::with_catalog(catalog));
        Self { catalog: repo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    #[tokio::test]
    async fn in_memory_round_trips_catalog() {
        let repo = InMemoryCatalogRepository::new();
        assert_eq!(repo.load_catalog().await.unwrap().total_items(), 0);

        let catalog = sample_catalog().unwrap();
        repo.replace_catalog(&catalog).await.unwrap();
        assert_eq!(repo.load_catalog().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn storage_shares_one_repository() {
        let storage = Storage::with_catalog(sample_catalog().unwrap());
        let clone = storage.clone();
        clone.catalog.replace_catalog(&Catalog::empty()).await.unwrap();
        let loaded = storage.catalog.load_catalog().await.unwrap();
        assert_eq!(loaded.total_items(), 0);
    }
}
