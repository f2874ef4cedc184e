use std::sync::Arc;

use course_core::model::Catalog;
use storage::repository::CatalogRepository;

use crate::error::CatalogServiceError;

/// Loads the read-only course catalog from a repository.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Load the catalog for a session.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the repository cannot be read
    /// or holds an invalid catalog.
    pub async fn load(&self) -> Result<Arc<Catalog>, CatalogServiceError> {
        let catalog = self.repo.load_catalog().await?;
        log::debug!(
            "loaded catalog: {} courses, {} items",
            catalog.courses().len(),
            catalog.total_items()
        );
        Ok(Arc::new(catalog))
    }

    /// Write `fallback` into the repository when it holds no courses yet.
    ///
    /// Returns `true` when the fallback was written.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn ensure_catalog(&self, fallback: &Catalog) -> Result<bool, CatalogServiceError> {
        let existing = self.repo.load_catalog().await?;
        if !existing.courses().is_empty() {
            return Ok(false);
        }
        self.repo.replace_catalog(fallback).await?;
        log::info!(
            "seeded empty catalog with {} courses",
            fallback.courses().len()
        );
        Ok(true)
    }
}
