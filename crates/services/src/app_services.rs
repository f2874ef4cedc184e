use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::Catalog;
use storage::repository::Storage;
use storage::sample::sample_catalog;

use crate::catalog_service::CatalogService;
use crate::error::{AppServicesError, CatalogServiceError};

/// Where the catalog for this run comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// `SQLite` database URL; an empty database is seeded with the built-in sample.
    Sqlite(String),
    /// JSON catalog file, read as-is.
    Json(PathBuf),
    /// Fixed in-process catalog.
    Memory(Catalog),
}

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    catalog_service: Arc<CatalogService>,
    seeded_sample: bool,
}

impl AppServices {
    /// Build services for the given catalog source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or sample seeding fails.
    pub async fn bootstrap(source: CatalogSource) -> Result<Self, AppServicesError> {
        let (storage, seed) = match source {
            CatalogSource::Sqlite(url) => (Storage::sqlite(&url).await?, true),
            CatalogSource::Json(path) => (Storage::json(path), false),
            CatalogSource::Memory(catalog) => (Storage::with_catalog(catalog), false),
        };
        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));

        let seeded_sample = if seed {
            let sample = sample_catalog().map_err(CatalogServiceError::from)?;
            catalog_service.ensure_catalog(&sample).await?
        } else {
            false
        };

        Ok(Self {
            catalog_service,
            seeded_sample,
        })
    }

    #[must_use]
    pub fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    /// Whether bootstrap wrote the built-in sample into an empty database.
    #[must_use]
    pub fn seeded_sample(&self) -> bool {
        self.seeded_sample
    }
}
