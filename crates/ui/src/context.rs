use std::sync::Arc;

use services::CatalogService;

pub trait UiApp: Send + Sync {
    fn catalog_service(&self) -> Arc<CatalogService>;

    /// Whether the catalog was freshly seeded from the built-in sample.
    fn seeded_sample(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog_service: Arc<CatalogService>,
    seeded_sample: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog_service: app.catalog_service(),
            seeded_sample: app.seeded_sample(),
        }
    }

    #[must_use]
    pub fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    #[must_use]
    pub fn seeded_sample(&self) -> bool {
        self.seeded_sample
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
