#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod playback;
pub mod selector;
pub mod tracker;

pub use app_services::{AppServices, CatalogSource};
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, CatalogServiceError};
pub use playback::{ListenerId, PlaybackHost, RecordingPlaybackHost};
pub use selector::{ActiveContentSelector, ActiveSelection};
pub use storage::sqlite::{DEFAULT_DB_URL, normalize_sqlite_url, prepare_sqlite_dir};
pub use tracker::ProgressTracker;
