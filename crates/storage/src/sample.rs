//! Built-in demo catalog used by the seed binary and as a first-run fallback.

use course_core::model::Catalog;

use crate::repository::StorageError;

const SAMPLE_CATALOG_JSON: &str = include_str!("../data/sample_catalog.json");

/// Parse the bundled sample catalog.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the bundled JSON is malformed.
pub fn sample_catalog() -> Result<Catalog, StorageError> {
    serde_json::from_str(SAMPLE_CATALOG_JSON)
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_parses() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.courses().len(), 2);
        assert_eq!(catalog.total_items(), 5);
    }
}
