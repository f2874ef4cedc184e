mod catalog;
mod ids;
mod key;
pub mod media;

pub use catalog::{
    Catalog, CatalogDraft, CatalogError, ContentItem, Course, ResolvedItem, Topic,
};
pub use ids::{ContentId, CourseId, ParseIdError, TopicId};
pub use key::CompletionKey;
pub use media::{DocFormat, Documentation, MediaValidationError, VideoRef};
