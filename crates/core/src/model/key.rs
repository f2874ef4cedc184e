use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{ContentId, TopicId};

/// Identifies one progress flag: a content item scoped by its topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompletionKey {
    pub topic_id: TopicId,
    pub content_id: ContentId,
}

impl CompletionKey {
    #[must_use]
    pub fn new(topic_id: TopicId, content_id: ContentId) -> Self {
        Self {
            topic_id,
            content_id,
        }
    }
}

impl fmt::Display for CompletionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.topic_id, self.content_id)
    }
}
