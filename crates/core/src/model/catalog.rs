use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ContentId, CourseId, TopicId};
use crate::model::key::CompletionKey;
use crate::model::media::{Documentation, VideoRef};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("{kind} {id} has an empty title")]
    EmptyTitle { kind: &'static str, id: String },

    #[error("course id {0} appears more than once")]
    DuplicateCourse(CourseId),

    #[error("topic id {0} appears more than once in the catalog")]
    DuplicateTopic(TopicId),

    #[error("content id {content} appears more than once in topic {topic}")]
    DuplicateContent { topic: TopicId, content: ContentId },
}

fn check_title(kind: &'static str, id: &str, title: &str) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle {
            kind,
            id: id.to_owned(),
        });
    }
    Ok(())
}

//
// ─── ENTITIES ──────────────────────────────────────────────────────────────────
//

/// Smallest trackable unit: one video paired with one documentation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    id: ContentId,
    title: String,
    video: VideoRef,
    #[serde(default)]
    documentation: Documentation,
}

impl ContentItem {
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyTitle` if the title is blank.
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        video: VideoRef,
        documentation: Documentation,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        check_title("content item", id.as_str(), &title)?;
        Ok(Self {
            id,
            title,
            video,
            documentation,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ContentId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn video(&self) -> &VideoRef {
        &self.video
    }

    #[must_use]
    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    title: String,
    #[serde(default)]
    items: Vec<ContentItem>,
}

impl Topic {
    /// # Errors
    ///
    /// Returns `CatalogError` if the title is blank or a content id repeats.
    pub fn new(
        id: TopicId,
        title: impl Into<String>,
        items: Vec<ContentItem>,
    ) -> Result<Self, CatalogError> {
        let topic = Self {
            id,
            title: title.into(),
            items,
        };
        topic.validate()?;
        Ok(topic)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_title("topic", self.id.as_str(), &self.title)?;
        let mut seen = HashSet::new();
        for item in &self.items {
            check_title("content item", item.id.as_str(), &item.title)?;
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateContent {
                    topic: self.id.clone(),
                    content: item.id.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn item(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    #[must_use]
    pub fn key_for(&self, item: &ContentItem) -> CompletionKey {
        CompletionKey::new(self.id.clone(), item.id.clone())
    }

    pub fn keys(&self) -> impl Iterator<Item = CompletionKey> + '_ {
        self.items.iter().map(|item| self.key_for(item))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
    #[serde(default)]
    topics: Vec<Topic>,
}

impl Course {
    /// # Errors
    ///
    /// Returns `CatalogError` if the title is blank or a nested topic is invalid.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        topics: Vec<Topic>,
    ) -> Result<Self, CatalogError> {
        let course = Self {
            id,
            title: title.into(),
            topics,
        };
        check_title("course", course.id.as_str(), &course.title)?;
        for topic in &course.topics {
            topic.validate()?;
        }
        Ok(course)
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == *id)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.topics.iter().map(Topic::item_count).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = CompletionKey> + '_ {
        self.topics.iter().flat_map(Topic::keys)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// A content item together with the topic and course it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedItem<'a> {
    pub course: &'a Course,
    pub topic: &'a Topic,
    pub item: &'a ContentItem,
}

/// Unvalidated catalog shape as it arrives from a data source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDraft {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Read-only course catalog for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDraft")]
pub struct Catalog {
    courses: Vec<Course>,
}

impl TryFrom<CatalogDraft> for Catalog {
    type Error = CatalogError;

    fn try_from(draft: CatalogDraft) -> Result<Self, Self::Error> {
        Self::new(draft.courses)
    }
}

impl Catalog {
    /// Validates and wraps the given courses.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for blank titles, repeated course ids, topic ids
    /// repeated anywhere in the catalog, or content ids repeated in a topic.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut course_ids = HashSet::new();
        let mut topic_ids = HashSet::new();
        for course in &courses {
            check_title("course", course.id.as_str(), &course.title)?;
            if !course_ids.insert(&course.id) {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
            for topic in &course.topics {
                topic.validate()?;
                if !topic_ids.insert(&topic.id) {
                    return Err(CatalogError::DuplicateTopic(topic.id.clone()));
                }
            }
        }
        Ok(Self { courses })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == *id)
    }

    /// Looks a topic up by id; topic ids are unique across the catalog.
    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.courses.iter().find_map(|course| course.topic(id))
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.courses.iter().map(Course::item_count).sum()
    }

    /// Every completion key in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = CompletionKey> + '_ {
        self.courses.iter().flat_map(Course::keys)
    }

    #[must_use]
    pub fn resolve(&self, key: &CompletionKey) -> Option<ResolvedItem<'_>> {
        self.courses.iter().find_map(|course| {
            let topic = course.topic(&key.topic_id)?;
            let item = topic.item(&key.content_id)?;
            Some(ResolvedItem {
                course,
                topic,
                item,
            })
        })
    }

    /// The key following `key` inside the same course, if any.
    #[must_use]
    pub fn next_key(&self, key: &CompletionKey) -> Option<CompletionKey> {
        let resolved = self.resolve(key)?;
        resolved
            .course
            .keys()
            .skip_while(|candidate| candidate != key)
            .nth(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ContentItem {
        ContentItem::new(
            ContentId::new(id).unwrap(),
            format!("Item {id}"),
            VideoRef::parse(format!("videos/{id}.mp4")).unwrap(),
            Documentation::html("<p>doc</p>"),
        )
        .unwrap()
    }

    fn topic(id: &str, items: &[&str]) -> Topic {
        Topic::new(
            TopicId::new(id).unwrap(),
            format!("Topic {id}"),
            items.iter().map(|i| item(i)).collect(),
        )
        .unwrap()
    }

    fn course(id: &str, topics: Vec<Topic>) -> Course {
        Course::new(CourseId::new(id).unwrap(), format!("Course {id}"), topics).unwrap()
    }

    #[test]
    fn counts_items_across_courses() {
        let catalog = Catalog::new(vec![
            course("a", vec![topic("t1", &["c1", "c2"]), topic("t2", &["c1"])]),
            course("b", vec![topic("t3", &[])]),
        ])
        .unwrap();
        assert_eq!(catalog.total_items(), 3);
        assert_eq!(catalog.keys().count(), 3);
    }

    #[test]
    fn rejects_duplicate_content_in_topic() {
        let err = Topic::new(
            TopicId::new("t1").unwrap(),
            "Topic",
            vec![item("c1"), item("c1")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateContent { .. }));
    }

    #[test]
    fn rejects_topic_id_shared_between_courses() {
        let err = Catalog::new(vec![
            course("a", vec![topic("t1", &["c1"])]),
            course("b", vec![topic("t1", &["c2"])]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTopic(TopicId::new("t1").unwrap()));
    }

    #[test]
    fn rejects_blank_titles() {
        let err = Course::new(CourseId::new("a").unwrap(), "  ", vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle { kind: "course", .. }));
    }

    #[test]
    fn resolve_finds_item_and_misses_unknown() {
        let catalog = Catalog::new(vec![course("a", vec![topic("t1", &["c1"])])]).unwrap();
        let key = CompletionKey::new(TopicId::new("t1").unwrap(), ContentId::new("c1").unwrap());
        let found = catalog.resolve(&key).unwrap();
        assert_eq!(found.item.title(), "Item c1");
        assert_eq!(found.course.id().as_str(), "a");

        let missing =
            CompletionKey::new(TopicId::new("t1").unwrap(), ContentId::new("zz").unwrap());
        assert!(catalog.resolve(&missing).is_none());
    }

    #[test]
    fn next_key_walks_course_order() {
        let catalog = Catalog::new(vec![course(
            "a",
            vec![topic("t1", &["c1"]), topic("t2", &["c2"])],
        )])
        .unwrap();
        let first = CompletionKey::new(TopicId::new("t1").unwrap(), ContentId::new("c1").unwrap());
        let second = catalog.next_key(&first).unwrap();
        assert_eq!(second.content_id.as_str(), "c2");
        assert!(catalog.next_key(&second).is_none());
    }

    #[test]
    fn deserialize_validates_catalog() {
        let json = r#"{"courses":[
            {"id":"a","title":"A","topics":[{"id":"t1","title":"T","items":[]}]},
            {"id":"a","title":"B","topics":[]}
        ]}"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }
}
