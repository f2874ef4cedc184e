use course_core::CompletionStore;
use course_core::model::{CompletionKey, Course, CourseId, Topic};
use services::{ListenerId, ProgressTracker};

use crate::vm::markdown_vm::documentation_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub progress: u8,
    pub topic_count: usize,
    pub item_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewVm {
    pub overall_progress: u8,
    pub total_items: usize,
    pub courses: Vec<CourseCardVm>,
}

/// One row of a topic list: the item and the state of its completion toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRowVm {
    pub key: CompletionKey,
    pub title: String,
    pub completed: bool,
    pub toggle_enabled: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicSectionVm {
    pub id: String,
    pub title: String,
    pub progress: u8,
    pub items: Vec<ItemRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub id: String,
    pub title: String,
    pub progress: u8,
    pub topics: Vec<TopicSectionVm>,
}

/// Everything the overlay needs to render the active item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerVm {
    pub key: CompletionKey,
    pub listener: ListenerId,
    pub course_title: String,
    pub topic_title: String,
    pub title: String,
    pub video_src: String,
    pub documentation_html: String,
    pub completed: bool,
    pub toggle_enabled: bool,
    pub has_next: bool,
}

#[must_use]
pub fn map_overview<S: CompletionStore>(tracker: &ProgressTracker<S>) -> OverviewVm {
    let courses = tracker
        .catalog()
        .courses()
        .iter()
        .map(|course| CourseCardVm {
            id: course.id().to_string(),
            title: course.title().to_string(),
            progress: tracker.course_progress(course.id()).value(),
            topic_count: course.topics().len(),
            item_count: course.item_count(),
        })
        .collect();

    OverviewVm {
        overall_progress: tracker.overall_progress().value(),
        total_items: tracker.catalog().total_items(),
        courses,
    }
}

/// Course page model; `None` when the id is unknown.
#[must_use]
pub fn map_course_detail<S: CompletionStore>(
    tracker: &ProgressTracker<S>,
    course_id: &str,
) -> Option<CourseDetailVm> {
    let id = CourseId::new(course_id).ok()?;
    let course = tracker.catalog().course(&id)?;
    Some(CourseDetailVm {
        id: course.id().to_string(),
        title: course.title().to_string(),
        progress: tracker.course_progress(course.id()).value(),
        topics: map_topics(tracker, course),
    })
}

fn map_topics<S: CompletionStore>(
    tracker: &ProgressTracker<S>,
    course: &Course,
) -> Vec<TopicSectionVm> {
    course
        .topics()
        .iter()
        .map(|topic| TopicSectionVm {
            id: topic.id().to_string(),
            title: topic.title().to_string(),
            progress: tracker.topic_progress(topic.id()).value(),
            items: map_rows(tracker, topic),
        })
        .collect()
}

fn map_rows<S: CompletionStore>(tracker: &ProgressTracker<S>, topic: &Topic) -> Vec<ItemRowVm> {
    let active = tracker.active_key();
    topic
        .items()
        .iter()
        .map(|item| {
            let key = topic.key_for(item);
            ItemRowVm {
                title: item.title().to_string(),
                completed: tracker.is_completed(&key),
                toggle_enabled: tracker.is_toggle_enabled(&key),
                active: active == Some(&key),
                key,
            }
        })
        .collect()
}

#[must_use]
pub fn map_viewer<S: CompletionStore>(tracker: &ProgressTracker<S>) -> Option<ViewerVm> {
    let resolved = tracker.active_view()?;
    let listener = tracker.active_listener()?;
    let key = resolved.topic.key_for(resolved.item);
    Some(ViewerVm {
        listener,
        course_title: resolved.course.title().to_string(),
        topic_title: resolved.topic.title().to_string(),
        title: resolved.item.title().to_string(),
        video_src: resolved.item.video().to_src(),
        documentation_html: documentation_html(resolved.item.documentation()),
        completed: tracker.is_completed(&key),
        toggle_enabled: tracker.is_toggle_enabled(&key),
        has_next: tracker.catalog().next_key(&key).is_some(),
        key,
    })
}
