use std::sync::Arc;

use course_core::ToggleOutcome;
use course_core::model::{Catalog, CompletionKey};
use services::{ListenerId, ProgressTracker, RecordingPlaybackHost};

use crate::vm::catalog_vm::{
    CourseDetailVm, OverviewVm, ViewerVm, map_course_detail, map_overview, map_viewer,
};

/// Session state behind every tracker view.
///
/// The webview plays the loaded source; this side only keeps books on which
/// listener id is live so stale `ended` events can be told apart.
#[derive(Clone, Debug)]
pub struct TrackerVm {
    tracker: ProgressTracker,
    host: RecordingPlaybackHost,
}

impl TrackerVm {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            tracker: ProgressTracker::new(catalog),
            host: RecordingPlaybackHost::new(),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn host(&self) -> &RecordingPlaybackHost {
        &self.host
    }

    pub fn open(&mut self, key: &CompletionKey) -> Option<ListenerId> {
        self.tracker.select(key, &mut self.host)
    }

    pub fn open_next(&mut self) -> Option<ListenerId> {
        self.tracker.select_next(&mut self.host)
    }

    pub fn close(&mut self) {
        self.tracker.deselect(&mut self.host);
    }

    pub fn media_ended(&mut self, listener: ListenerId) -> bool {
        self.tracker.media_ended(listener)
    }

    pub fn toggle(&mut self, key: &CompletionKey) -> ToggleOutcome {
        self.tracker.toggle(key)
    }

    #[must_use]
    pub fn overview(&self) -> OverviewVm {
        map_overview(&self.tracker)
    }

    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<CourseDetailVm> {
        map_course_detail(&self.tracker, course_id)
    }

    #[must_use]
    pub fn viewer(&self) -> Option<ViewerVm> {
        map_viewer(&self.tracker)
    }
}
