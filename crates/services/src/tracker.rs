use std::sync::Arc;

use course_core::model::{Catalog, CompletionKey, CourseId, ResolvedItem, TopicId};
use course_core::{
    CompletionStore, GateState, InMemoryCompletionStore, Percent, PlaybackGate, ToggleOutcome,
    course_progress, overall_progress, topic_progress,
};

use crate::playback::{ListenerId, PlaybackHost};
use crate::selector::ActiveContentSelector;

/// Gated learning-progress tracker for one session.
///
/// Every operation is total. Requests that policy forbids (toggling a locked
/// item, selecting an item missing from the catalog, a media-end signal from a
/// released listener) leave the state untouched.
#[derive(Debug, Clone)]
pub struct ProgressTracker<S = InMemoryCompletionStore> {
    catalog: Arc<Catalog>,
    store: S,
    gate: PlaybackGate,
    selector: ActiveContentSelector,
}

impl ProgressTracker<InMemoryCompletionStore> {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_store(catalog, InMemoryCompletionStore::new())
    }
}

impl<S: CompletionStore> ProgressTracker<S> {
    #[must_use]
    pub fn with_store(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            gate: PlaybackGate::new(),
            selector: ActiveContentSelector::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─── Selection ─────────────────────────────────────────────────────────────

    /// Open `key` in the viewer and wire its media element to the gate.
    ///
    /// Returns the new listener id, or `None` (and changes nothing) when the
    /// key does not resolve in the catalog.
    pub fn select<H: PlaybackHost + ?Sized>(
        &mut self,
        key: &CompletionKey,
        host: &mut H,
    ) -> Option<ListenerId> {
        let Some(resolved) = self.catalog.resolve(key) else {
            log::debug!("select ignored: {key} is not in the catalog");
            return None;
        };
        let video = resolved.item.video().clone();
        let listener = self.selector.select(key.clone(), &video, host);
        log::info!("selected {key} (listener {listener})");
        Some(listener)
    }

    /// Close the viewer. Completion flags are left as they are.
    pub fn deselect<H: PlaybackHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(key) = self.selector.deselect(host) {
            log::info!("closed viewer for {key}");
        }
    }

    /// Move the selection to the next item of the active course, if there is one.
    pub fn select_next<H: PlaybackHost + ?Sized>(&mut self, host: &mut H) -> Option<ListenerId> {
        let next = self
            .selector
            .active_key()
            .and_then(|key| self.catalog.next_key(key))?;
        self.select(&next, host)
    }

    #[must_use]
    pub fn active_key(&self) -> Option<&CompletionKey> {
        self.selector.active_key()
    }

    #[must_use]
    pub fn active_listener(&self) -> Option<ListenerId> {
        self.selector.active().map(|selection| selection.listener)
    }

    /// The active item resolved against the catalog; `None` suppresses the viewer.
    #[must_use]
    pub fn active_view(&self) -> Option<ResolvedItem<'_>> {
        self.selector
            .active_key()
            .and_then(|key| self.catalog.resolve(key))
    }

    // ─── Gate ──────────────────────────────────────────────────────────────────

    /// Handle the end-of-media signal from `listener`.
    ///
    /// Returns `true` when the signal came from the live listener and was applied.
    pub fn media_ended(&mut self, listener: ListenerId) -> bool {
        let Some(key) = self.selector.resolve_end(listener).cloned() else {
            log::debug!("media end ignored: listener {listener} is not live");
            return false;
        };
        if self.gate.media_ended(&key, &mut self.store) {
            log::info!("unlocked {key}");
        }
        true
    }

    pub fn toggle(&mut self, key: &CompletionKey) -> ToggleOutcome {
        if self.catalog.resolve(key).is_none() {
            return ToggleOutcome::Ignored;
        }
        let outcome = self.gate.toggle(key, &mut self.store);
        if outcome == ToggleOutcome::Ignored {
            log::debug!("toggle ignored: {key} is locked");
        }
        outcome
    }

    #[must_use]
    pub fn is_completed(&self, key: &CompletionKey) -> bool {
        self.store.is_completed(key)
    }

    #[must_use]
    pub fn gate_state(&self, key: &CompletionKey) -> GateState {
        self.gate.state(key, &self.store)
    }

    #[must_use]
    pub fn is_toggle_enabled(&self, key: &CompletionKey) -> bool {
        self.catalog.resolve(key).is_some() && self.gate.is_toggle_enabled(key, &self.store)
    }

    // ─── Progress ──────────────────────────────────────────────────────────────

    #[must_use]
    pub fn overall_progress(&self) -> Percent {
        overall_progress(&self.catalog, &self.store)
    }

    #[must_use]
    pub fn course_progress(&self, course_id: &CourseId) -> Percent {
        self.catalog
            .course(course_id)
            .map_or(Percent::ZERO, |course| course_progress(course, &self.store))
    }

    #[must_use]
    pub fn topic_progress(&self, topic_id: &TopicId) -> Percent {
        self.catalog
            .topic(topic_id)
            .map_or(Percent::ZERO, |topic| topic_progress(topic, &self.store))
    }
}
