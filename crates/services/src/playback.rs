//! Seam between the tracker and whatever actually plays the video.

use std::fmt;

use course_core::model::{CompletionKey, VideoRef};

/// Token for one attached end-of-media listener.
///
/// A host never reuses an id, so a signal carrying an old id can always be
/// told apart from one fired by the live listener.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media playback collaborator.
///
/// The host reports the natural end of playback by handing the listener id
/// back to [`crate::ProgressTracker::media_ended`].
pub trait PlaybackHost {
    /// Start rendering `video` for the item identified by `key`.
    fn load(&mut self, key: &CompletionKey, video: &VideoRef);

    fn attach_end_listener(&mut self, key: &CompletionKey) -> ListenerId;

    fn detach_end_listener(&mut self, listener: ListenerId);
}

/// In-process host that only keeps books on what is loaded and attached.
///
/// The desktop UI renders the loaded source into a `video` element and
/// forwards its `ended` event with the current listener id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPlaybackHost {
    next_id: u64,
    loaded: Option<(CompletionKey, VideoRef)>,
    attached: Vec<(ListenerId, CompletionKey)>,
}

impl RecordingPlaybackHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&(CompletionKey, VideoRef)> {
        self.loaded.as_ref()
    }

    #[must_use]
    pub fn attached(&self) -> &[(ListenerId, CompletionKey)] {
        &self.attached
    }

    #[must_use]
    pub fn is_attached(&self, listener: ListenerId) -> bool {
        self.attached.iter().any(|(id, _)| *id == listener)
    }
}

impl PlaybackHost for RecordingPlaybackHost {
    fn load(&mut self, key: &CompletionKey, video: &VideoRef) {
        self.loaded = Some((key.clone(), video.clone()));
    }

    fn attach_end_listener(&mut self, key: &CompletionKey) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId::new(self.next_id);
        self.attached.push((id, key.clone()));
        id
    }

    fn detach_end_listener(&mut self, listener: ListenerId) {
        self.attached.retain(|(id, _)| *id != listener);
        if self.attached.is_empty() {
            self.loaded = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{ContentId, TopicId};

    fn key(content: &str) -> CompletionKey {
        CompletionKey::new(TopicId::new("t1").unwrap(), ContentId::new(content).unwrap())
    }

    #[test]
    fn listener_ids_are_never_reused() {
        let mut host = RecordingPlaybackHost::new();
        let a = host.attach_end_listener(&key("c1"));
        host.detach_end_listener(a);
        let b = host.attach_end_listener(&key("c1"));
        assert_ne!(a, b);
        assert!(!host.is_attached(a));
        assert!(host.is_attached(b));
    }

    #[test]
    fn detaching_last_listener_unloads_source() {
        let mut host = RecordingPlaybackHost::new();
        let video = VideoRef::parse("intro.mp4").unwrap();
        host.load(&key("c1"), &video);
        let id = host.attach_end_listener(&key("c1"));
        assert!(host.loaded().is_some());
        host.detach_end_listener(id);
        assert!(host.loaded().is_none());
    }
}
