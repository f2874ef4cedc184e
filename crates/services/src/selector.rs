use course_core::model::{CompletionKey, VideoRef};

use crate::playback::{ListenerId, PlaybackHost};

/// The item open in the viewer and the listener wired to its media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    pub key: CompletionKey,
    pub listener: ListenerId,
}

/// Owns the single live end-of-media listener.
///
/// Selecting always detaches the previous listener before the new one is
/// attached, so at most one listener is live at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveContentSelector {
    active: Option<ActiveSelection>,
}

impl ActiveContentSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<H: PlaybackHost + ?Sized>(
        &mut self,
        key: CompletionKey,
        video: &VideoRef,
        host: &mut H,
    ) -> ListenerId {
        self.release(host);
        host.load(&key, video);
        let listener = host.attach_end_listener(&key);
        self.active = Some(ActiveSelection { key, listener });
        listener
    }

    /// Clears the selection; returns the key that was active, if any.
    pub fn deselect<H: PlaybackHost + ?Sized>(&mut self, host: &mut H) -> Option<CompletionKey> {
        self.release(host).map(|selection| selection.key)
    }

    fn release<H: PlaybackHost + ?Sized>(&mut self, host: &mut H) -> Option<ActiveSelection> {
        let previous = self.active.take()?;
        host.detach_end_listener(previous.listener);
        Some(previous)
    }

    /// Key for a fired listener, or `None` when the listener is no longer live.
    #[must_use]
    pub fn resolve_end(&self, listener: ListenerId) -> Option<&CompletionKey> {
        self.active
            .as_ref()
            .filter(|selection| selection.listener == listener)
            .map(|selection| &selection.key)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_key(&self) -> Option<&CompletionKey> {
        self.active.as_ref().map(|selection| &selection.key)
    }
}
