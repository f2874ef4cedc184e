//! Per-item lock that only a finished playback can open.
//!
//! ```text
//!            media ended
//!  Locked ───────────────▶ Unlocked ◀──┐
//!    │                        │        │ toggle (flips the flag)
//!    └─ toggle: ignored       └────────┘
//! ```
//!
//! Unlocking is sticky for the session: unchecking an item leaves it
//! `Unlocked`, so the user can check it again without replaying.

use std::collections::HashSet;

use crate::model::CompletionKey;
use crate::store::CompletionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Result of a manual toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item is still locked; nothing changed.
    Ignored,
    /// The flag was flipped to the contained value.
    Changed(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackGate {
    unlocked: HashSet<CompletionKey>,
}

impl PlaybackGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An item already marked complete in the store counts as unlocked.
    #[must_use]
    pub fn state<S: CompletionStore + ?Sized>(&self, key: &CompletionKey, store: &S) -> GateState {
        if self.unlocked.contains(key) || store.is_completed(key) {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    #[must_use]
    pub fn is_toggle_enabled<S: CompletionStore + ?Sized>(
        &self,
        key: &CompletionKey,
        store: &S,
    ) -> bool {
        self.state(key, store) == GateState::Unlocked
    }

    /// Applies the end-of-media signal for `key`: unlocks it and marks it complete.
    ///
    /// Returns `true` when this call moved the item out of `Locked`.
    pub fn media_ended<S: CompletionStore + ?Sized>(
        &mut self,
        key: &CompletionKey,
        store: &mut S,
    ) -> bool {
        let was_locked = self.state(key, store) == GateState::Locked;
        self.unlocked.insert(key.clone());
        store.set_completed(key, true);
        was_locked
    }

    pub fn toggle<S: CompletionStore + ?Sized>(
        &mut self,
        key: &CompletionKey,
        store: &mut S,
    ) -> ToggleOutcome {
        match self.state(key, store) {
            GateState::Locked => ToggleOutcome::Ignored,
            GateState::Unlocked => {
                // Remember the unlock even if it came from a pre-filled store.
                self.unlocked.insert(key.clone());
                let next = !store.is_completed(key);
                store.set_completed(key, next);
                ToggleOutcome::Changed(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentId, TopicId};
    use crate::store::InMemoryCompletionStore;

    fn key(content: &str) -> CompletionKey {
        CompletionKey::new(TopicId::new("t1").unwrap(), ContentId::new(content).unwrap())
    }

    #[test]
    fn starts_locked() {
        let gate = PlaybackGate::new();
        let store = InMemoryCompletionStore::new();
        assert_eq!(gate.state(&key("c1"), &store), GateState::Locked);
        assert!(!gate.is_toggle_enabled(&key("c1"), &store));
    }

    #[test]
    fn toggle_while_locked_is_ignored() {
        let mut gate = PlaybackGate::new();
        let mut store = InMemoryCompletionStore::new();
        assert_eq!(gate.toggle(&key("c1"), &mut store), ToggleOutcome::Ignored);
        assert!(!store.is_completed(&key("c1")));
    }

    #[test]
    fn media_end_unlocks_and_completes_only_that_key() {
        let mut gate = PlaybackGate::new();
        let mut store = InMemoryCompletionStore::new();
        assert!(gate.media_ended(&key("c1"), &mut store));
        assert!(store.is_completed(&key("c1")));
        assert!(!store.is_completed(&key("c2")));
        assert_eq!(gate.state(&key("c2"), &store), GateState::Locked);
    }

    #[test]
    fn unlock_is_sticky_after_unchecking() {
        let mut gate = PlaybackGate::new();
        let mut store = InMemoryCompletionStore::new();
        gate.media_ended(&key("c1"), &mut store);
        assert_eq!(gate.toggle(&key("c1"), &mut store), ToggleOutcome::Changed(false));
        assert_eq!(gate.state(&key("c1"), &store), GateState::Unlocked);
        assert_eq!(gate.toggle(&key("c1"), &mut store), ToggleOutcome::Changed(true));
        assert!(store.is_completed(&key("c1")));
    }

    #[test]
    fn repeated_media_end_recompletes() {
        let mut gate = PlaybackGate::new();
        let mut store = InMemoryCompletionStore::new();
        gate.media_ended(&key("c1"), &mut store);
        gate.toggle(&key("c1"), &mut store);
        assert!(!gate.media_ended(&key("c1"), &mut store));
        assert!(store.is_completed(&key("c1")));
    }

    #[test]
    fn prefilled_store_counts_as_unlocked() {
        let mut gate = PlaybackGate::new();
        let mut store = InMemoryCompletionStore::new();
        store.set_completed(&key("c1"), true);
        assert_eq!(gate.toggle(&key("c1"), &mut store), ToggleOutcome::Changed(false));
        assert_eq!(gate.state(&key("c1"), &store), GateState::Unlocked);
    }
}
