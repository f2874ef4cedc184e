use std::collections::HashMap;

use crate::model::CompletionKey;

/// Source of truth for per-item completion flags.
///
/// Both operations are total: unknown keys read as `false` and writes never fail.
pub trait CompletionStore {
    fn is_completed(&self, key: &CompletionKey) -> bool;

    /// Idempotent; writing the current value again is a no-op.
    fn set_completed(&mut self, key: &CompletionKey, value: bool);
}

/// Process-local store; its contents are lost when the app exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCompletionStore {
    flags: HashMap<CompletionKey, bool>,
}

impl InMemoryCompletionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys ever written, regardless of their value.
    #[must_use]
    pub fn known_keys(&self) -> usize {
        self.flags.len()
    }
}

impl CompletionStore for InMemoryCompletionStore {
    fn is_completed(&self, key: &CompletionKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set_completed(&mut self, key: &CompletionKey, value: bool) {
        // Keys are never removed, only flipped.
        match self.flags.get_mut(key) {
            Some(current) => *current = value,
            None => {
                self.flags.insert(key.clone(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentId, TopicId};

    fn key(topic: &str, content: &str) -> CompletionKey {
        CompletionKey::new(TopicId::new(topic).unwrap(), ContentId::new(content).unwrap())
    }

    #[test]
    fn unknown_keys_read_false() {
        let store = InMemoryCompletionStore::new();
        assert!(!store.is_completed(&key("t1", "c1")));
    }

    #[test]
    fn set_is_idempotent() {
        let mut store = InMemoryCompletionStore::new();
        store.set_completed(&key("t1", "c1"), true);
        store.set_completed(&key("t1", "c1"), true);
        assert!(store.is_completed(&key("t1", "c1")));
        assert_eq!(store.known_keys(), 1);
    }

    #[test]
    fn unsetting_keeps_key_space() {
        let mut store = InMemoryCompletionStore::new();
        store.set_completed(&key("t1", "c1"), true);
        store.set_completed(&key("t1", "c1"), false);
        assert!(!store.is_completed(&key("t1", "c1")));
        assert_eq!(store.known_keys(), 1);
    }

    #[test]
    fn keys_are_scoped_by_topic() {
        let mut store = InMemoryCompletionStore::new();
        store.set_completed(&key("t1", "c1"), true);
        assert!(!store.is_completed(&key("t2", "c1")));
    }
}
