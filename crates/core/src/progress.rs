//! Completion percentages derived from the catalog and a completion store.
//!
//! Nothing here is cached: every call reads the store again, so the result
//! always reflects the latest toggle or media-end signal.

use std::fmt;

use crate::model::{Catalog, CompletionKey, Course, Topic};
use crate::store::CompletionStore;

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// `round(100 * done / total)` with halves rounded up; `0` when `total` is 0.
    #[must_use]
    pub fn from_ratio(done: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let done = done.min(total) as u128;
        let total = total as u128;
        let rounded = (200 * done + total) / (2 * total);
        // `done <= total` keeps this within 0..=100.
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

fn count_completed<S, I>(store: &S, keys: I) -> (usize, usize)
where
    S: CompletionStore + ?Sized,
    I: IntoIterator<Item = CompletionKey>,
{
    keys.into_iter().fold((0, 0), |(done, total), key| {
        (done + usize::from(store.is_completed(&key)), total + 1)
    })
}

/// Completed items over every item in the catalog.
#[must_use]
pub fn overall_progress<S: CompletionStore + ?Sized>(catalog: &Catalog, store: &S) -> Percent {
    let (done, total) = count_completed(store, catalog.keys());
    Percent::from_ratio(done, total)
}

/// Completed items of one course over the items of that course.
#[must_use]
pub fn course_progress<S: CompletionStore + ?Sized>(course: &Course, store: &S) -> Percent {
    let (done, total) = count_completed(store, course.keys());
    Percent::from_ratio(done, total)
}

/// Completed items of one topic over the items of that topic.
#[must_use]
pub fn topic_progress<S: CompletionStore + ?Sized>(topic: &Topic, store: &S) -> Percent {
    let (done, total) = count_completed(store, topic.keys());
    Percent::from_ratio(done, total)
}
