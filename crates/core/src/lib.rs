#![forbid(unsafe_code)]

pub mod gate;
pub mod model;
pub mod progress;
pub mod store;

pub use gate::{GateState, PlaybackGate, ToggleOutcome};
pub use progress::{Percent, course_progress, overall_progress, topic_progress};
pub use store::{CompletionStore, InMemoryCompletionStore};
