mod components;
mod course;
mod home;
mod scope;
mod state;
mod viewer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course::CourseView;
pub use home::HomeView;
pub use scope::{TrackerScope, TrackerSignal, use_tracker};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use viewer::ViewerOverlay;
