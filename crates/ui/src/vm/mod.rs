mod catalog_vm;
mod markdown_vm;
mod tracker_vm;

pub use catalog_vm::{
    CourseCardVm, CourseDetailVm, ItemRowVm, OverviewVm, TopicSectionVm, ViewerVm,
    map_course_detail, map_overview, map_viewer,
};
pub use markdown_vm::{documentation_html, markdown_to_html};
pub use tracker_vm::TrackerVm;
