use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CourseView, HomeView, TrackerScope, ViewerOverlay, use_tracker};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/course/:course_id", CourseView)] Course { course_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        TrackerScope {
            div { class: "app",
                Sidebar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
            ViewerOverlay {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let tracker = use_tracker();
    let courses = tracker
        .read()
        .as_ref()
        .map(|vm| vm.overview().courses)
        .unwrap_or_default();

    rsx! {
        nav { class: "sidebar",
            h1 { "Courses" }
            ul {
                li { Link { to: Route::Home {}, "Overview" } }
                for course in courses {
                    li { key: "{course.id}",
                        Link { to: Route::Course { course_id: course.id.clone() },
                            "{course.title}"
                        }
                        span { class: "sidebar-progress", "{course.progress}%" }
                    }
                }
            }
        }
    }
}
