use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::ProgressBar;
use crate::views::scope::use_tracker;
use crate::vm::{CourseCardVm, TrackerVm};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = use_tracker();
    let overview = tracker.read().as_ref().map(TrackerVm::overview);

    let Some(overview) = overview else {
        return rsx! {
            p { class: "loading", "Loading..." }
        };
    };

    rsx! {
        div { class: "page",
            h2 { "Your progress" }
            ProgressBar { value: overview.overall_progress }
            p { class: "muted", "{overview.total_items} lessons in total" }

            if ctx.seeded_sample() {
                p { class: "notice", "Loaded the built-in sample catalog." }
            }

            if overview.courses.is_empty() {
                p { "No courses in this catalog yet." }
            } else {
                ul { class: "course-cards",
                    for card in overview.courses {
                        CourseCard { key: "{card.id}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            Link { class: "course-link", to: Route::Course { course_id: card.id.clone() },
                h3 { "{card.title}" }
            }
            p { class: "muted", "{card.topic_count} topics, {card.item_count} lessons" }
            ProgressBar { value: card.progress }
        }
    }
}
