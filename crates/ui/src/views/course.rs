use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::views::components::ProgressBar;
use crate::views::scope::use_tracker;
use crate::vm::{ItemRowVm, TopicSectionVm};

#[component]
pub fn CourseView(course_id: String) -> Element {
    let tracker = use_tracker();
    let detail = tracker
        .read()
        .as_ref()
        .and_then(|vm| vm.course(&course_id));

    let Some(detail) = detail else {
        return rsx! {
            div { class: "page",
                h2 { "Course not found" }
                Link { to: Route::Home {}, "Back to overview" }
            }
        };
    };

    rsx! {
        div { class: "page course-page",
            h2 { "{detail.title}" }
            ProgressBar { value: detail.progress }
            for topic in detail.topics {
                TopicSection { key: "{topic.id}", topic }
            }
        }
    }
}

#[component]
fn TopicSection(topic: TopicSectionVm) -> Element {
    rsx! {
        section { class: "topic",
            header { class: "topic-header",
                h3 { "{topic.title}" }
                ProgressBar { value: topic.progress }
            }
            ul { class: "topic-items",
                for row in topic.items {
                    ItemRow { key: "{row.key}", row }
                }
            }
        }
    }
}

#[component]
fn ItemRow(row: ItemRowVm) -> Element {
    let mut tracker = use_tracker();
    let open_key = row.key.clone();
    let toggle_key = row.key.clone();
    let row_class = if row.active { "item-row active" } else { "item-row" };
    let title_hint = if row.toggle_enabled {
        "Mark as done or not done"
    } else {
        "Watch the video to the end to unlock"
    };

    rsx! {
        li { class: "{row_class}",
            input {
                r#type: "checkbox",
                title: "{title_hint}",
                checked: row.completed,
                disabled: !row.toggle_enabled,
                onchange: move |_| {
                    if let Some(vm) = tracker.write().as_mut() {
                        vm.toggle(&toggle_key);
                    }
                },
            }
            span { class: "item-title", "{row.title}" }
            button {
                class: "btn-secondary",
                onclick: move |_| {
                    if let Some(vm) = tracker.write().as_mut() {
                        vm.open(&open_key);
                    }
                },
                "Watch"
            }
        }
    }
}
