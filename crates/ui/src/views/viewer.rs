use dioxus::document::eval;
use dioxus::prelude::*;
use services::ListenerId;

use crate::views::scope::use_tracker;
use crate::vm::TrackerVm;

const OVERLAY_ID: &str = "viewer-overlay";

/// Video and documentation side by side for the active item.
///
/// Renders nothing when there is no selection or the selection no longer
/// resolves in the catalog.
#[component]
pub fn ViewerOverlay() -> Element {
    let mut tracker = use_tracker();
    let mut focused_listener = use_signal(|| None::<ListenerId>);

    use_effect(move || {
        let listener = tracker
            .read()
            .as_ref()
            .and_then(|vm| vm.tracker().active_listener());
        if listener.is_none() || *focused_listener.peek() == listener {
            return;
        }
        focused_listener.set(listener);
        let _ = eval(&format!("document.getElementById({OVERLAY_ID:?})?.focus();"));
    });

    let viewer = tracker.read().as_ref().and_then(TrackerVm::viewer);
    let Some(viewer) = viewer else {
        return rsx! {};
    };

    let listener = viewer.listener;
    let toggle_key = viewer.key.clone();

    let mut close = move || {
        if let Some(vm) = tracker.write().as_mut() {
            vm.close();
        }
    };

    rsx! {
        div { class: "viewer-backdrop",
            div {
                class: "viewer",
                id: OVERLAY_ID,
                role: "dialog",
                tabindex: "0",
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.data.key() == Key::Escape {
                        evt.prevent_default();
                        close();
                    }
                },
                header { class: "viewer-header",
                    div {
                        p { class: "viewer-crumbs", "{viewer.course_title} / {viewer.topic_title}" }
                        h2 { "{viewer.title}" }
                    }
                    div { class: "viewer-actions",
                        label { class: "viewer-toggle",
                            input {
                                r#type: "checkbox",
                                checked: viewer.completed,
                                disabled: !viewer.toggle_enabled,
                                onchange: move |_| {
                                    if let Some(vm) = tracker.write().as_mut() {
                                        vm.toggle(&toggle_key);
                                    }
                                },
                            }
                            "Done"
                        }
                        if viewer.has_next {
                            button {
                                class: "btn-secondary",
                                onclick: move |_| {
                                    if let Some(vm) = tracker.write().as_mut() {
                                        vm.open_next();
                                    }
                                },
                                "Next"
                            }
                        }
                        button {
                            id: "viewer-close",
                            class: "btn-primary",
                            onclick: move |_| close(),
                            "Close"
                        }
                    }
                }
                div { class: "viewer-body",
                    div { class: "viewer-media",
                        for listener in std::iter::once(listener) {
                            ViewerVideo {
                                key: "{listener}",
                                listener,
                                src: viewer.video_src.clone(),
                            }
                        }
                    }
                    article {
                        class: "viewer-docs",
                        dangerous_inner_html: "{viewer.documentation_html}",
                    }
                }
            }
        }
    }
}

/// Media element wired to one listener.
///
/// Keyed by the listener id, so every selection mounts a fresh element and an
/// `ended` event can only ever report the listener it was rendered with.
#[component]
fn ViewerVideo(listener: ListenerId, src: String) -> Element {
    let mut tracker = use_tracker();

    rsx! {
        video {
            src: "{src}",
            controls: true,
            autoplay: true,
            onended: move |_| {
                if let Some(vm) = tracker.write().as_mut() {
                    vm.media_ended(listener);
                }
            },
        }
    }
}
