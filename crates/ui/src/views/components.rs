use dioxus::prelude::*;

#[component]
pub fn ProgressBar(value: u8) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {value}%;" }
            }
            span { class: "progress-label", "{value}%" }
        }
    }
}
