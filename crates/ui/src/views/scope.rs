use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::TrackerVm;

/// Shared tracker state; `None` until the catalog has loaded.
pub type TrackerSignal = Signal<Option<TrackerVm>>;

/// Applied to a freshly built tracker so tests can start from a given state.
#[cfg(test)]
#[derive(Clone)]
pub struct TrackerSeed(pub std::sync::Arc<dyn Fn(&mut TrackerVm) + Send + Sync>);

/// Loads the catalog once and provides the session tracker to its children.
#[component]
pub fn TrackerScope(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog_service = ctx.catalog_service();
    let tracker: TrackerSignal = use_context_provider(|| Signal::new(None));
    #[cfg(test)]
    let seed = try_use_context::<TrackerSeed>();

    let mut resource = use_resource(move || {
        let catalog_service = catalog_service.clone();
        let mut tracker = tracker;
        #[cfg(test)]
        let seed = seed.clone();

        async move {
            let catalog = catalog_service.load().await.map_err(|err| {
                log::warn!("catalog load failed: {err}");
                ViewError::CatalogUnavailable
            })?;
            log::info!(
                "tracking {} items across {} courses",
                catalog.total_items(),
                catalog.courses().len()
            );
            #[cfg_attr(not(test), allow(unused_mut))]
            let mut vm = TrackerVm::new(catalog);
            #[cfg(test)]
            if let Some(seed) = seed {
                (seed.0)(&mut vm);
            }
            tracker.set(Some(vm));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    match state {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { class: "loading", "Loading..." }
        },
        ViewState::Ready(()) => rsx! { {children} },
        ViewState::Error(err) => rsx! {
            div { class: "page",
                p { class: "error", "{err.message()}" }
                button { class: "btn-secondary", onclick: move |_| resource.restart(), "Retry" }
            }
        },
    }
}

/// The session tracker provided by the nearest [`TrackerScope`].
#[must_use]
pub fn use_tracker() -> TrackerSignal {
    use_context::<TrackerSignal>()
}
