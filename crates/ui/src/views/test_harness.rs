use std::sync::Arc;

use course_core::model::Catalog;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::CatalogService;
use storage::repository::{CatalogRepository, InMemoryCatalogRepository};
use storage::sample::sample_catalog;

use crate::context::{UiApp, build_app_context};
use crate::views::scope::TrackerSeed;
use crate::views::{CourseView, HomeView, TrackerScope, ViewerOverlay};
use crate::vm::TrackerVm;

#[derive(Clone)]
struct TestApp {
    catalog_service: Arc<CatalogService>,
    seeded_sample: bool,
}

impl UiApp for TestApp {
    fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    fn seeded_sample(&self) -> bool {
        self.seeded_sample
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Course(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: Option<TrackerSeed>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(seed) = props.seed.clone() {
        use_context_provider(|| seed);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    rsx! {
        TrackerScope {
            match view {
                ViewKind::Home => rsx! { HomeView {} },
                ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
            }
            ViewerOverlay {}
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the catalog load settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = sample_catalog().expect("sample catalog");
    setup_view_harness_with_catalog(view, catalog)
}

pub fn setup_view_harness_with_catalog(view: ViewKind, catalog: Catalog) -> ViewHarness {
    setup_view_harness_with_repo(
        view,
        Arc::new(InMemoryCatalogRepository::with_catalog(catalog)),
        None,
    )
}

pub fn setup_view_harness_seeded(
    view: ViewKind,
    seed: impl Fn(&mut TrackerVm) + Send + Sync + 'static,
) -> ViewHarness {
    let catalog = sample_catalog().expect("sample catalog");
    setup_view_harness_with_repo(
        view,
        Arc::new(InMemoryCatalogRepository::with_catalog(catalog)),
        Some(TrackerSeed(Arc::new(seed))),
    )
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn CatalogRepository>,
    seed: Option<TrackerSeed>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog_service: Arc::new(CatalogService::new(repo)),
        seeded_sample: false,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom }
}
