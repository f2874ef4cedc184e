use std::sync::Arc;

use course_core::model::{Catalog, CompletionKey, ContentId, TopicId};
use storage::repository::{CatalogRepository, StorageError};

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_seeded, setup_view_harness_with_catalog,
    setup_view_harness_with_repo,
};

fn key(topic: &str, content: &str) -> CompletionKey {
    CompletionKey::new(TopicId::new(topic).unwrap(), ContentId::new(content).unwrap())
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_courses_at_zero() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Your progress"), "missing heading in {html}");
    assert!(html.contains("Rust Foundations"), "missing course in {html}");
    assert!(html.contains("Async Rust"), "missing course in {html}");
    assert!(html.contains("0%"), "missing percent in {html}");
    assert!(!html.contains("<video"), "viewer rendered without selection: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reflects_completed_items() {
    let mut harness = setup_view_harness_seeded(ViewKind::Home, |vm| {
        let listener = vm.open(&key("futures", "poll")).unwrap();
        vm.media_ended(listener);
        vm.close();
    });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("100%"), "async course should be complete in {html}");
    assert!(html.contains("20%"), "overall progress should be 20% in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_locked_toggles() {
    let mut harness = setup_view_harness(ViewKind::Course("rust-foundations".into()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Getting Started"), "missing topic in {html}");
    assert!(html.contains("Ownership"), "missing topic in {html}");
    assert!(html.contains("Watch"), "missing watch button in {html}");
    assert_eq!(html.matches("disabled").count(), 4, "all toggles locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_unlocks_played_item() {
    let mut harness =
        setup_view_harness_seeded(ViewKind::Course("rust-foundations".into()), |vm| {
            let listener = vm.open(&key("getting-started", "install")).unwrap();
            vm.media_ended(listener);
            vm.close();
        });
    harness.settle().await;
    let html = harness.render();
    assert_eq!(html.matches("disabled").count(), 3, "one toggle unlocked in {html}");
    assert!(html.contains("50%"), "topic progress in {html}");
    assert!(html.contains("25%"), "course progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_unknown_course() {
    let mut harness = setup_view_harness(ViewKind::Course("missing".into()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Course not found"), "missing not-found text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_renders_media_and_docs() {
    let mut harness = setup_view_harness_seeded(ViewKind::Home, |vm| {
        vm.open(&key("getting-started", "hello-cargo"));
    });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("<video"), "missing video in {html}");
    assert!(
        html.contains("https://media.example.com/rust/hello-cargo.mp4"),
        "missing video source in {html}"
    );
    assert!(html.contains("<h1>Hello, Cargo</h1>"), "missing docs in {html}");
    assert!(html.contains("Rust Foundations / Getting Started"), "missing crumbs in {html}");
    assert!(html.contains("Close"), "missing close button in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_next_swaps_in_single_video() {
    let mut harness = setup_view_harness_seeded(ViewKind::Home, |vm| {
        vm.open(&key("getting-started", "install"));
        vm.open_next();
    });
    harness.settle().await;
    let html = harness.render();
    assert_eq!(html.matches("<video").count(), 1, "expected one video in {html}");
    assert!(html.contains("rust/hello-cargo.mp4"), "missing next source in {html}");
    assert!(!html.contains("rust/install.mp4"), "previous source left in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_hidden_after_close() {
    let mut harness = setup_view_harness_seeded(ViewKind::Home, |vm| {
        vm.open(&key("getting-started", "hello-cargo"));
        vm.close();
    });
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("<video"), "viewer still rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_empty_catalog() {
    let mut harness = setup_view_harness_with_catalog(ViewKind::Home, Catalog::empty());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No courses in this catalog yet."), "missing empty text in {html}");
    assert!(html.contains("0%"), "empty catalog reports 0% in {html}");
}

struct FailingCatalogRepo;

#[async_trait::async_trait]
impl CatalogRepository for FailingCatalogRepo {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn replace_catalog(&self, _catalog: &Catalog) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reports_catalog_errors() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Home, Arc::new(FailingCatalogRepo), None);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("The course catalog could not be loaded."),
        "missing error text in {html}"
    );
}
