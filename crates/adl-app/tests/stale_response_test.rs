//! A slow response for a superseded filter must never reach the view.

use std::sync::Arc;

use adl_app::{FetchPageWindow, PageDirectory};
use adl_core::ports::{PageRepositoryPort, StoreError};
use adl_core::query::Predicate;
use adl_core::{PageFilter, PageQuery, PageSummary};
use async_trait::async_trait;
use tokio::sync::Notify;

/// Holds back responses for the `old` search term until released.
struct GatedRepository {
    started: Notify,
    release: Notify,
}

impl GatedRepository {
    fn is_gated(query: &PageQuery) -> bool {
        query
            .predicates
            .iter()
            .any(|p| matches!(p, Predicate::NameContains(needle) if needle == "old"))
    }
}

#[async_trait]
impl PageRepositoryPort for GatedRepository {
    async fn fetch_window(&self, query: &PageQuery) -> Result<Vec<PageSummary>, StoreError> {
        if Self::is_gated(query) {
            self.started.notify_one();
            self.release.notified().await;
            return Ok(vec![
                PageSummary::new("old-1", "Old One", 5_000_000),
                PageSummary::new("old-2", "Old Two", 4_000_000),
            ]);
        }
        Ok(vec![PageSummary::new("new-1", "New One", 1_000_000)])
    }
}

fn setup() -> (Arc<PageDirectory>, Arc<GatedRepository>) {
    let repo = Arc::new(GatedRepository {
        started: Notify::new(),
        release: Notify::new(),
    });
    let fetch = FetchPageWindow::new(repo.clone(), 10).unwrap();
    (Arc::new(PageDirectory::new(fetch, PageFilter::all())), repo)
}

#[tokio::test]
async fn late_response_for_previous_filter_is_discarded() {
    let (dir, repo) = setup();

    let slow = {
        let dir = dir.clone();
        tokio::spawn(async move { dir.set_filter(PageFilter::all().with_search_term("old")).await })
    };
    repo.started.notified().await;

    let fresh = dir.set_filter(PageFilter::all().with_search_term("new")).await;
    assert_eq!(fresh.pages.len(), 1);
    assert_eq!(fresh.pages[0].page_id.inner(), "new-1");
    assert!(!fresh.loading);

    repo.release.notify_one();
    let late = slow.await.unwrap();

    // The late caller observes the current state, not its own rows.
    assert_eq!(late.pages, fresh.pages);

    let view = dir.view().await;
    assert_eq!(view.pages, fresh.pages);
    assert_eq!(view.error, None);
    assert_eq!(dir.filter().await.search_term(), "new");
}

#[tokio::test]
async fn late_response_after_refresh_is_discarded() {
    let (dir, repo) = setup();
    let old = PageFilter::all().with_search_term("old");

    let slow = {
        let dir = dir.clone();
        let old = old.clone();
        tokio::spawn(async move { dir.set_filter(old).await })
    };
    repo.started.notified().await;

    // Loading is visible while the gated fetch is in flight.
    assert!(dir.view().await.loading);

    let second = {
        let dir = dir.clone();
        tokio::spawn(async move { dir.refresh().await })
    };
    repo.started.notified().await;

    repo.release.notify_one();
    repo.release.notify_one();
    slow.await.unwrap();
    second.await.unwrap();

    // Only the refresh's ticket was applied.
    let view = dir.view().await;
    assert_eq!(view.pages.len(), 2);
    assert_eq!(view.error, None);
    assert!(!view.loading);
    assert_eq!(dir.filter().await, old);
}
