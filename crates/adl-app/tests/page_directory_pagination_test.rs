//! Pagination and reset behaviour of [`PageDirectory`].

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use adl_app::{FetchPageWindow, PageDirectory};
use adl_core::ports::{PageRepositoryPort, StoreError};
use adl_core::{CountryScope, PageFilter, PageQuery, PageSummary};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub PageRepo {}

    #[async_trait]
    impl PageRepositoryPort for PageRepo {
        async fn fetch_window(&self, query: &PageQuery) -> Result<Vec<PageSummary>, StoreError>;
    }
}

/// `count` pages with strictly decreasing reach.
fn ranked_pages(prefix: &str, count: usize) -> Vec<PageSummary> {
    (0..count)
        .map(|i| {
            PageSummary::new(
                format!("{prefix}-{i}"),
                format!("{prefix} page {i}"),
                2_000_000 - (i as u64) * 10,
            )
        })
        .collect()
}

fn window_of(pages: &[PageSummary], query: &PageQuery) -> Vec<PageSummary> {
    pages
        .iter()
        .skip(query.range.offset() as usize)
        .take(query.range.limit() as usize)
        .cloned()
        .collect()
}

fn directory(repo: impl PageRepositoryPort + 'static, page_size: u32) -> PageDirectory {
    let fetch = FetchPageWindow::new(Arc::new(repo), page_size).unwrap();
    PageDirectory::new(fetch, PageFilter::all())
}

/// Repository answering from a fixed script, recording every query.
struct ScriptedRepository {
    responses: Mutex<VecDeque<Result<Vec<PageSummary>, StoreError>>>,
    queries: Arc<Mutex<Vec<PageQuery>>>,
}

impl ScriptedRepository {
    fn new(
        responses: Vec<Result<Vec<PageSummary>, StoreError>>,
    ) -> (Self, Arc<Mutex<Vec<PageQuery>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                responses: Mutex::new(responses.into()),
                queries: queries.clone(),
            },
            queries,
        )
    }
}

#[async_trait]
impl PageRepositoryPort for ScriptedRepository {
    async fn fetch_window(&self, query: &PageQuery) -> Result<Vec<PageSummary>, StoreError> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch")
    }
}

#[tokio::test]
async fn full_window_then_short_window_exhausts_the_directory() {
    let all = ranked_pages("all", 140);
    let mut repo = MockPageRepo::new();
    repo.expect_fetch_window()
        .times(2)
        .returning(move |query| Ok(window_of(&all, query)));

    let dir = directory(repo, 100);

    let first = dir.set_filter(PageFilter::all()).await;
    assert_eq!(first.pages.len(), 100);
    assert!(first.has_more);
    assert!(!first.loading);

    let second = dir.load_more().await;
    assert_eq!(second.pages.len(), 140);
    assert!(!second.has_more);
    assert_eq!(second.error, None);

    // Exhausted: no third fetch (the mock allows exactly two).
    let third = dir.load_more().await;
    assert_eq!(third.pages.len(), 140);
}

#[tokio::test]
async fn accumulated_sequence_is_concatenation_without_duplicates_and_sorted() {
    let all = ranked_pages("p", 25);
    let expected = all.clone();
    let mut repo = MockPageRepo::new();
    repo.expect_fetch_window()
        .returning(move |query| Ok(window_of(&all, query)));

    let dir = directory(repo, 10);
    dir.refresh().await;
    dir.load_more().await;
    let view = dir.load_more().await;

    assert_eq!(view.pages, expected);
    assert!(!view.has_more);

    let ids: HashSet<_> = view.pages.iter().map(|p| p.page_id.clone()).collect();
    assert_eq!(ids.len(), view.pages.len());
    assert!(view
        .pages
        .windows(2)
        .all(|pair| pair[0].total_eu_reach >= pair[1].total_eu_reach));
}

#[tokio::test]
async fn filter_change_restarts_at_cursor_zero_and_recomputes_has_more() {
    let (repo, queries) = ScriptedRepository::new(vec![
        Ok(ranked_pages("all", 2)),
        Ok(ranked_pages("more", 2)),
        Ok(ranked_pages("de", 1)),
    ]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    let before = dir.load_more().await;
    assert_eq!(before.pages.len(), 4);
    assert!(before.has_more);

    let de = PageFilter::all().with_country(CountryScope::parse("DE"));
    let after = dir.set_filter(de.clone()).await;

    assert_eq!(after.pages, ranked_pages("de", 1));
    assert!(!after.has_more);

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[1].range.offset(), 2);
    assert_eq!(queries[2], PageQuery::build(&de, 0, 2));
}

#[tokio::test]
async fn search_change_triggers_the_same_reset() {
    let (repo, queries) = ScriptedRepository::new(vec![
        Ok(ranked_pages("all", 2)),
        Ok(ranked_pages("more", 2)),
        Ok(ranked_pages("nike", 2)),
    ]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    dir.load_more().await;
    let view = dir.set_filter(PageFilter::all().with_search_term("nike")).await;

    assert_eq!(view.pages, ranked_pages("nike", 2));
    assert!(view.has_more);
    assert_eq!(queries.lock().unwrap()[2].range.offset(), 0);
}

#[tokio::test]
async fn no_matching_rows_is_empty_without_error() {
    let mut repo = MockPageRepo::new();
    repo.expect_fetch_window()
        .withf(|query| query.predicates.len() == 2 && query.range.offset() == 0)
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let dir = directory(repo, 100);
    let view = dir
        .set_filter(PageFilter::new(CountryScope::parse("DE"), "nike"))
        .await;

    assert!(view.pages.is_empty());
    assert!(!view.has_more);
    assert_eq!(view.error, None);
    assert!(!view.loading);
}

#[tokio::test]
async fn failed_load_more_keeps_loaded_pages_and_retry_appends() {
    let (repo, queries) = ScriptedRepository::new(vec![
        Ok(ranked_pages("p", 2)),
        Err(StoreError::transport("request timed out")),
        Ok(ranked_pages("q", 1)),
    ]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    let failed = dir.load_more().await;

    assert_eq!(failed.pages.len(), 2);
    assert_eq!(
        failed.error.as_deref(),
        Some("store unreachable: request timed out")
    );
    assert!(!failed.loading);

    let retried = dir.retry().await;
    assert_eq!(retried.error, None);
    assert_eq!(retried.pages.len(), 3);
    assert!(!retried.has_more);

    let queries = queries.lock().unwrap();
    assert_eq!(queries[1].range, queries[2].range);
}

#[tokio::test]
async fn failed_filter_driven_fetch_clears_the_sequence() {
    let (repo, _) = ScriptedRepository::new(vec![
        Ok(ranked_pages("p", 2)),
        Err(StoreError::query(400, "invalid input value for country")),
    ]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    let view = dir
        .set_filter(PageFilter::all().with_country(CountryScope::parse("XX")))
        .await;

    assert!(view.pages.is_empty());
    assert!(!view.has_more);
    assert_eq!(
        view.error.as_deref(),
        Some("query rejected (400): invalid input value for country")
    );

    // Load more is not applicable after a failed first window.
    assert!(dir.load_more().await.pages.is_empty());
}

#[tokio::test]
async fn retry_without_error_is_a_noop() {
    let (repo, queries) = ScriptedRepository::new(vec![Ok(ranked_pages("p", 1))]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    dir.retry().await;

    assert_eq!(queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn exactly_full_last_window_costs_one_empty_fetch() {
    let all = ranked_pages("p", 4);
    let (repo, queries) = ScriptedRepository::new(vec![
        Ok(all[..2].to_vec()),
        Ok(all[2..].to_vec()),
        Ok(Vec::new()),
    ]);
    let dir = directory(repo, 2);

    dir.refresh().await;
    let full = dir.load_more().await;
    assert_eq!(full.pages, all);
    assert!(full.has_more, "a full window cannot prove exhaustion");

    let settled = dir.load_more().await;
    assert_eq!(settled.pages, all);
    assert!(!settled.has_more);
    assert_eq!(settled.error, None);

    dir.load_more().await;
    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[2].range.offset(), 4);
}
