//! End-to-end `browse` runs against a mocked REST store.

use adl_core::config::AppConfig;
use adl_core::PageFilter;
use adlibrary::bootstrap::build_directory;
use adlibrary::{render_json, run_browse, BrowseOptions};
use mockito::Matcher;

fn config_for(url: &str, page_size: u32) -> AppConfig {
    let mut config = AppConfig::empty();
    config.store.url = url.to_string();
    config.store.api_key = "anon".to_string();
    config.directory.page_size = page_size;
    config
}

fn row(id: u32, name: &str, reach: u64) -> serde_json::Value {
    serde_json::json!({
        "page_id": id,
        "name": name,
        "country": "DE",
        "total_eu_reach": reach,
        "page_top_creatives": [{
            "media_url": format!("https://cdn.example/{id}.jpg"),
            "media_type": "image",
            "ads": [{ "ad_snapshot_url": format!("https://snapshots.example/{id}") }]
        }],
        "ads": [{ "beneficiary": format!("{name} GmbH") }]
    })
}

fn options(windows: u32, high_reach_only: bool) -> BrowseOptions {
    BrowseOptions {
        country: "de".to_string(),
        search: String::new(),
        high_reach_only,
        windows,
    }
}

#[tokio::test]
async fn loads_requested_windows_until_exhausted() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/rest/v1/pages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "eq.DE".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .match_header("apikey", "anon")
        .match_header("authorization", "Bearer anon")
        .with_status(200)
        .with_body(serde_json::json!([row(1, "Alpha", 2_000_000), row(2, "Beta", 950_000)]).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", "/rest/v1/pages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(serde_json::json!([row(3, "Gamma", 10_000)]).to_string())
        .create_async()
        .await;

    let directory = build_directory(&config_for(&server.url(), 2), PageFilter::all()).unwrap();
    let view = run_browse(&directory, &options(5, true)).await;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(view.pages.len(), 3);
    assert!(!view.has_more);
    assert_eq!(view.error, None);

    let visible: Vec<&str> = view.visible_pages().map(|p| p.name.as_str()).collect();
    assert_eq!(visible, vec!["Alpha", "Beta"]);

    let json: serde_json::Value = serde_json::from_str(&render_json(&view).unwrap()).unwrap();
    assert_eq!(json[0]["beneficiary"], "Alpha GmbH");
    assert_eq!(json[0]["snapshot_url"], "https://snapshots.example/1");
    assert_eq!(json[1]["formatted_reach"], "950 000");
}

#[tokio::test]
async fn store_failure_is_reported_in_the_view() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/pages")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let directory = build_directory(&config_for(&server.url(), 10), PageFilter::all()).unwrap();
    let view = run_browse(&directory, &options(3, false)).await;

    assert!(view.pages.is_empty());
    assert!(!view.loading);
    let error = view.error.unwrap();
    assert!(error.starts_with("store unreachable"), "got: {error}");
}
