//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! pagination loop end-to-end.

use page_trail::config::Config;
use page_trail::crawler::{crawl_with_config, Crawler, NO_CONTENT_MESSAGE};
use page_trail::output::{format_csv_report, CsvReport, ReportWriter};
use page_trail::{ContentTag, StopReason};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no pause between pages
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.scraper.page_delay_ms = 0;
    config.fetcher.timeout_ms = 2_000;
    config
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_page(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_with_next_link_stops_at_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<h1>Title</h1><p>Hello</p><a href="/x">Next</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The next page must never be requested
    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(html_page("<p>unreachable</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let seed = format!("{}/", base_url);
    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&seed, 1).await;

    assert_eq!(outcome.rows.len(), 3);
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.stop_reason, StopReason::PageLimitReached);
    assert!(outcome.warnings.is_empty());

    assert_eq!(outcome.rows[0].tag, ContentTag::H1);
    assert_eq!(outcome.rows[0].content, "Title");
    assert_eq!(outcome.rows[1].tag, ContentTag::P);
    assert_eq!(outcome.rows[1].content, "Hello");
    assert_eq!(outcome.rows[2].tag, ContentTag::A);
    assert_eq!(outcome.rows[2].content, "Next");
    assert_eq!(outcome.rows[2].link, format!("{}/x", base_url));
    assert!(outcome.rows.iter().all(|r| r.source_url == seed));
}

#[tokio::test]
async fn test_follows_pagination_until_no_next_link() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/page1",
        r#"<h1>Page 1</h1><a href="/page2">Next</a>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/page2",
        r#"<h2>Page 2</h2><a href="/page3">next page &raquo;</a>"#,
    )
    .await;
    mount_page(&mock_server, "/page3", r#"<p>The end</p><a href="/page1">First</a>"#).await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/page1", base_url), 10).await;

    assert_eq!(outcome.pages_fetched, 3);
    assert_eq!(outcome.stop_reason, StopReason::NoNextLink);
    assert!(outcome.warnings.is_empty());

    let contents: Vec<_> = outcome.rows.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["Page 1", "Next", "Page 2", "next page »", "The end", "First"]
    );

    let sources: Vec<_> = outcome.rows.iter().map(|r| r.source_url.clone()).collect();
    assert_eq!(sources[0], format!("{}/page1", base_url));
    assert_eq!(sources[2], format!("{}/page2", base_url));
    assert_eq!(sources[4], format!("{}/page3", base_url));
}

#[tokio::test]
async fn test_page_limit_bounds_fetches_when_every_page_has_next() {
    let mock_server = MockServer::start().await;

    // The page links to itself, so without a limit the loop would never end
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(html_page(r#"<p>again</p><a href="/loop">Next</a>"#))
        .expect(4)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler
        .crawl(&format!("{}/loop", mock_server.uri()), 4)
        .await;

    assert_eq!(outcome.pages_fetched, 4);
    assert_eq!(outcome.stop_reason, StopReason::PageLimitReached);
    assert_eq!(outcome.rows.len(), 8);
}

#[tokio::test]
async fn test_next_link_resolved_against_seed_not_current_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/a/start",
        r#"<p>start</p><a href="/b/two">Next</a>"#,
    )
    .await;
    // Relative to the current page this would be /b/three
    mount_page(
        &mock_server,
        "/b/two",
        r#"<p>two</p><a href="three">Next</a>"#,
    )
    .await;
    mount_page(&mock_server, "/a/three", "<p>three via seed</p>").await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/a/start", base_url), 5).await;

    assert_eq!(outcome.pages_fetched, 3);
    let last = outcome.rows.last().expect("expected rows");
    assert_eq!(last.content, "three via seed");
    assert_eq!(last.source_url, format!("{}/a/three", base_url));

    // The anchor row itself is resolved against the page it was found on
    let anchor = outcome
        .rows
        .iter()
        .find(|r| r.tag == ContentTag::A && r.source_url.ends_with("/b/two"))
        .expect("expected anchor row on /b/two");
    assert_eq!(anchor.link, format!("{}/b/three", base_url));
}

#[tokio::test]
async fn test_page_without_content_elements() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<div>Just a div</div><span>and a span</span>").await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/", mock_server.uri()), 3).await;

    assert!(outcome.is_empty());
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.stop_reason, StopReason::NoNextLink);
    assert_eq!(outcome.summary_message(), NO_CONTENT_MESSAGE);
}

#[tokio::test]
async fn test_seed_timeout_produces_single_warning() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_page("<h1>Too late</h1>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.fetcher.timeout_ms = 200;

    let seed = format!("{}/slow", mock_server.uri());
    let crawler = Crawler::new(&config).expect("Failed to create crawler");
    let outcome = crawler.crawl(&seed, 5).await;

    assert!(outcome.is_empty());
    assert_eq!(outcome.pages_fetched, 0);
    assert_eq!(outcome.stop_reason, StopReason::FetchFailed);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].url, seed);
    assert!(outcome.warnings[0].message.contains("timed out"));
    assert_eq!(
        outcome.warnings[0].to_string(),
        format!("Error scraping page {}: request timed out after 200ms", seed)
    );
}

#[tokio::test]
async fn test_unreachable_seed_produces_warning() {
    // Nothing listens on port 1
    let seed = "http://127.0.0.1:1/";
    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(seed, 3).await;

    assert!(outcome.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].url, seed);
    assert_ne!(outcome.summary_message(), outcome.warnings[0].to_string());
}

#[tokio::test]
async fn test_failure_mid_crawl_keeps_earlier_rows() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/1",
        r#"<h1>First</h1><a href="/2">Next</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/2"))
        .respond_with(html_page("<h1>Second</h1>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.fetcher.timeout_ms = 200;

    let crawler = Crawler::new(&config).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/1", base_url), 5).await;

    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.rows[0].content, "First");
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.stop_reason, StopReason::FetchFailed);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].url, format!("{}/2", base_url));
}

#[tokio::test]
async fn test_invalid_next_link_below_limit_stops_with_warning() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<p>first</p><a href="http://[::1">Next</a>"#,
    )
    .await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/", base_url), 3).await;

    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.stop_reason, StopReason::InvalidNextLink);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].url, "http://[::1");
    assert_eq!(
        outcome.warnings[0].to_string(),
        "Error scraping page http://[::1: invalid IPv6 address"
    );
}

#[tokio::test]
async fn test_invalid_next_link_at_limit_is_not_resolved() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<p>x</p><a href="http://[::1">Next</a>"#,
    )
    .await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/", base_url), 1).await;

    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.stop_reason, StopReason::PageLimitReached);
    assert!(outcome.warnings.is_empty());
}

#[tokio::test]
async fn test_seed_without_trailing_slash_is_row_source() {
    let mock_server = MockServer::start().await;
    let seed = mock_server.uri();

    mount_page(&mock_server, "/", r#"<p>Hello <b>world</b></p><a href="/x">More</a>"#).await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&seed, 1).await;

    assert_eq!(outcome.rows.len(), 2);
    assert!(outcome.rows.iter().all(|r| r.source_url == seed));
    assert_eq!(outcome.rows[0].content, "Helloworld");
    assert_eq!(outcome.rows[1].link, format!("{}/x", seed));
}

#[tokio::test]
async fn test_error_status_body_is_still_scraped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("<html><body><h1>Not Found</h1><p>Try again</p></body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler
        .crawl(&format!("{}/gone", mock_server.uri()), 1)
        .await;

    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.rows[0].content, "Not Found");
}

#[tokio::test]
async fn test_user_agent_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(html_page("<p>welcome, browser</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = crawl_with_config(&create_test_config(), &format!("{}/", mock_server.uri()), 1)
        .await
        .expect("Failed to create crawler");

    assert_eq!(outcome.rows.len(), 1);
}

#[tokio::test]
async fn test_delay_between_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/1", r#"<a href="/2">Next</a>"#).await;
    mount_page(&mock_server, "/2", "<p>done</p>").await;

    let mut config = create_test_config();
    config.scraper.page_delay_ms = 300;

    let crawler = Crawler::new(&config).expect("Failed to create crawler");
    let start = Instant::now();
    let outcome = crawler.crawl(&format!("{}/1", base_url), 5).await;

    assert_eq!(outcome.pages_fetched, 2);
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_no_delay_after_last_allowed_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", r#"<a href="/2">Next</a>"#).await;

    let mut config = create_test_config();
    config.scraper.page_delay_ms = 5_000;

    let crawler = Crawler::new(&config).expect("Failed to create crawler");
    let start = Instant::now();
    let outcome = crawler.crawl(&format!("{}/", mock_server.uri()), 1).await;

    assert_eq!(outcome.stop_reason, StopReason::PageLimitReached);
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_crawl_to_csv_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<h1>Shop, "best" prices</h1><a href="/item">Item</a>"#,
    )
    .await;

    let crawler = Crawler::new(&create_test_config()).expect("Failed to create crawler");
    let outcome = crawler.crawl(&format!("{}/", base_url), 1).await;

    let csv = format_csv_report(&outcome.rows);
    let expected = format!(
        "URL,Tag,Content,Link\n\
         {base}/,h1,\"Shop, \"\"best\"\" prices\",\n\
         {base}/,a,Item,{base}/item\n",
        base = base_url
    );
    assert_eq!(csv, expected);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report_path = dir.path().join("web_scrape_report.csv");
    CsvReport
        .write_report(&outcome.rows, &report_path)
        .expect("Failed to write report");
    assert_eq!(
        std::fs::read_to_string(&report_path).expect("Failed to read report"),
        expected
    );
}
