//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use site_census::config::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_EXCLUDED_EXTENSIONS,
};
use site_census::crawler::{crawl, SkipReason};
use site_census::output::{format_markdown_summary, RunMetadata};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration seeded at the given URL
fn create_test_config(seed_url: &str, max_depth: u32) -> Config {
    Config {
        crawler: CrawlerConfig {
            seed_url: seed_url.to_string(),
            max_depth,
            request_timeout: 5,
            connect_timeout: 2,
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig::default(),
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Mounts a three-page site: / links to /b and /c; /b links back to / and
/// off-host to `off_host_url`
async fn mount_three_page_site(server: &MockServer, off_host_url: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><title>Home</title></head><body>
            <h1>Welcome home</h1>
            <a href="/b">Page B</a>
            <a href="/c">Page C</a>
            </body></html>"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html(&format!(
            r#"<html><body>
            <p>Page about cats</p>
            <a href="/">Home</a>
            <a href="{}">Elsewhere</a>
            </body></html>"#,
            off_host_url
        )))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(html(
            r#"<html><body><h2>Gallery</h2>
            <img src="a.png" width="10" height="20">
            <img src="b.png" width="30" height="10">
            <img src="c.png">
            </body></html>"#,
        ))
        .mount(server)
        .await;
}

/// Starts a server on `localhost` that must never be contacted
async fn off_host_server() -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html("<body><p>off host</p></body>"))
        .expect(0)
        .mount(&server)
        .await;

    let port = server.address().port();
    let url = format!("http://localhost:{}/d", port);
    (server, url)
}

#[tokio::test]
async fn test_full_crawl_same_host() {
    let mock_server = MockServer::start().await;
    let (_off_host, off_host_url) = off_host_server().await;
    mount_three_page_site(&mock_server, &off_host_url).await;

    let base_url = mock_server.uri();
    let config = create_test_config(&base_url, 1);

    let report = crawl(&config).await.expect("Crawl should start");

    assert_eq!(report.host_filter, "127.0.0.1");
    assert_eq!(
        report.visited,
        vec![
            format!("{}/", base_url),
            format!("{}/b", base_url),
            format!("{}/c", base_url),
        ]
    );
    assert_eq!(report.pages.len(), 3);
    assert!(report.skipped.is_empty());
}

#[tokio::test]
async fn test_depth_zero_crawls_only_seed() {
    let mock_server = MockServer::start().await;
    let (_off_host, off_host_url) = off_host_server().await;
    mount_three_page_site(&mock_server, &off_host_url).await;

    let base_url = mock_server.uri();
    let report = crawl(&create_test_config(&base_url, 0))
        .await
        .expect("Crawl should start");

    assert_eq!(report.visited, vec![format!("{}/", base_url)]);
    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.pages[0].url_count, 2);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_statistics_end_to_end() {
    let mock_server = MockServer::start().await;
    let (_off_host, off_host_url) = off_host_server().await;
    mount_three_page_site(&mock_server, &off_host_url).await;

    let base_url = mock_server.uri();
    let report = crawl(&create_test_config(&base_url, 1))
        .await
        .expect("Crawl should start");

    let gallery = report
        .pages
        .iter()
        .find(|p| p.url.ends_with("/c"))
        .expect("Gallery page measured");
    assert_eq!(gallery.header_count, 1);
    assert_eq!(gallery.image_count, 2);
    assert_eq!(gallery.total_image_pixel_area, 500);
    assert_eq!(gallery.average_image_pixel_area, 250.0);
    assert_eq!(gallery.word_count, 1);

    let total = report.aggregate();
    assert_eq!(total.page_count, 3);
    assert_eq!(total.header_count, 2);
    assert_eq!(total.image_count, 2);
    assert_eq!(total.word_frequency["page"], 3);
    assert_eq!(total.word_frequency["home"], 2);
}

#[tokio::test]
async fn test_excluded_content_type_is_skipped() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<body><p>Docs</p><a href="/manual">Manual</a><a href="/about">About</a></body>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/manual"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.4".to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html("<body><p>About us</p></body>"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let report = crawl(&create_test_config(&base_url, 1))
        .await
        .expect("Crawl should start");

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].url, format!("{}/manual", base_url));
    assert!(matches!(report.skipped[0].reason, SkipReason::Fetch(_)));
}

#[tokio::test]
async fn test_server_error_skips_branch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<body><a href="/broken">Broken</a><a href="/ok">Ok</a></body>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html(r#"<body><p>Fine</p><a href="/broken">again</a></body>"#))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let report = crawl(&create_test_config(&base_url, 3))
        .await
        .expect("Crawl should start");

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].reason,
        SkipReason::Fetch("HTTP 500".to_string())
    );
}

#[tokio::test]
async fn test_excluded_alias_extension_is_skipped() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<body><p>Photos</p><a href="/pic">Picture</a></body>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pic"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"JFIF binary looking text".to_vec())
                .insert_header("content-type", "image/jpeg"),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let mut config = create_test_config(&base_url, 1);
    config.crawler.excluded_extensions = vec!["jpeg".to_string()];

    let report = crawl(&config).await.expect("Crawl should start");

    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].url, format!("{}/pic", base_url));
    assert!(matches!(report.skipped[0].reason, SkipReason::Fetch(_)));
}

#[tokio::test]
async fn test_slow_page_times_out_and_siblings_survive() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<body><p>Index</p><a href="/slow">Slow</a><a href="/fast">Fast</a></body>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<body><p>Too late</p></body>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(html("<body><p>Quick</p></body>"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let mut config = create_test_config(&base_url, 1);
    config.crawler.request_timeout = 1;

    let report = crawl(&config).await.expect("Crawl should start");

    assert_eq!(report.pages.len(), 2);
    assert!(report.pages.iter().any(|p| p.url.ends_with("/fast")));
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].url, format!("{}/slow", base_url));
    assert_eq!(
        report.skipped[0].reason,
        SkipReason::Fetch("request timed out".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_seed_gives_empty_report() {
    // Bind and drop a server so the port is closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let report = crawl(&create_test_config(&uri, 2))
        .await
        .expect("Crawl should start");

    assert!(report.pages.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(report.aggregate().is_empty());
}

#[tokio::test]
async fn test_markdown_summary_from_live_crawl() {
    let mock_server = MockServer::start().await;
    let (_off_host, off_host_url) = off_host_server().await;
    mount_three_page_site(&mock_server, &off_host_url).await;

    let config = create_test_config(&mock_server.uri(), 1);
    let started_at = chrono::Utc::now();
    let report = crawl(&config).await.expect("Crawl should start");
    let meta = RunMetadata {
        started_at,
        finished_at: chrono::Utc::now(),
        config_hash: "test".to_string(),
    };

    let markdown =
        format_markdown_summary(&report, &meta, &config.output).expect("Summary formats");

    assert!(markdown.contains("- **Pages Measured**: 3"));
    assert!(markdown.contains("| page | 3 |"));
}
