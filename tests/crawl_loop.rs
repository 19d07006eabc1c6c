//! End-to-end crawl test against a local mock server
//!
//! Drives the full loop: seed file -> fetch -> extraction -> dedup ->
//! frontier growth -> output files, including a timing-out URL and a
//! rejected (404) URL mid-run.

use driftnet::config::Config;
use driftnet::crawler::execute;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

fn read_output_file(storage_dir: &Path, prefix: &str) -> String {
    let entry = std::fs::read_dir(storage_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().starts_with(prefix))
        .unwrap_or_else(|| panic!("no {}* file in {}", prefix, storage_dir.display()));
    std::fs::read_to_string(entry.path()).unwrap()
}

#[tokio::test]
async fn test_crawl_drains_frontier_and_reports_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Seed page: one email (twice), one social link (twice), one same-site
    // contact page (linked twice), an asset link, and a link that will time
    // out when followed.
    let about_us = format!(
        r#"<html><body>
            <a href="mailto:foo@example.org">contact: foo@example.org</a>
            <a href="{base}/team">Team</a>
            <a href="{base}/team">Team again</a>
            <a href="https://facebook.com/examplepage">fb</a>
            <a href="https://facebook.com/examplepage">fb again</a>
            <a href="{base}/img/logo.png">logo</a>
            <a href="{base}/dead-team">stale page</a>
        </body></html>"#,
    );

    // Second page: a new email, the seed email again, a link back to the
    // seed page (already seen), and a link that will 404.
    let team = format!(
        r#"<html><body>
            <p>staff: bar@example.org and foo@example.org</p>
            <a href="{base}/about-us">home</a>
            <a href="{base}/our-board">board</a>
        </body></html>"#,
    );

    Mock::given(method("GET"))
        .and(path("/about-us"))
        .respond_with(html_response(about_us))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team"))
        .respond_with(html_response(team))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dead-team"))
        .respond_with(html_response(String::new()).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/our-board"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let storage = tempfile::tempdir().unwrap();
    let mut seed_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(seed_file, "{base}/about-us").unwrap();
    seed_file.flush().unwrap();

    let mut config = Config::default();
    config.fetch.connect_timeout_ms = 1_000;
    config.fetch.read_timeout_ms = 1_000;
    config.output.storage_dir = storage.path().display().to_string();

    // The timing-out and 404 URLs must not abort the run
    execute(seed_file.path(), &config).await.unwrap();

    let results = read_output_file(storage.path(), "email_social_links_");
    let discovered = read_output_file(storage.path(), "newly_found_urls_");

    // Discovery log: each accepted frontier URL exactly once, in order
    let discovered_lines: Vec<&str> = discovered.lines().collect();
    assert_eq!(
        discovered_lines,
        vec![
            format!("{base}/team"),
            format!("{base}/dead-team"),
            format!("{base}/our-board"),
        ]
    );

    // One record per successfully processed page, none for failures
    let url_lines: Vec<&str> = results
        .lines()
        .filter(|l| l.starts_with("url: "))
        .collect();
    assert_eq!(
        url_lines,
        vec![
            format!("url: {base}/about-us"),
            format!("url: {base}/team"),
        ]
    );

    // Each email reported exactly once across the whole run
    assert_eq!(results.matches("foo@example.org").count(), 1);
    assert_eq!(results.matches("bar@example.org").count(), 1);

    // The social link reported exactly once despite appearing twice
    assert_eq!(
        results.matches("https://facebook.com/examplepage").count(),
        1
    );

    // The asset link never entered the frontier
    assert!(!discovered.contains("logo.png"));
}

#[tokio::test]
async fn test_seed_fetch_failure_terminates_cleanly() {
    let storage = tempfile::tempdir().unwrap();
    let mut seed_file = tempfile::NamedTempFile::new().unwrap();
    // Reserved TEST-NET address; nothing listens there
    writeln!(seed_file, "http://192.0.2.1/about").unwrap();
    seed_file.flush().unwrap();

    let mut config = Config::default();
    config.fetch.connect_timeout_ms = 300;
    config.fetch.read_timeout_ms = 300;
    config.output.storage_dir = storage.path().display().to_string();

    execute(seed_file.path(), &config).await.unwrap();

    let results = read_output_file(storage.path(), "email_social_links_");
    assert!(!results.contains("url: "));
}

#[tokio::test]
async fn test_missing_seed_file_is_fatal() {
    let storage = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.storage_dir = storage.path().display().to_string();

    let result = execute(Path::new("/nonexistent/seeds"), &config).await;
    assert!(result.is_err());
}
