use async_trait::async_trait;
use disallow_miner::archive::WaybackArchive;
use disallow_miner::crawler::{
    process_targets, FetchResponse, HttpTransport, TargetRunner, Transport, TransportError,
};
use disallow_miner::config::HttpConfig;
use disallow_miner::output::LineWriter;
use disallow_miner::{OutputMode, TargetError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Transport answering from a fixed URL table; unknown URLs fail to connect
#[derive(Clone, Default)]
struct ScriptedTransport {
    responses: HashMap<String, (u16, String)>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some((status, body)) => Ok(FetchResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(TransportError::Connect {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// An archive that is never reached when the walk is disabled
fn unused_archive() -> WaybackArchive {
    WaybackArchive::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
    )
}

const ROBOTS: &str = "User-agent: *\nDisallow: /admin/\nDisallow: /\nDisallow: /view/\nDisallow: /view/*\nDisallow: /*/test\n";

#[tokio::test]
async fn test_https_success_never_tries_http() {
    let transport = ScriptedTransport::default().respond(
        "https://example.com/robots.txt",
        200,
        ROBOTS,
    );
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::BarePath);

    let report = runner.run("example.com").await.unwrap();

    assert!(report.live_success);
    assert_eq!(report.base_url, "https://example.com");
    assert_eq!(report.endpoints, vec!["admin", "view", "test"]);
    assert_eq!(transport.requested(), vec!["https://example.com/robots.txt"]);
}

#[tokio::test]
async fn test_https_failure_falls_back_to_http() {
    let transport = ScriptedTransport::default().respond(
        "http://example.com/robots.txt",
        200,
        "Disallow: /legacy/",
    );
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::FullUrl);

    let report = runner.run("example.com").await.unwrap();

    assert!(report.live_success);
    assert_eq!(report.base_url, "http://example.com");
    assert_eq!(report.endpoints, vec!["http://example.com/legacy"]);
    assert_eq!(
        transport.requested(),
        vec![
            "https://example.com/robots.txt",
            "http://example.com/robots.txt"
        ]
    );
}

#[tokio::test]
async fn test_https_error_status_falls_back_to_http() {
    let transport = ScriptedTransport::default()
        .respond("https://example.com/robots.txt", 403, "Disallow: /hidden")
        .respond("http://example.com/robots.txt", 200, "Disallow: /open");
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::BarePath);

    let report = runner.run("example.com").await.unwrap();

    // The 403 body never reaches the matcher
    assert_eq!(report.endpoints, vec!["open"]);
    assert_eq!(transport.requested().len(), 2);
}

#[tokio::test]
async fn test_both_schemes_fail() {
    let transport = ScriptedTransport::default();
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::BarePath);

    let report = runner.run("down.example").await.unwrap();

    assert!(!report.live_success);
    assert!(report.endpoints.is_empty());
    assert_eq!(report.base_url, "http://down.example");
    assert!(report.walk.is_none());
}

#[tokio::test]
async fn test_explicit_scheme_has_no_fallback() {
    let transport = ScriptedTransport::default();
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::BarePath);

    let report = runner.run("https://secure.example/").await.unwrap();

    assert!(!report.live_success);
    assert_eq!(report.base_url, "https://secure.example");
    assert_eq!(transport.requested(), vec!["https://secure.example/robots.txt"]);
}

#[tokio::test]
async fn test_format_error() {
    let transport = ScriptedTransport::default();
    let runner = TargetRunner::new(transport.clone(), unused_archive(), OutputMode::BarePath);

    let result = runner.run("localhost").await;

    assert_eq!(result, Err(TargetError::Format("localhost".to_string())));
    assert!(transport.requested().is_empty());
}

#[tokio::test]
async fn test_no_disallow_lines_emits_nothing() {
    let transport = ScriptedTransport::default().respond(
        "https://example.com/robots.txt",
        200,
        "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml\n",
    );
    let runner = TargetRunner::new(transport, unused_archive(), OutputMode::FullUrl);

    let report = runner.run("example.com").await.unwrap();

    assert!(report.live_success);
    assert!(report.endpoints.is_empty());
}

#[tokio::test]
async fn test_live_mock_server_full_urls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\r\nDisallow: /cgi-bin/\r\nDisallow: /private*\r\nDisallow: *\r\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(&HttpConfig::default()).unwrap();
    let runner = TargetRunner::new(transport, unused_archive(), OutputMode::FullUrl);
    let base = mock_server.uri();

    let report = runner.run(&format!("{}/", base)).await.unwrap();

    assert_eq!(
        report.endpoints,
        vec![format!("{}/cgi-bin", base), format!("{}/private", base)]
    );
}

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let transport = ScriptedTransport::default()
        .respond("https://one.example/robots.txt", 200, "Disallow: /first")
        .respond("https://two.example/robots.txt", 200, "Disallow: /second\nDisallow: /first")
        .respond("https://three.example/robots.txt", 200, "Disallow: /third");
    let runner = TargetRunner::new(transport, unused_archive(), OutputMode::BarePath);
    let targets = futures::stream::iter(
        ["one.example", "", "bad", "two.example", "   ", "three.example"]
            .into_iter()
            .map(String::from),
    );
    let mut sink = LineWriter::new(Vec::new());

    let stats = process_targets(&runner, targets, 3, &mut sink, false)
        .await
        .unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    // Dedup is per target, so `first` appears for both targets
    assert_eq!(output, "first\nsecond\nfirst\nthird\n");
    assert_eq!(stats.targets, 3);
    assert_eq!(stats.format_errors, 1);
    assert_eq!(stats.endpoints, 4);
}

#[tokio::test]
async fn test_batch_order_with_slow_first_target() {
    let slow = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Disallow: /slow")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&slow)
        .await;

    let fast = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /fast"))
        .mount(&fast)
        .await;

    let transport = HttpTransport::new(&HttpConfig::default()).unwrap();
    let runner = TargetRunner::new(transport, unused_archive(), OutputMode::BarePath);
    let targets = futures::stream::iter(vec![slow.uri(), fast.uri()]);
    let mut sink = LineWriter::new(Vec::new());

    process_targets(&runner, targets, 2, &mut sink, false)
        .await
        .unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "slow\nfast\n");
}
