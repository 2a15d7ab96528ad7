use disallow_miner::archive::WaybackArchive;
use disallow_miner::config::HttpConfig;
use disallow_miner::crawler::{build_http_client, HttpTransport, TargetRunner};
use disallow_miner::state::YearOutcome;
use disallow_miner::OutputMode;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an availability answer for one queried year
async fn mount_capture(archive: &MockServer, year: i32, captured: &str) {
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("timestamp", format!("{}0101000000", year).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"archived_snapshots":{{"closest":{{"status":"200","available":true,"url":"http://web.archive.org/web/{0}/x","timestamp":"{0}"}}}}}}"#,
            captured
        )))
        .mount(archive)
        .await;
}

/// Mounts a replayed robots.txt for one capture timestamp
async fn mount_replay(archive: &MockServer, captured: &str, body: &str, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path_regex(format!(r"^/web/{}if_/.*/robots\.txt$", captured)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_hits)
        .mount(archive)
        .await;
}

fn runner_for(
    archive: &MockServer,
    mode: OutputMode,
    years: Vec<i32>,
) -> TargetRunner<HttpTransport, WaybackArchive> {
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let transport = HttpTransport::from_client(client.clone());
    let wayback = WaybackArchive::new(client, &archive.uri(), &archive.uri());
    TargetRunner::new(transport, wayback, mode).with_snapshot_years(years)
}

#[tokio::test]
async fn test_walk_accumulates_and_skips_same_snapshot() {
    let live = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /admin"))
        .mount(&live)
        .await;

    let archive = MockServer::start().await;
    mount_capture(&archive, 2021, "20200615000000").await;
    mount_capture(&archive, 2022, "20210615000000").await;
    mount_capture(&archive, 2023, "20210615000000").await;
    mount_replay(
        &archive,
        "20200615000000",
        "Disallow: /old-admin/\nDisallow: /admin",
        1,
    )
    .await;
    // 2023 resolves to the same capture as 2022 and must not be fetched again
    mount_replay(&archive, "20210615000000", "Disallow: /beta/", 1).await;

    let runner = runner_for(&archive, OutputMode::BarePath, vec![2021, 2022, 2023]);
    let report = runner.run(&live.uri()).await.unwrap();

    assert!(report.live_success);
    assert_eq!(report.endpoints, vec!["admin", "old-admin", "beta"]);

    let walk = report.walk.expect("walk should have run");
    assert_eq!(walk.fetched_count(), 2);
    assert_eq!(walk.skipped_years(), vec![2023]);
}

#[tokio::test]
async fn test_walk_runs_when_live_fetch_fails() {
    let live = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&live)
        .await;

    let archive = MockServer::start().await;
    mount_capture(&archive, 2024, "20230101093000").await;
    mount_replay(&archive, "20230101093000", "Disallow: /removed/*", 1).await;

    let runner = runner_for(&archive, OutputMode::FullUrl, vec![2024]);
    let report = runner.run(&live.uri()).await.unwrap();

    assert!(!report.live_success);
    assert_eq!(report.endpoints, vec![format!("{}/removed", live.uri())]);
}

#[tokio::test]
async fn test_lookup_failure_skips_only_that_year() {
    let live = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
        .mount(&live)
        .await;

    let archive = MockServer::start().await;
    mount_capture(&archive, 2021, "20200101000000").await;
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("timestamp", "20220101000000"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&archive)
        .await;
    mount_capture(&archive, 2023, "20220301000000").await;
    mount_replay(&archive, "20200101000000", "Disallow: /a", 1).await;
    mount_replay(&archive, "20220301000000", "Disallow: /b", 1).await;

    let runner = runner_for(&archive, OutputMode::BarePath, vec![2021, 2022, 2023]);
    let report = runner.run(&live.uri()).await.unwrap();

    assert_eq!(report.endpoints, vec!["a", "b"]);
    let walk = report.walk.unwrap();
    assert_eq!(walk.failed_lookups(), vec![2022]);
    assert!(matches!(
        walk.years[2],
        (2023, YearOutcome::Fetched { accepted: 1, .. })
    ));
}
