//! Exercises the HTTP client against a mock server.
//!
//! The client is blocking, so every call runs on a blocking task while the
//! mock server is driven by the async runtime.

use std::net::TcpListener;
use std::time::Duration;

use ga4gh_cts::Client;
use ga4gh_cts::client;
use ga4gh_cts::config::Config;
use ga4gh_cts::fixtures::Fixtures;
use ga4gh_cts::mapping::Endpoint;
use ga4gh_cts::mapping::UrlMapping;
use ga4gh_cts::protocol::search::Builder;
use ga4gh_cts::suite::Category;
use ga4gh_cts::suite::Suite;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

/// An error that can cross from a blocking task back to the test.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The result of a test.
type TestResult = Result<(), BoxError>;

/// Builds a client for a server mounted at `{uri}/ga4gh/`.
fn client(uri: &str, timeout: Option<Duration>) -> Result<Client, client::builder::Error> {
    let mut builder = Client::builder().base_url(format!("{uri}/ga4gh/"))?;

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.try_build()
}

#[tokio::test(flavor = "multi_thread")]
async fn it_fetches_a_record_by_id() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ga4gh/rnaquantifications/rq0"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rq0",
            "name": "sample",
            "featureSetIds": ["fs0"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let quantification = tokio::task::spawn_blocking(move || -> Result<_, BoxError> {
        Ok(client(&uri, None)?.rna_quantifications().get("rq0")?)
    })
    .await??;

    assert_eq!(quantification.id(), Some("rq0"));
    assert_eq!(quantification.feature_set_ids(), ["fs0"]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn it_posts_the_search_body() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ga4gh/variantannotations/search"))
        .and(body_json(json!({
            "variantAnnotationSetId": "vas0",
            "referenceName": "1",
            "start": 10177,
            "end": 11008,
            "pageSize": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variantAnnotations": [
                {"id": "va0", "variantId": "v0", "variantAnnotationSetId": "vas0"},
                {"id": "va1", "variantId": "v1", "variantAnnotationSetId": "vas0"}
            ],
            "nextPageToken": "2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = tokio::task::spawn_blocking(move || -> Result<_, BoxError> {
        let request = Builder::default()
            .variant_annotation_set_id("vas0")
            .reference_name("1")
            .start(10177)
            .end(11008)
            .page_size(2)
            .try_build()?;

        Ok(client(&uri, None)?.variant_annotations().search(&request)?)
    })
    .await??;

    assert_eq!(response.variant_annotations().len(), 2);
    assert_eq!(response.next_page_token(), Some("2"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn an_error_status_carries_the_exception() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ga4gh/variantannotationsets/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "no such object",
            "errorCode": 404
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || -> Result<client::Error, client::builder::Error> {
        let client = client(&uri, None)?;
        Ok(client.variant_annotation_sets().get("nope").unwrap_err())
    })
    .await??;

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "get_variant_annotation_set: server returned 404: no such object (error code 404)"
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn a_slow_server_times_out() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ga4gh/rnaquantifications/rq0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "rq0"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || -> Result<client::Error, client::builder::Error> {
        let client = client(&uri, Some(Duration::from_millis(200)))?;
        Ok(client.rna_quantifications().get("rq0").unwrap_err())
    })
    .await??;

    assert!(matches!(
        err,
        client::Error::Transport(Endpoint::GetRnaQuantification, _)
    ));
    assert_eq!(err.status(), None);

    Ok(())
}

#[test]
fn an_unreachable_server_is_a_transport_error() -> Result<(), Box<dyn std::error::Error>> {
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();

    let client = client(&format!("http://127.0.0.1:{port}"), None)?;
    let err = client.rna_quantifications().get("rq0").unwrap_err();

    assert!(matches!(
        err,
        client::Error::Transport(Endpoint::GetRnaQuantification, _)
    ));
    assert!(
        err.to_string()
            .starts_with("get_rna_quantification: transport error: ")
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn endpoint_overrides_change_the_path() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ga4gh/rnaquantification/rq0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "rq0"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let quantification = tokio::task::spawn_blocking(move || -> Result<_, BoxError> {
        let mapping =
            UrlMapping::with_overrides([("get_rna_quantification", "rnaquantification/{id}")])?;
        let client = Client::builder()
            .base_url(format!("{uri}/ga4gh/"))?
            .mapping(mapping)
            .try_build()?;

        Ok(client.rna_quantifications().get("rq0")?)
    })
    .await??;

    assert_eq!(quantification.id(), Some("rq0"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn the_rna_quantification_cases_pass_over_http() -> TestResult {
    let server = MockServer::start().await;

    let quantification = json!({
        "id": "rq0",
        "name": "sample",
        "rnaQuantificationSetId": "rqs0",
        "featureSetIds": ["fs0"]
    });

    Mock::given(method("POST"))
        .and(path("/datasets/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "datasets": [{"id": "ds0"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rnaquantificationsets/search"))
        .and(body_json(json!({"datasetId": "ds0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rnaQuantificationSets": [{"id": "rqs0", "datasetId": "ds0"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rnaquantifications/search"))
        .and(body_json(json!({"rnaQuantificationSetId": "rqs0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rnaQuantifications": [quantification.clone()],
            "nextPageToken": ""
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rnaquantifications/rq0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quantification))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rnaquantifications/this-id-does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "not found",
            "errorCode": 404
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (passed, failed) = tokio::task::spawn_blocking(move || {
        let mut config = Config::default();
        config.set_base_url(format!("{uri}/"));

        let client = config.client()?;
        let report = Suite::all()
            .filter_by_category(Category::RnaQuantification)
            .run(&client, &Fixtures::default());

        Ok::<_, ga4gh_cts::config::Error>((report.passed(), report.failed()))
    })
    .await??;

    assert_eq!(passed, 2);
    assert_eq!(failed, 0);

    Ok(())
}
