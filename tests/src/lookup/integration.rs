use std::time::Duration;

use macq_common::config::{self, ApiKey, Config, Verbosity};
use macq_common::network::mac::ValidationError;
use macq_core::lookup::{self, Lookup, PipelineError};
use macq_core::vendors::{ApiConfig, LookupError, MacAddressIoClient};

use crate::stub::StubApi;

fn config_for(stub: &StubApi) -> Config {
    Config {
        api_key: ApiKey::new("test-key"),
        api_url: stub.url.clone(),
        timeout: Duration::from_secs(5),
        verbosity: Verbosity::Quiet,
        reveal_secrets: false,
    }
}

fn client_for(cfg: &Config) -> MacAddressIoClient {
    MacAddressIoClient::with_config(cfg.api_key.clone(), ApiConfig::from(cfg))
        .expect("client should build")
}

/// A full colon-delimited address resolves to the stubbed vendor.
#[tokio::test]
async fn single_address_resolves_to_vendor() {
    let stub = StubApi::start(200, "Acme Corp").await.unwrap();
    let cfg = config_for(&stub);

    let results: Vec<Lookup> = lookup::run(&client_for(&cfg), &["AA:BB:CC:DD:EE:FF"])
        .await
        .expect("lookup should succeed");

    assert_eq!(results.len(), 1);
    assert_eq!(
        format!("{} {}", results[0].mac, results[0].vendor),
        "AA:BB:CC:DD:EE:FF Acme Corp"
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("apiKey=test-key"));
    assert!(requests[0].contains("output=vendor"));
}

/// Six undelimited characters pass validation; the 404 then aborts the run.
#[tokio::test]
async fn remote_404_is_reported() {
    let stub = StubApi::start(404, "").await.unwrap();
    let cfg = config_for(&stub);

    let err = lookup::run(&client_for(&cfg), &["AABBCC"])
        .await
        .unwrap_err();

    match &err {
        PipelineError::Lookup { mac, source } => {
            assert_eq!(mac, "AABBCC");
            assert!(matches!(source, LookupError::RemoteError { status: 404 }));
        }
        other => panic!("expected lookup failure, got {other:?}"),
    }
    assert!(format!("{:#}", anyhow::Error::from(err)).contains("404"));
    assert_eq!(stub.requests().len(), 1);
}

/// Two segments are rejected before any request is made.
#[tokio::test]
async fn short_address_never_reaches_the_network() {
    let stub = StubApi::start(200, "Acme Corp").await.unwrap();
    let cfg = config_for(&stub);

    let err = lookup::run(&client_for(&cfg), &["AA:BB"]).await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::TooFewOctets { .. })
    ));
    assert!(stub.requests().is_empty());
}

/// One bad address in a batch rejects all of them, valid ones included.
#[tokio::test]
async fn batch_is_rejected_as_a_whole() {
    let stub = StubApi::start(200, "Acme Corp").await.unwrap();
    let cfg = config_for(&stub);

    let inputs = ["AA:BB:CC:DD:EE:FF", "00-11-22", "AABB"];
    let err = lookup::run(&client_for(&cfg), &inputs).await.unwrap_err();

    assert_eq!(err.to_string(), "AABB needs to have at least 3 octets.");
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn empty_batch_makes_no_requests() {
    let stub = StubApi::start(200, "Acme Corp").await.unwrap();
    let cfg = config_for(&stub);

    let results = lookup::run::<&str>(&client_for(&cfg), &[]).await.unwrap();

    assert!(results.is_empty());
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn batch_results_follow_request_order() {
    let stub = StubApi::start(200, "Acme Corp").await.unwrap();
    let cfg = config_for(&stub);

    let inputs = ["FF:FF:FF", "aabb.ccdd.eeff", "00-11-22-33", "001122"];
    let results = lookup::run(&client_for(&cfg), &inputs).await.unwrap();

    let macs: Vec<&str> = results.iter().map(|r| r.mac.as_str()).collect();
    assert_eq!(macs, inputs);

    let requests = stub.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests[1].contains("search=aabb.ccdd.eeff"));
}

#[test]
fn missing_credential_is_deterministic() {
    let first = config::resolve_api_key_from(None, |_| None).unwrap_err();
    let second = config::resolve_api_key_from(None, |_| None).unwrap_err();

    assert_eq!(first, second);
    assert!(first.to_string().contains(config::API_KEY_ENV));
}
