#![allow(clippy::unwrap_used)]
// Integration tests for `CrudClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unicorn_api::{CrudClient, Error, TransportConfig, UnicornRecord};

// ── Helpers ─────────────────────────────────────────────────────────

const COLLECTION: &str = "/api/test-secret/unicorns";

async fn setup() -> (MockServer, CrudClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api/test-secret", server.uri())).unwrap();
    let client = CrudClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn record(id: &str, name: &str, flavour: &str) -> UnicornRecord {
    UnicornRecord {
        record_id: None,
        id: id.into(),
        name: name.into(),
        flavour: flavour.into(),
    }
}

// ── Construction ────────────────────────────────────────────────────

#[tokio::test]
async fn test_new_embeds_secret_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/s3cr3t/unicorns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}/", server.uri())).unwrap();
    let secret: secrecy::SecretString = "s3cr3t".to_string().into();
    let client = CrudClient::new(&endpoint, &secret, &TransportConfig::default()).unwrap();

    assert!(client.list_unicorns().await.unwrap().is_empty());
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_unicorns_keeps_backend_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "a1", "id": "1", "name": "Cassiopeia", "flavour": "red" },
            { "_id": "b2", "id": "2", "name": "Hippolyta", "flavour": "green" }
        ])))
        .mount(&server)
        .await;

    let unicorns = client.list_unicorns().await.unwrap();

    assert_eq!(unicorns.len(), 2);
    assert_eq!(unicorns[0].name, "Cassiopeia");
    assert_eq!(unicorns[0].record_id.as_deref(), Some("a1"));
    assert_eq!(unicorns[1].flavour, "green");
}

#[tokio::test]
async fn test_list_unicorns_rejects_non_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_unicorns().await;

    match result {
        Err(Error::UnexpectedStatus {
            status, expected, ..
        }) => {
            assert_eq!(status, 500);
            assert_eq!(expected, 200);
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_unicorns_bad_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_unicorns().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_unicorn_expects_201() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(body_json(json!({ "id": "3", "name": "Aria", "flavour": "blue" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "c3", "id": "3", "name": "Aria", "flavour": "blue"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_unicorn(&record("3", "Aria", "blue"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.record_id.as_deref(), Some("c3"));
}

#[tokio::test]
async fn test_create_unicorn_with_200_is_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client.create_unicorn(&record("3", "Aria", "blue")).await;
    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus {
            status: 200,
            expected: 201,
            ..
        })
    ));
}

#[tokio::test]
async fn test_create_unicorn_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let created = client.create_unicorn(&record("3", "Aria", "blue")).await.unwrap();
    assert!(created.is_none());
}

// ── Update / Delete ─────────────────────────────────────────────────

#[tokio::test]
async fn test_update_unicorn_addresses_record_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!("{COLLECTION}/a1")))
        .and(body_json(json!({ "id": "1", "name": "Cassie", "flavour": "green" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut updated = record("1", "Cassie", "green");
    updated.record_id = Some("a1".into());
    client.update_unicorn("a1", &updated).await.unwrap();
}

#[tokio::test]
async fn test_delete_unicorn() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/a1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_unicorn("a1").await.unwrap();
}

#[tokio::test]
async fn test_delete_unicorn_failure() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.delete_unicorn("gone").await.is_err());
}
