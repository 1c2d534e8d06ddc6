//! Integration tests for droplet operations.
//!
//! These tests drive the facade against a mock API server, verifying the
//! full request/response lifecycle: authentication headers, path selection,
//! body serialization, and response decoding.

use digitalocean_api::{
    ApiBaseUrl, ApiError, AuthToken, DigitalOceanClient, DigitalOceanConfig, DropletCreate,
    ImageRef,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn test_client(server: &MockServer) -> DigitalOceanClient {
    let config = DigitalOceanConfig::builder()
        .token(AuthToken::new("test-token").unwrap())
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    DigitalOceanClient::from_config(config)
}

#[tokio::test]
async fn test_fetch_droplet_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/droplets/3164444"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplet": {
                "id": 3164444,
                "name": "example.com",
                "status": "active",
                "size_slug": "512mb"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let droplet = client.droplet(3_164_444).await.unwrap();

    assert_eq!(droplet.id, Some(3_164_444));
    assert_eq!(droplet.name, Some("example.com".to_string()));
    assert_eq!(droplet.status, Some("active".to_string()));
}

#[tokio::test]
async fn test_create_droplet_then_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/droplets"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "test",
            "region": "nyc1",
            "size": "512mb",
            "image": 3445812
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplet": {"id": 25, "name": "test", "status": "new"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/droplets/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplet": {"id": 25, "name": "test", "status": "active"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let created = client
        .create_droplet(&DropletCreate {
            name: "test".to_string(),
            region: "nyc1".to_string(),
            size: "512mb".to_string(),
            image: ImageRef::Id(3_445_812),
            ..Default::default()
        })
        .await
        .unwrap();

    let id = created.id.expect("created droplet must have an id");
    assert_eq!(id, 25);

    let fetched = client.droplet(id).await.unwrap();
    assert_eq!(fetched.id, Some(25));
    assert_eq!(fetched.name, Some("test".to_string()));
}

#[tokio::test]
async fn test_create_droplet_with_invalid_payload_sends_nothing() {
    let server = MockServer::start().await;

    // Any request reaching the server fails the test.
    Mock::given(method("POST"))
        .and(path("/droplets"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let result = client
        .create_droplet(&DropletCreate {
            name: String::new(),
            region: "nyc1".to_string(),
            size: "512mb".to_string(),
            image: ImageRef::Id(3_445_812),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Rejected { status: None, .. })
    ));
}

#[tokio::test]
async fn test_delete_droplet_then_fetch_yields_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/droplets/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/droplets/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "The resource you were accessing could not be found."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let deleted = client.delete_droplet(42).await.unwrap();
    assert!(deleted);

    let result = client.droplet(42).await;
    assert!(matches!(
        result,
        Err(ApiError::NotFound { resource: "Droplet", ref id, .. }) if id == "42"
    ));
}

#[tokio::test]
async fn test_reboot_droplet_posts_action_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/droplets/42/actions"))
        .and(body_json(json!({"type": "reboot"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "action": {
                "id": 36804636,
                "status": "in-progress",
                "type": "reboot",
                "resource_id": 42,
                "resource_type": "droplet"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let action = client.reboot_droplet(42).await.unwrap();

    assert_eq!(action.id, Some(36_804_636));
    assert_eq!(action.action_type, Some("reboot".to_string()));
    assert!(!action.is_finished());
}

#[tokio::test]
async fn test_resize_droplet_includes_target_size() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/droplets/42/actions"))
        .and(body_json(json!({"type": "resize", "size": "1gb"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "action": {"id": 1, "status": "in-progress", "type": "resize"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let action = client.resize_droplet(42, "1gb").await.unwrap();

    assert_eq!(action.action_type, Some("resize".to_string()));
}

#[tokio::test]
async fn test_rename_droplet_rejects_empty_name_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.rename_droplet(42, "  ").await;

    assert!(matches!(
        result,
        Err(ApiError::Rejected { status: None, .. })
    ));
}

#[tokio::test]
async fn test_droplet_snapshots_decode_under_snapshots_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/droplets/42/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": [
                {"id": 7938206, "name": "nightly", "type": "snapshot"}
            ],
            "meta": {"total": 1}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let snapshots = client.droplet_snapshots(42, None).await.unwrap();

    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].id, Some(7_938_206));
    assert_eq!(snapshots.total(), Some(1));
}

#[tokio::test]
async fn test_droplet_kernels_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/droplets/42/kernels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kernels": [
                {"id": 61833229, "name": "Ubuntu 14.04 x64 vmlinuz", "version": "3.13.0-24"}
            ],
            "meta": {"total": 1}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let kernels = client.droplet_kernels(42, None).await.unwrap();

    assert_eq!(kernels.len(), 1);
    assert_eq!(kernels[0].version, Some("3.13.0-24".to_string()));
}

#[tokio::test]
async fn test_repeated_fetch_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/droplets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplet": {"id": 7, "name": "stable", "status": "active"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let first = client.droplet(7).await.unwrap();
    let second = client.droplet(7).await.unwrap();
    let third = client.droplet(7).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}
