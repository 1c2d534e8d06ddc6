//! Integration tests for domains, DNS records, SSH keys, images, regions,
//! and sizes.

use digitalocean_api::{
    ApiBaseUrl, ApiError, AuthToken, DigitalOceanClient, DigitalOceanConfig, DomainCreate,
    DomainRecordCreate, KeyRef, SshKeyCreate,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> DigitalOceanClient {
    let config = DigitalOceanConfig::builder()
        .token(AuthToken::new("test-token").unwrap())
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    DigitalOceanClient::from_config(config)
}

// ============================================================================
// Domains
// ============================================================================

#[tokio::test]
async fn test_create_domain_and_fetch_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/domains"))
        .and(body_json(json!({"name": "example.com", "ip_address": "1.2.3.4"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "domain": {"name": "example.com", "ttl": 1800}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain": {"name": "example.com", "ttl": 1800, "zone_file": "$ORIGIN example.com."}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let created = client
        .create_domain(&DomainCreate {
            name: "example.com".to_string(),
            ip_address: "1.2.3.4".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.name, Some("example.com".to_string()));

    let fetched = client.domain("example.com").await.unwrap();
    assert_eq!(fetched.ttl, Some(1800));
    assert!(fetched.zone_file.unwrap().contains("example.com"));
}

#[tokio::test]
async fn test_delete_domain_returns_success_flag() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.delete_domain("example.com").await.unwrap());
}

// ============================================================================
// Domain records
// ============================================================================

#[tokio::test]
async fn test_domain_record_crud_routes_through_parent_domain() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/domains/example.com/records"))
        .and(body_json(json!({"type": "A", "name": "www", "data": "1.2.3.4"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "domain_record": {"id": 16, "type": "A", "name": "www", "data": "1.2.3.4"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records/16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_record": {"id": 16, "type": "A", "name": "www", "data": "1.2.3.4"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/domains/example.com/records/16"))
        .and(body_json(json!({"type": "A", "name": "blog", "data": "1.2.3.4"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_record": {"id": 16, "type": "A", "name": "blog", "data": "1.2.3.4"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/domains/example.com/records/16"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let created = client
        .create_domain_record(
            "example.com",
            &DomainRecordCreate {
                record_type: "A".to_string(),
                name: Some("www".to_string()),
                data: Some("1.2.3.4".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, Some(16));

    let fetched = client.domain_record("example.com", 16).await.unwrap();
    assert_eq!(fetched.name, Some("www".to_string()));

    let updated = client
        .update_domain_record(
            "example.com",
            16,
            &DomainRecordCreate {
                record_type: "A".to_string(),
                name: Some("blog".to_string()),
                data: Some("1.2.3.4".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, Some("blog".to_string()));

    assert!(client.delete_domain_record("example.com", 16).await.unwrap());
}

#[tokio::test]
async fn test_domain_records_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains/example.com/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_records": [
                {"id": 1, "type": "A", "name": "@", "data": "1.2.3.4"},
                {"id": 2, "type": "CNAME", "name": "www", "data": "@"}
            ],
            "meta": {"total": 2}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let records = client.domain_records("example.com", None).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].record_type, Some("CNAME".to_string()));
}

#[tokio::test]
async fn test_domain_records_walker_rejects_empty_domain() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let result = client.domain_records_walker("");
    assert!(matches!(result, Err(ApiError::Rejected { status: None, .. })));
}

// ============================================================================
// SSH keys
// ============================================================================

#[tokio::test]
async fn test_ssh_key_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/account/keys"))
        .and(body_json(json!({
            "name": "deploy",
            "public_key": "ssh-rsa AAAA example"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ssh_key": {"id": 512190, "name": "deploy", "fingerprint": "3b:16:bf"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/account/keys/512190"))
        .and(body_json(json!({"name": "deploy-renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_key": {"id": 512190, "name": "deploy-renamed"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/account/keys/512190"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let created = client
        .create_ssh_key(&SshKeyCreate {
            name: "deploy".to_string(),
            public_key: "ssh-rsa AAAA example".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(512_190));

    let renamed = client.update_ssh_key(512_190_u64, "deploy-renamed").await.unwrap();
    assert_eq!(renamed.name, Some("deploy-renamed".to_string()));

    assert!(client.delete_ssh_key(512_190_u64).await.unwrap());
}

#[tokio::test]
async fn test_ssh_key_fetch_by_fingerprint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/keys/3b:16:bf:e4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_key": {"id": 512190, "fingerprint": "3b:16:bf:e4", "name": "deploy"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let key = client
        .ssh_key(KeyRef::Fingerprint("3b:16:bf:e4".to_string()))
        .await
        .unwrap();

    assert_eq!(key.id, Some(512_190));
}

// ============================================================================
// Images
// ============================================================================

#[tokio::test]
async fn test_image_fetch_by_id_and_by_slug_share_one_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/6918990"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": {"id": 6918990, "slug": "ubuntu-14-04-x64", "distribution": "Ubuntu"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/ubuntu-14-04-x64"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": {"id": 6918990, "slug": "ubuntu-14-04-x64", "distribution": "Ubuntu"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let by_id = client.image(6_918_990_u64).await.unwrap();
    let by_slug = client.image("ubuntu-14-04-x64").await.unwrap();

    assert_eq!(by_id.id, by_slug.id);
    assert_eq!(by_id.slug, by_slug.slug);
}

#[tokio::test]
async fn test_transfer_image_posts_to_image_actions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images/7938269/actions"))
        .and(body_json(json!({"type": "transfer", "region": "sfo1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "action": {"id": 23, "status": "in-progress", "type": "transfer"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let action = client.transfer_image(7_938_269, "sfo1").await.unwrap();

    assert_eq!(action.action_type, Some("transfer".to_string()));
}

#[tokio::test]
async fn test_update_and_delete_image() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/images/7938269"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": {"id": 7938269, "name": "renamed"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/images/7938269"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let renamed = client.update_image(7_938_269, "renamed").await.unwrap();
    assert_eq!(renamed.name, Some("renamed".to_string()));

    assert!(client.delete_image(7_938_269).await.unwrap());
}

// ============================================================================
// Regions, sizes, and actions
// ============================================================================

#[tokio::test]
async fn test_regions_and_sizes_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "regions": [
                {"slug": "nyc1", "name": "New York 1", "available": true},
                {"slug": "sfo1", "name": "San Francisco 1", "available": true}
            ],
            "meta": {"total": 2}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sizes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sizes": [
                {"slug": "512mb", "memory": 512, "vcpus": 1},
                {"slug": "1gb", "memory": 1024, "vcpus": 1}
            ],
            "meta": {"total": 2}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let regions = client.regions(None).await.unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].slug, Some("nyc1".to_string()));

    let sizes = client.sizes(None).await.unwrap();
    assert_eq!(sizes.len(), 2);
    assert_eq!(sizes[1].memory, Some(1024));
}

#[tokio::test]
async fn test_action_progress_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/actions/36804636"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": {
                "id": 36804636,
                "status": "completed",
                "type": "reboot",
                "resource_id": 42,
                "resource_type": "droplet"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let action = client.action(36_804_636).await.unwrap();

    assert!(action.is_finished());
    assert_eq!(action.resource_id, Some(42));
}
