use crate::{
    DEFAULT_BASE_URL, PlexHostClient, PlexHostError, RawResult, RequestOptions,
    tests::{api_path, create_test_client},
};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path},
};

#[test]
fn test_empty_api_key_is_invalid_argument() {
    assert!(matches!(
        PlexHostClient::new(""),
        Err(PlexHostError::InvalidArgument(_))
    ));
    assert!(matches!(
        PlexHostClient::builder().build(),
        Err(PlexHostError::InvalidArgument(_))
    ));
    assert!(matches!(
        PlexHostClient::builder()
            .api_key_from_env("PLEXHOST_TEST_SURELY_UNSET_VARIABLE")
            .build(),
        Err(PlexHostError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_invalid_key_never_reaches_the_panel() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = PlexHostClient::builder()
        .api_key("")
        .base_url(mock_server.uri())
        .build();
    assert!(matches!(result, Err(PlexHostError::InvalidArgument(_))));
}

#[test]
fn test_builder_defaults_and_overrides() {
    let client = PlexHostClient::new("ptlc_key").unwrap();
    assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);

    let client = PlexHostClient::builder()
        .api_key("ptlc_key")
        .base_url("http://localhost:8080/api/client")
        .timeout(Duration::from_secs(10))
        .user_agent("my-bot/1.0")
        .build()
        .unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/client/");

    assert!(matches!(
        PlexHostClient::builder()
            .api_key("ptlc_key")
            .base_url("ftp://nope")
            .build(),
        Err(PlexHostError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_get_servers_wraps_each_list_item() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "server", "attributes": {"identifier": "abc", "server_owner": true}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let servers = client.get_servers().await.unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].get_id(), "abc");
    assert!(servers[0].is_owner());
}

#[tokio::test]
async fn test_get_servers_preserves_order() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"attributes": {"identifier": "c", "name": "Creative"}},
                {"attributes": {"identifier": "a", "name": "Anarchy"}},
                {"attributes": {"identifier": "b", "name": "Bedwars"}}
            ],
            "meta": {"pagination": {"total": 3}}
        })))
        .mount(&mock_server)
        .await;

    let ids: Vec<String> = client
        .get_servers()
        .await
        .unwrap()
        .iter()
        .map(|s| s.get_id().to_string())
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_get_servers_empty_list() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"object": "list", "data": []})),
        )
        .mount(&mock_server)
        .await;

    assert!(client.get_servers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_server_single_resource() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("servers/1a7ce997")))
        .and(header("Authorization", "Bearer ptlc_testkey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server",
            "attributes": {
                "server_owner": false,
                "identifier": "1a7ce997",
                "internal_id": 12,
                "name": "Survival",
                "node": "de-fsn-01",
                "sftp_details": {"ip": "node1.plexhost.net", "port": 2022},
                "description": "Vanilla survival",
                "status": "installing",
                "is_suspended": false,
                "is_installing": true,
                "is_transferring": false
            },
            "meta": {"is_server_owner": false, "user_permissions": ["*"]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = client.get_server("1a7ce997").await.unwrap();
    assert_eq!(server.get_id(), "1a7ce997");
    assert_eq!(server.get_internal_id(), Some("12"));
    assert_eq!(server.get_name(), Some("Survival"));
    assert_eq!(server.get_description(), Some("Vanilla survival"));
    assert_eq!(server.get_node(), Some("de-fsn-01"));
    assert_eq!(server.get_sftp().unwrap().port, 2022);
    assert_eq!(server.get_status(), Some("installing"));
    assert!(!server.is_owner());
    assert!(!server.is_suspended());
    assert!(server.is_installing());
    assert!(!server.is_transferring());
}

#[tokio::test]
async fn test_get_server_empty_identifier() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.get_server("").await,
        Err(PlexHostError::MissingArgument(_))
    ));
}

#[tokio::test]
async fn test_get_server_rejects_identifier_outside_its_segment() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("servers/other")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server",
            "attributes": {"identifier": "other"}
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    for identifier in ["abc/../other", "..", "abc?x=1", "abc#frag"] {
        assert!(
            matches!(
                client.get_server(identifier).await,
                Err(PlexHostError::InvalidArgument(_))
            ),
            "{identifier} should be rejected"
        );
    }
    assert!(matches!(
        client.get_server_details("abc/../other").await,
        Err(PlexHostError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_get_server_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("servers/ghost")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{"code": "NotFoundHttpException", "status": "404", "detail": "missing"}]
        })))
        .mount(&mock_server)
        .await;

    let err = client.get_server("ghost").await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_get_server_details_keeps_envelope() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let body = serde_json::json!({
        "object": "server",
        "attributes": {"identifier": "abc"},
        "meta": {"created_at": "2021-03-01T10:00:00+00:00"}
    });
    Mock::given(method("GET"))
        .and(path(api_path("servers/abc")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    assert_eq!(client.get_server_details("abc").await.unwrap(), body);
}

#[tokio::test]
async fn test_verify_key_maps_unauthorized_to_forbidden() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.verify_key().await,
        Err(PlexHostError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_verify_key_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"object": "list", "data": []})),
        )
        .mount(&mock_server)
        .await;

    client.verify_key().await.unwrap();
}

#[tokio::test]
async fn test_raw_request_passthrough() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("account")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "user",
            "attributes": {"username": "owner"}
        })))
        .mount(&mock_server)
        .await;

    let result = client
        .request("account", "GET", RequestOptions::new())
        .await
        .unwrap();
    match result {
        RawResult::Json(body) => assert_eq!(body["attributes"]["username"], "owner"),
        RawResult::Response(_) => panic!("non-empty body should be returned as JSON"),
    }

    assert!(matches!(
        client.request("account", "HEAD", RequestOptions::new()).await,
        Err(PlexHostError::BadRequest(_))
    ));
}
