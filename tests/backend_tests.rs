//! Backend REST integration tests.
//!
//! wiremock stands in for the room backend:
//!
//! - `POST /v1/rooms/` - room creation
//! - `GET /v1` - account info (domain id)

use serde_json::json;
use session_bridge::auth::decode_payload;
use session_bridge::models::{
    ArchiveMode, DomainId, MediaMode, Role, RoomDescriptor, SessionOptions, TokenOptions,
};
use session_bridge::{BackendClient, BridgeError, Config, SessionBridge};
use tokio_test::assert_err;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn room_json() -> serde_json::Value {
    json!({
        "id": "d61cd7b2-a273-42b4-89bd-be763fd562c1",
        "name": "w2pp2cf4kltgFACPKXmX",
        "api_created": true,
        "privacy": "public",
        "url": "https://mydomain.daily.co/w2pp2cf4kltgFACPKXmX",
        "created_at": "2019-01-26T09:01:22.000Z",
        "config": {}
    })
}

fn config_for(server: &MockServer) -> Config {
    Config::new(API_KEY).with_base_url(format!("{}/v1", server.uri()))
}

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(&config_for(server)).expect("Should build client")
}

#[tokio::test]
async fn test_create_room_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_json(json!({
            "properties": { "start_audio_off": false, "start_video_off": false }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(1)
        .mount(&server)
        .await;

    let room = client_for(&server)
        .create_room(API_KEY, false)
        .await
        .expect("Should create room");

    assert_eq!(
        room,
        RoomDescriptor {
            id: "d61cd7b2-a273-42b4-89bd-be763fd562c1".to_string(),
            name: "w2pp2cf4kltgFACPKXmX".to_string(),
            url: "https://mydomain.daily.co/w2pp2cf4kltgFACPKXmX".to_string(),
        }
    );
}

#[tokio::test]
async fn test_create_room_forces_switchover() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .and(body_json(json!({
            "properties": {
                "start_audio_off": false,
                "start_video_off": false,
                "sfu_switchover": 0.5
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_room(API_KEY, true)
        .await
        .expect("Should create room");
}

#[tokio::test]
async fn test_create_room_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "authorization-error",
            "info": "Authorization header missing or invalid"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).create_room(API_KEY, false).await.unwrap_err();
    match err {
        BridgeError::RoomCreation(msg) => assert!(msg.contains("401"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_room_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server).create_room(API_KEY, false).await.unwrap_err();
    assert!(matches!(err, BridgeError::RoomCreation(_)));
}

#[tokio::test]
async fn test_create_room_non_200_success_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(room_json()))
        .mount(&server)
        .await;

    let result = client_for(&server).create_room(API_KEY, false).await;
    assert_err!(result);
}

#[tokio::test]
async fn test_create_room_transport_error() {
    let config = Config::new(API_KEY).with_base_url("http://127.0.0.1:1/v1");
    let client = BackendClient::new(&config).expect("Should build client");

    let err = client.create_room(API_KEY, false).await.unwrap_err();
    assert!(matches!(err, BridgeError::RoomCreation(_)));
}

#[tokio::test]
async fn test_get_domain_id_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_name": "mydomain",
            "domain_id": "7f1f5a9a-1c3e-4f7a-9d0b-2c1d5e6f7a8b",
            "config": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let domain_id = client_for(&server)
        .get_domain_id(API_KEY)
        .await
        .expect("Should resolve domain id");

    assert_eq!(domain_id, DomainId::new("7f1f5a9a-1c3e-4f7a-9d0b-2c1d5e6f7a8b"));
}

#[tokio::test]
async fn test_get_domain_id_missing_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain_name": "mydomain" })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_domain_id(API_KEY).await.unwrap_err();
    assert!(matches!(err, BridgeError::DomainResolution(_)));
}

#[tokio::test]
async fn test_get_domain_id_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).get_domain_id(API_KEY).await.unwrap_err();
    assert!(err.to_string().starts_with("failed to get domain ID"));
}

#[tokio::test]
async fn test_session_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain_id": "dom-1" })))
        .mount(&server)
        .await;

    let bridge = SessionBridge::new(config_for(&server)).expect("Should build bridge");

    let session = bridge
        .create_session(SessionOptions {
            media_mode: MediaMode::Relayed,
            archive_mode: ArchiveMode::Always,
        })
        .await
        .expect("Should create session");
    assert_eq!(session.session_id, "https://mydomain.daily.co/w2pp2cf4kltgFACPKXmX");
    assert_eq!(session.media_mode, MediaMode::Relayed);
    assert_eq!(session.archive_mode, ArchiveMode::Manual);

    let domain_id = bridge.resolve_domain_id().await.expect("Should resolve");
    let options = TokenOptions::for_domain(domain_id)
        .with_role(Role::Moderator)
        .with_data("username=alice&uuid=42");
    let token = bridge
        .generate_token(&session.session_id, &options)
        .expect("Should generate token");

    let claims = decode_payload(&token, API_KEY).expect("Should decode");
    assert_eq!(claims.r, "w2pp2cf4kltgFACPKXmX");
    assert_eq!(claims.d, "dom-1");
    assert!(claims.o);
    assert_eq!(claims.u.as_deref(), Some("alice"));
    assert_eq!(claims.ud.as_deref(), Some("42"));
    assert_eq!(claims.exp, claims.iat + 3600);
}

#[tokio::test]
async fn test_session_creation_failure_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let bridge = SessionBridge::new(config_for(&server)).expect("Should build bridge");
    let err = bridge
        .create_session(SessionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::RoomCreation(_)));
}

async fn mount_room_expecting(server: &MockServer, properties: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/v1/rooms/"))
        .and(body_json(json!({ "properties": properties })))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_default_session_does_not_force_switchover() {
    let server = MockServer::start().await;
    mount_room_expecting(
        &server,
        json!({ "start_audio_off": false, "start_video_off": false }),
    )
    .await;

    let bridge = SessionBridge::new(config_for(&server)).expect("Should build bridge");
    let session = bridge
        .create_session(SessionOptions::default())
        .await
        .expect("Should create session");

    assert_eq!(session.media_mode, MediaMode::Relayed);
}

#[tokio::test]
async fn test_routed_session_forces_switchover() {
    let server = MockServer::start().await;
    mount_room_expecting(
        &server,
        json!({ "start_audio_off": false, "start_video_off": false, "sfu_switchover": 0.5 }),
    )
    .await;

    let bridge = SessionBridge::new(config_for(&server)).expect("Should build bridge");
    let session = bridge
        .create_session(SessionOptions {
            media_mode: MediaMode::Routed,
            ..Default::default()
        })
        .await
        .expect("Should create session");

    assert_eq!(session.media_mode, MediaMode::Routed);
}
