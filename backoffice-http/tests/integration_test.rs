//! Integration tests for backoffice-http
//!
//! Each test stands up a wiremock server and asserts both halves of the
//! transport contract: the error returned to the caller and the side
//! effects (session, notifications, navigation) around it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backoffice_http::{ApiClient, ApiError, FormPayload, HttpConfig, RetryPolicy};
use backoffice_notify::{Notification, NotificationHub, NotificationKind, RecordingNavigator, Route};
use backoffice_session::SessionStore;

struct Harness {
    server: MockServer,
    api: ApiClient,
    session: SessionStore,
    navigator: Arc<RecordingNavigator>,
    toasts: broadcast::Receiver<Notification>,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let session = SessionStore::in_memory();
    let hub = NotificationHub::new();
    let navigator = Arc::new(RecordingNavigator::new());
    let toasts = hub.subscribe();
    let api = ApiClient::new(
        HttpConfig::new(server.uri()),
        session.clone(),
        hub,
        navigator.clone(),
    )
    .expect("client");

    Harness {
        server,
        api,
        session,
        navigator,
        toasts,
    }
}

fn drain(toasts: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut seen = Vec::new();
    while let Ok(notification) = toasts.try_recv() {
        seen.push(notification);
    }
    seen
}

#[tokio::test]
async fn test_bearer_header_reflects_session_state_at_send_time() {
    let mut h = harness().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&h.server)
        .await;

    h.api.get("/users/me").send().await.unwrap();
    h.session.set_credential("tok-123");
    h.api.get("/users/me").send().await.unwrap();

    let requests = h.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1]
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer tok-123")
    );
    assert!(drain(&mut h.toasts).is_empty());
}

#[tokio::test]
async fn test_unauthorized_tears_down_session_notifies_once_and_redirects() {
    let mut h = harness().await;
    h.session.set_credential("expired-tok");
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let result = h.api.get("/orders").send().await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(h.session.credential(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));

    let toasts = drain(&mut h.toasts);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::SessionExpired);
}

#[tokio::test]
async fn test_forbidden_notifies_without_touching_the_session() {
    let mut h = harness().await;
    h.session.set_credential("tok");
    Mock::given(method("DELETE"))
        .and(path("/users/u9"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&h.server)
        .await;

    let result = h.api.delete("/users/u9").send().await;

    assert!(matches!(result, Err(ApiError::Forbidden)));
    assert_eq!(h.session.credential(), Some("tok".to_string()));
    assert_eq!(h.navigator.last(), None);

    let toasts = drain(&mut h.toasts);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::AccessDenied);
}

#[tokio::test]
async fn test_payload_errors_carry_the_server_message_silently() {
    let mut h = harness().await;
    Mock::given(method("POST"))
        .and(path("/coupons"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({"message": "Coupon code already exists"})),
        )
        .mount(&h.server)
        .await;

    let result = h
        .api
        .post("/coupons")
        .json(&serde_json::json!({"code": "SUMMER"}))
        .send()
        .await;

    match result {
        Err(ApiError::Response { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Coupon code already exists");
        }
        other => panic!("expected Response error, got {other:?}"),
    }
    // The caller's form owns this failure; no toast, no redirect.
    assert!(drain(&mut h.toasts).is_empty());
    assert_eq!(h.navigator.last(), None);
}

#[tokio::test]
async fn test_retry_recovers_after_transient_server_errors() {
    let mut h = harness().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h
        .api
        .get("/orders")
        .send_with_retry(&RetryPolicy::immediate(3))
        .await
        .unwrap();

    assert!(response.is_success());
    // Recovered: the interim failures never became user-visible.
    assert!(drain(&mut h.toasts).is_empty());
}

#[tokio::test]
async fn test_retry_exhaustion_notifies_exactly_once() {
    let mut h = harness().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&h.server)
        .await;

    let result = h
        .api
        .get("/orders")
        .send_with_retry(&RetryPolicy::immediate(3))
        .await;

    assert!(matches!(result, Err(ApiError::Server { status: 503 })));
    let toasts = drain(&mut h.toasts);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::ServerError);
}

#[tokio::test]
async fn test_unauthorized_is_never_retried() {
    let mut h = harness().await;
    h.session.set_credential("tok");
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let result = h
        .api
        .get("/orders")
        .send_with_retry(&RetryPolicy::immediate(5))
        .await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(h.server.received_requests().await.unwrap().len(), 1);
    assert_eq!(drain(&mut h.toasts).len(), 1);
}

#[tokio::test]
async fn test_client_side_timeout_maps_to_timeout() {
    let mut h = harness().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&h.server)
        .await;

    let result = h
        .api
        .get("/slow")
        .timeout(Duration::from_millis(50))
        .send()
        .await;

    assert!(matches!(result, Err(ApiError::Timeout)));
    let toasts = drain(&mut h.toasts);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Timeout);
}

#[tokio::test]
async fn test_connection_failure_maps_to_network() {
    let session = SessionStore::in_memory();
    let hub = NotificationHub::new();
    let mut toasts = hub.subscribe();
    // Discard port; nothing listens there.
    let api = ApiClient::new(
        HttpConfig::new("http://127.0.0.1:9"),
        session,
        hub,
        Arc::new(RecordingNavigator::new()),
    )
    .expect("client");

    let result = api.get("/anything").send().await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    let seen = drain(&mut toasts);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Network);
}

#[tokio::test]
async fn test_quiet_requests_return_the_error_without_side_effects() {
    let mut h = harness().await;
    h.session.set_credential("tok");
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let result = h.api.post("/auth/logout").quiet().send().await;

    assert!(matches!(result, Err(ApiError::Server { status: 500 })));
    assert!(drain(&mut h.toasts).is_empty());
    assert_eq!(h.navigator.last(), None);
    // Quiet means no *side effects*; the session is untouched too.
    assert_eq!(h.session.credential(), Some("tok".to_string()));
}

#[tokio::test]
async fn test_multipart_bodies_repeat_array_style_keys() {
    let h = harness().await;
    Mock::given(method("PUT"))
        .and(path("/products/product/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "p1"})))
        .expect(1)
        .mount(&h.server)
        .await;

    let payload = FormPayload::new()
        .text("name", "Linen Shirt")
        .text_each("sizes[]", ["S", "M", "L"])
        .file("images[]", "front.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
        .file("images[]", "back.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFE]);

    h.api
        .put("/products/product/p1")
        .multipart(payload)
        .send()
        .await
        .unwrap();

    let request = &h.server.received_requests().await.unwrap()[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.matches(r#"name="sizes[]""#).count(), 3);
    assert_eq!(body.matches(r#"name="images[]""#).count(), 2);
    assert!(body.contains(r#"filename="front.jpg""#));
}

#[tokio::test]
async fn test_query_parameters_and_base_prefix_survive_the_trip() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/products/product"))
        .and(wiremock::matchers::query_param("page", "2"))
        .and(wiremock::matchers::query_param("search", "shampoo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&h.server)
        .await;

    h.api
        .get("/products/product")
        .query("page", "2")
        .query("search", "shampoo")
        .send()
        .await
        .unwrap();
}
