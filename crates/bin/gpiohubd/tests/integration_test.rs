//! End-to-end smoke tests for the full gpiohubd stack.
//!
//! Each test wires the complete application (in-memory registry, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use gpiohub_adapter_http_axum::router;
use gpiohub_adapter_http_axum::state::AppState;
use gpiohub_adapter_memory::InMemoryDeviceRegistry;
use gpiohub_app::services::device_service::DeviceService;
use gpiohub_domain::kind::DeviceKind;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a fully-wired router holding the two starter devices.
async fn app() -> axum::Router {
    let service = DeviceService::new(InMemoryDeviceRegistry::new());
    service
        .seed_defaults()
        .await
        .expect("seeding an empty registry should succeed");
    router::build(AppState::new(service))
}

async fn send(app: &axum::Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    String::from_utf8(
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn telemetry(app: &axum::Router) -> serde_json::Value {
    let response = send(
        app,
        Request::builder()
            .uri("/get_state")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(
        &app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Dashboard (SSR) page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page_with_add_form() {
    let app = app().await;
    let resp = send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Add New Device"));
    assert!(body.contains("name=\"button_name\""));
    assert!(body.contains("Emergency OFF"));
    for kind in DeviceKind::ALL {
        assert!(body.contains(&format!("<option value=\"{kind}\">")));
    }
}

// ---------------------------------------------------------------------------
// Full scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_walk_through_add_toggle_emergency_off_and_delete() {
    let app = app().await;

    // Seed state.
    assert_eq!(
        telemetry(&app).await,
        serde_json::json!({
            "1": { "gpio": 5, "state": "OFF" },
            "2": { "gpio": 6, "state": "OFF" },
        })
    );

    // Add a cooler with no custom image.
    let resp = send(
        &app,
        post_form("/add", "button_name=Cooler&gpio=7&type=Cooler&image="),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");

    let state = telemetry(&app).await;
    assert_eq!(state["3"], serde_json::json!({ "gpio": "7", "state": "OFF" }));

    let page = body_string(
        send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await,
    )
    .await;
    assert!(page.contains("Cooler (Cooler, GPIO 7)"));
    assert!(page.contains("air-conditioner.png"));

    // Toggle it on.
    let resp = send(&app, post("/toggle/3")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(telemetry(&app).await["3"]["state"], "ON");

    // Everything off.
    let resp = send(&app, post("/emergency_off")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let state = telemetry(&app).await;
    for id in ["1", "2", "3"] {
        assert_eq!(state[id]["state"], "OFF");
    }

    // Remove the light.
    let resp = send(&app, post("/delete/2")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    assert_eq!(
        telemetry(&app).await,
        serde_json::json!({
            "1": { "gpio": 5, "state": "OFF" },
            "3": { "gpio": "7", "state": "OFF" },
        })
    );
}

#[tokio::test]
async fn should_treat_missing_ids_as_success() {
    let app = app().await;
    let before = telemetry(&app).await;

    for uri in ["/toggle/42", "/delete/42"] {
        let resp = send(&app, post(uri)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    assert_eq!(telemetry(&app).await, before);
}

#[tokio::test]
async fn should_keep_emergency_off_idempotent() {
    let app = app().await;
    send(&app, post("/toggle/1")).await;

    send(&app, post("/emergency_off")).await;
    let first = telemetry(&app).await;
    send(&app, post("/emergency_off")).await;

    assert_eq!(telemetry(&app).await, first);
}

#[tokio::test]
async fn should_reject_add_without_required_fields() {
    let app = app().await;
    let resp = send(&app, post_form("/add", "button_name=Fan&type=Fan")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains("gpio"));
    assert_eq!(telemetry(&app).await.as_object().unwrap().len(), 2);
}
