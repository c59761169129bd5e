use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use image_edit_service::config::ServiceConfig;
use image_edit_service::{routes, ServiceState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(webhook_url: String) -> axum::Router {
    let mut config = ServiceConfig::default();
    config.webhook.webhook_url = webhook_url;
    routes::create_router(Arc::new(ServiceState { config }))
}

async fn post_json(router: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/adkrity-text-heavy")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    let response = router.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, body)
}

#[tokio::test]
async fn forwards_reshaped_payload_with_embedded_images() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-1.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ABC".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product-2.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"DEF".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"LOGO".to_vec()))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(json!({
            "category": "cafe",
            "phone_number": "",
            "design_req": "bold colors",
            "logo_url": "data:image/png;base64,TE9HTw==",
            "product_images": [
                "data:image/png;base64,QUJD",
                "data:image/jpeg;base64,REVG"
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(format!("{}/webhook", server.uri()));
    let (status, body) = post_json(
        router,
        json!({
            "category": "cafe",
            "design_req": "bold colors",
            "logo_url": format!("{}/logo.png", server.uri()),
            "logo_mime": "image/png",
            "productImages": [
                { "url": format!("{}/product-1.png", server.uri()), "mime": "image/png" },
                { "url": format!("{}/product-2.jpg", server.uri()), "mime": "image/jpeg" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["response"], json!({ "ok": true }));
    assert_eq!(
        body["forwardedPayload"]["product_images"],
        json!([
            "data:image/png;base64,QUJD",
            "data:image/jpeg;base64,REVG"
        ])
    );
    // Optional text fields the caller omitted stay out of the payload.
    assert!(body["forwardedPayload"].get("website").is_none());
    assert_eq!(body["forwardedPayload"]["address"], "");
}

#[tokio::test]
async fn missing_logo_forwards_empty_string_and_relays_text_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(json!({
            "logo_url": "",
            "product_images": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(format!("{}/webhook", server.uri()));
    let (status, body) = post_json(router, json!({ "phone_number": "555-0100" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["response"], "accepted");
    assert_eq!(body["forwardedPayload"]["phone_number"], "555-0100");
}

#[tokio::test]
async fn webhook_error_body_is_relayed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "workflow failed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(format!("{}/webhook", server.uri()));
    let (status, body) = post_json(router, json!({})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "workflow failed");
}

#[tokio::test]
async fn unreachable_product_image_fails_the_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let router = router_for(format!("{}/webhook", server.uri()));
    let (status, body) = post_json(
        router,
        json!({
            "productImages": [
                { "url": "http://127.0.0.1:1/nope.png", "mime": "image/png" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error should be a string");
    assert!(message.contains("Failed to fetch image"));
}
