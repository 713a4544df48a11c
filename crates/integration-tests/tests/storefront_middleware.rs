//! Integration tests for the storefront middleware stack.

use paradise_nursery_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::spawn().await;
    assert_eq!(ctx.page("/health").await, "ok");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let ctx = TestContext::spawn().await;
    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .send()
        .await
        .expect("Failed to send request");

    let id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .expect("ascii request id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let ctx = TestContext::spawn().await;
    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        resp.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(&b"trace-me-42"[..])
    );
}

#[tokio::test]
async fn test_security_headers() {
    let ctx = TestContext::spawn().await;
    let resp = ctx
        .client
        .get(ctx.url("/products"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers.get("x-content-type-options").map(|v| v.as_bytes()),
        Some(&b"nosniff"[..])
    );
    assert_eq!(
        headers.get("x-frame-options").map(|v| v.as_bytes()),
        Some(&b"DENY"[..])
    );
    let csp = headers
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .expect("content-security-policy header");
    assert!(csp.contains("https://images.unsplash.com"));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let ctx = TestContext::spawn().await;
    let resp = ctx
        .client
        .get(ctx.url("/static/css/main.css"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::OK);
}
