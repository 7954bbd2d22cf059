mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

fn server() -> (TestServer, common::TestContext) {
    let ctx = common::create_test_context();
    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();
    (server, ctx)
}

#[tokio::test]
async fn test_shorten_returns_code_and_short_url() {
    let (server, _ctx) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert!(!code.is_empty());
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_returns_same_code() {
    let (server, ctx) = server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_code"], second["short_code"]);
    assert_eq!(ctx.repository.len(), 1);
}

#[tokio::test]
async fn test_shorten_rejects_missing_or_empty_url() {
    let (server, ctx) = server();

    for body in [
        json!({}),
        json!({ "long_url": null }),
        json!({ "long_url": "" }),
        json!({ "long_url": "   " }),
    ] {
        let response = server.post("/api/shorten").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert_eq!(ctx.repository.calls(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_overlong_url() {
    let (server, ctx) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": format!("https://example.com/{}", "a".repeat(2100)) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["fields"], json!(["long_url"]));
    assert_eq!(ctx.repository.calls(), 0);
}

#[tokio::test]
async fn test_shorten_store_failure_hides_details() {
    let (server, ctx) = server();
    ctx.repository.take_down();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "An error occurred");
    assert_eq!(json["error"]["details"], json!({}));
}
