mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_redirect_to_long_url() {
    let ctx = common::create_test_context();
    ctx.repository.seed("https://example.com/target", "abc123").await;

    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_unknown_code_returns_404() {
    let ctx = common::create_test_context();
    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/zzz999").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_to_unsendable_url_returns_json_error() {
    let ctx = common::create_test_context();
    ctx.repository
        .seed("https://example.com/a\nSet-Cookie: x=1", "ctrl001")
        .await;

    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/ctrl001").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "An error occurred");
}

#[tokio::test]
async fn test_resolve_returns_json() {
    let ctx = common::create_test_context();
    ctx.repository.seed("https://example.com/target", "abc123").await;

    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/urls/abc123").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "abc123");
    assert_eq!(json["long_url"], "https://example.com/target");
}

#[tokio::test]
async fn test_resolve_unknown_code_returns_404() {
    let ctx = common::create_test_context();
    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server.get("/api/urls/nothing").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let ctx = common::create_test_context();
    let state = common::create_test_state(ctx.service.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "long_url": "https://example.com/a?x=1" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/api/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/a?x=1");
}
