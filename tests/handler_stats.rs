mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_success() {
    let (app, repo, _rx) = common::create_test_app();
    repo.insert("abc123", "https://example.com", 5);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats/abc123").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["short_code"], "abc123");
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["clicks"], 5);
    assert!(json["created_at"].is_string());
    assert!(json.get("id").is_none());
}

#[tokio::test]
async fn test_stats_not_found() {
    let (app, _repo, _rx) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats/nonexistent").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "URL not found" }));
}
