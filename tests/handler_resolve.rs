mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use shorturl::api::handlers::{resolve_handler, shorten_handler};
use shorturl::domain::repositories::MappingRepository;

fn app() -> (TestServer, std::sync::Arc<shorturl::infrastructure::persistence::InMemoryMappingRepository>) {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{num}", get(resolve_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_resolve_redirects_to_original_url() {
    let (server, repo) = app();

    repo.find_or_create("https://example.com/target", 1)
        .await
        .unwrap();

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_resolve_unknown_identifier() {
    let (server, _repo) = app();

    let response = server.get("/api/shorturl/999").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found");
}

#[tokio::test]
async fn test_resolve_non_numeric_identifier() {
    let (server, _repo) = app();

    let response = server.get("/api/shorturl/abc").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found");
}

// End-to-end: submit, resolve, reject an invalid URL, miss an unknown id.
#[tokio::test]
async fn test_submit_then_resolve_round_trip() {
    let (server, _repo) = app();

    let response = server
        .post("/api/shorturl")
        .add_header("host", "localhost:3000")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["short_url"], 1);
    assert_eq!(json["test_url"], "http://localhost:3000/api/shorturl/1");

    let response = server.get("/api/shorturl/1").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server
        .post("/api/shorturl")
        .add_header("host", "localhost:3000")
        .form(&[("url", "not a url")])
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["error"], "invalid url");

    let response = server.get("/api/shorturl/999").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "URL not found"
    );
}
