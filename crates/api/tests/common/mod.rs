use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hermanos_api::config::ServerConfig;
use hermanos_api::{router, schema};
use hermanos_upstream::api::BreakingBadApi;

/// Build a test `ServerConfig` pointing at the given upstream base URL
/// (normally a wiremock server started by the test).
pub fn test_config(upstream_base_url: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        upstream_base_url,
    }
}

/// Build the full application router against a mock upstream.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery, CORS) that production uses.
pub fn build_test_app(upstream_base_url: String) -> Router {
    let config = test_config(upstream_base_url);
    let upstream = BreakingBadApi::new(config.upstream_base_url.clone());
    let schema = schema::build_schema(upstream);
    router::build_app(schema, &config)
}

/// POST a GraphQL query to `/` and return the raw response.
pub async fn graphql(app: Router, query: &str) -> Response {
    let body = serde_json::json!({ "query": query }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
