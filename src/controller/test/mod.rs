//! End-to-end tests running requests through the real router against an
//! in-memory SQLite database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{router::router, state::AppState};

mod health;

/// Builds the full application router over a fresh in-memory database.
async fn test_app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.unwrap();

    let app = router().with_state(AppState::new(db.clone()));

    (app, db)
}

/// Sends a request with an optional JSON body and returns the response
/// status and parsed body.
async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// A valid insert-shape body.
fn valid_user_body(auth0_id: &str) -> Value {
    json!({
        "auth0Id": auth0_id,
        "metadata": { "facilities": ["f1"], "defaultFacility": "f1" }
    })
}
