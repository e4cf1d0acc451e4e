use super::*;

/// GET /health responds 200 with `{status: "ok"}`.
#[tokio::test]
async fn health_check_responds_ok() {
    let (app, _db) = test_app().await;

    let (status, body) = send(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
