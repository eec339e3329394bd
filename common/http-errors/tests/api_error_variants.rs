use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common_http_errors::ApiError;

#[tokio::test]
async fn bad_request_variant() {
    let err = ApiError::bad_request("invalid_amount", "Invalid amount");
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers().get("X-Error-Code").unwrap(), "invalid_amount");
    let bytes = to_bytes(resp.into_body(), 16 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"error": "Invalid amount"}));
}

#[tokio::test]
async fn internal_variant() {
    let err = ApiError::internal("config_error", "Payment service configuration error");
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers().get("X-Error-Code").unwrap(), "config_error");
    let bytes = to_bytes(resp.into_body(), 16 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"error": "Payment service configuration error"})
    );
}
