/*!
 * Tests for error types and conversions
 */

use axum::http::StatusCode;
use axum::response::IntoResponse;
use transcheck::errors::{
    ApiError, AppError, CONSISTENCY_MISSING_FIELDS, PLACEHOLDER_MISSING_FIELDS,
};
use crate::common;

#[tokio::test]
async fn test_apiError_missingFields_shouldRenderBadRequest() {
    let response = ApiError::MissingFields(PLACEHOLDER_MISSING_FIELDS).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::extract_json(response.into_body()).await;
    assert_eq!(
        body,
        serde_json::json!({
            "error": "Missing 'source_text' or 'translated_text' key in request body"
        })
    );
}

#[test]
fn test_apiError_display_shouldBeTheMessage() {
    let error = ApiError::MissingFields(CONSISTENCY_MISSING_FIELDS);
    assert_eq!(error.to_string(), "Missing 'source_text' or 'translated_text'");
}

#[test]
fn test_appError_config_shouldDisplayCorrectly() {
    let error = AppError::Config("Port must be non-zero".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("Port must be non-zero"));
}

#[test]
fn test_appError_bind_shouldIncludeAddress() {
    let error = AppError::Bind {
        addr: "0.0.0.0:5000".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
    };
    let display = format!("{}", error);
    assert!(display.contains("0.0.0.0:5000"));
    assert!(display.contains("address in use"));
}

#[test]
fn test_appError_fromJsonError_shouldConvertToConfigError() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = json_error.into();

    assert!(matches!(app_error, AppError::Config(_)));
}
