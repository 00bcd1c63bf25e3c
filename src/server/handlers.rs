/*!
 * HTTP handlers for the validation and utility endpoints.
 */

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::AppState;
use crate::errors::{ApiError, CONSISTENCY_MISSING_FIELDS, PLACEHOLDER_MISSING_FIELDS};
use crate::random::random_number;
use crate::validation::{ConsistencyResult, PlaceholderResult};

/// Body shared by the validation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub source_text: String,
    pub translated_text: String,
}

/// Response of `/api/random`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RandomResponse {
    pub number: u32,
}

impl ValidationRequest {
    /// Pull both required keys out of a JSON object
    ///
    /// Returns `None` when either key is absent or not a string. Extra keys are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            source_text: object.get("source_text")?.as_str()?.to_string(),
            translated_text: object.get("translated_text")?.as_str()?.to_string(),
        })
    }
}

/// Unwrap a validation body, mapping any rejection to the endpoint's fixed error
///
/// The body is read as a JSON object first, so arrays never bind positionally
/// and a repeated key keeps its last value.
fn require_fields(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
    message: &'static str,
) -> Result<ValidationRequest, ApiError> {
    let object = match payload {
        Ok(Json(object)) => object,
        Err(rejection) => {
            debug!("Rejected validation request: {}", rejection.body_text());
            return Err(ApiError::MissingFields(message));
        }
    };

    ValidationRequest::from_object(&object).ok_or_else(|| {
        debug!("Validation request lacks a required string key");
        ApiError::MissingFields(message)
    })
}

pub async fn random() -> Json<RandomResponse> {
    Json(RandomResponse {
        number: random_number(),
    })
}

/// POST `/api/validate-translation` and `/api/validate-placeholders`
pub async fn validate_placeholders(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<PlaceholderResult>, ApiError> {
    let request = require_fields(payload, PLACEHOLDER_MISSING_FIELDS)?;

    Ok(Json(state.validation.validate_placeholders(
        &request.source_text,
        &request.translated_text,
    )))
}

/// POST `/api/validate-consistency`
pub async fn validate_consistency(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ConsistencyResult>, ApiError> {
    let request = require_fields(payload, CONSISTENCY_MISSING_FIELDS)?;

    Ok(Json(state.validation.validate_consistency(
        &request.source_text,
        &request.translated_text,
    )))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
