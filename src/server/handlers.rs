//! Route handlers
//!
//! Handlers do no arithmetic of their own: they pick an evaluator, run it and
//! shape the outcome into a response.

use super::dto::{CalculationResponse, GreetQuery, HealthStatus};
use super::error::ApiError;
use super::ui::CALCULATOR_HTML;
use crate::calculator::{calculate, evaluate_equation, is_blank, OperationRequest};
use crate::error::CalcError;
use crate::greeting::create_greeting;
use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::Query,
    response::{Html, Json},
};
use serde_json::Value as JsonValue;
use tracing::debug;

pub async fn calculator_ui() -> Html<&'static str> {
    Html(CALCULATOR_HTML)
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

pub async fn greet(Query(params): Query<GreetQuery>) -> String {
    create_greeting(params.name.as_deref())
}

/// Evaluate either `{"equation": "..."}` or `{"operation": ..., "numbers": [...]}`
pub async fn calculate_handler(body: Bytes) -> Result<Json<CalculationResponse>, ApiError> {
    let payload = parse_payload(&body)?;

    let result = match payload.get("equation") {
        Some(JsonValue::String(equation)) => evaluate_equation(equation)?,
        Some(_) => {
            return Err(ApiError::BadRequest(
                "Equation must be a string".to_string(),
            ))
        }
        None => {
            let request: OperationRequest =
                serde_json::from_value(payload).map_err(|e| {
                    debug!("operation request did not decode: {}", e);
                    CalcError::InvalidExpression
                })?;
            calculate(&request)?
        }
    };

    // JSON has no representation for infinities or NaN
    if !result.is_finite() {
        return Err(ApiError::Internal(anyhow!(
            "calculation produced a non-finite result: {result}"
        )));
    }

    Ok(Json(CalculationResponse { result }))
}

/// Decode the body, treating absent or empty JSON as no data at all.
///
/// Both request shapes are mappings, so anything other than an object is
/// rejected before dispatch.
fn parse_payload(body: &[u8]) -> Result<JsonValue, ApiError> {
    let payload: JsonValue = serde_json::from_slice(body).map_err(|_| ApiError::NoJsonData)?;
    if is_blank(&payload) {
        return Err(ApiError::NoJsonData);
    }
    if !payload.is_object() {
        return Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    Ok(payload)
}
