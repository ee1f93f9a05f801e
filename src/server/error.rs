//! Translation of failures into HTTP responses

use super::dto::ErrorResponse;
use crate::error::{format_error_code, CalcError, ErrorCode};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{debug, error};

/// Errors a request handler can return
#[derive(Error, Debug)]
pub enum ApiError {
    /// The evaluator rejected the input
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("No JSON data provided")]
    NoJsonData,

    #[error("{0}")]
    BadRequest(String),

    /// Anything outside the evaluator taxonomy; never shown to the client
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Calc(_) | ApiError::NoJsonData | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Calc(err) => {
                debug!(kind = ?err.kind(), "rejected calculation: {}", err);
                ErrorResponse {
                    error: err.to_string(),
                    code: Some(format_error_code(err.code())),
                }
            }
            ApiError::NoJsonData | ApiError::BadRequest(_) => {
                debug!("rejected request: {}", self);
                ErrorResponse {
                    error: self.to_string(),
                    code: None,
                }
            }
            ApiError::Internal(err) => {
                error!("Unexpected failure while handling request: {:#}", err);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    code: Some(format_error_code(ErrorCode::OTHER_INTERNAL_ERROR)),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
