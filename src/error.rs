//! Application error type and its JSON error envelope.
//!
//! Every non-2xx response from the API has the same shape:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "start_date and end_date parameters are required",
//!     "details": {}
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error code with a human message and structured details.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client sent missing or malformed parameters (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The upstream pageviews API failed for at least one day (502).
    #[error("{message}")]
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Headline follows check order (length before digits), then field name.
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let message = fields
            .iter()
            .flat_map(|(_, errs)| errs.iter())
            .filter(|e| e.message.is_some())
            .min_by_key(|e| check_rank(&e.code))
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request parameters".to_string());

        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));

        AppError::bad_request(message, details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

fn check_rank(code: &str) -> u8 {
    match code {
        "length" => 0,
        "regex" => 1,
        _ => 2,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Upstream { message, details } => {
                tracing::warn!(%message, %details, "Upstream failure surfaced to client");
                ("upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::upstream("x", json!({})).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("start_date is required", json!({}));
        assert_eq!(err.to_string(), "start_date is required");
    }

    #[test]
    fn test_from_validation_errors_uses_field_message() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("length");
        error.message = Some("Invalid format. Please use YYYYMMDD date format.".into());
        errors.add("start_date", error);

        let app_error = AppError::from(errors);
        match app_error {
            AppError::Validation { message, details } => {
                assert_eq!(message, "Invalid format. Please use YYYYMMDD date format.");
                assert!(details.get("start_date").is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_length_error_outranks_digit_error_across_fields() {
        let mut errors = ValidationErrors::new();

        let mut digits = ValidationError::new("regex");
        digits.message = Some("Invalid date format. Please use YYYYMMDD format.".into());
        errors.add("end_date", digits);

        let mut length = ValidationError::new("length");
        length.message = Some("Invalid format. Please use YYYYMMDD date format.".into());
        errors.add("start_date", length);

        assert_eq!(
            AppError::from(errors).to_string(),
            "Invalid format. Please use YYYYMMDD date format."
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::upstream("Upstream pageviews API failed", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
