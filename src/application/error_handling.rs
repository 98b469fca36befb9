// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → HTTP responses
// - Provides consistent error format for the pages
// - Never exposes internal implementation details
// - Logs server-side failures for debugging

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, FieldIssue};

/// Standard error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Form failed the request-shape checks (400)
    InvalidRequest,

    /// Entity construction rejected the record (400)
    Validation,

    /// Resource not found (404)
    NotFound,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorType::InvalidRequest | ErrorType::Validation => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details: None,
            issues: Vec::new(),
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::RequestRejected(issues) => Self {
                issues,
                ..Self::new(ErrorType::InvalidRequest, "Submitted form is invalid")
            },

            // Message is passed through verbatim
            AppError::Domain(domain_error) => Self {
                details: Some(domain_error.field().to_string()),
                ..Self::new(ErrorType::Validation, domain_error.to_string())
            },

            AppError::NotFound(resource) => Self::not_found(resource),

            other => {
                log::error!("Request failed: {}", other);
                Self {
                    details: Some("Check logs for details".to_string()),
                    ..Self::new(ErrorType::Internal, "Internal server error")
                }
            }
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound("Recipe"));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Recipe not found");
        assert_eq!(error.error_type.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_error_message_is_verbatim() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::validation(
            "chef",
            "chef must be a non-empty string",
        )));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "chef must be a non-empty string");
        assert_eq!(error.details.as_deref(), Some("chef"));
    }

    #[test]
    fn test_request_rejection_is_generic() {
        let error = ErrorResponse::from_app_error(AppError::RequestRejected(vec![
            FieldIssue::new("title", "Title is required."),
        ]));
        assert_eq!(error.error_type.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Submitted form is invalid");
        assert_eq!(error.issues.len(), 1);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = ErrorResponse::from_app_error(AppError::Other("pool exploded".to_string()));
        assert_eq!(error.error_type, ErrorType::Internal);
        assert!(!error.message.contains("pool"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Recipe");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Recipe not found"));
        assert!(!json.contains("issues"));
    }
}
