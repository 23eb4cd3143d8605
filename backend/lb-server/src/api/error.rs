//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::IdentityError;

use lb_auth::AuthError;

use std::num::ParseIntError;
use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field the error refers to, for validation errors and conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique value already in use (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Failures are logged where they originate
        log::debug!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, field, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert identity flow outcomes to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::Conflict { reason, field, .. } => ApiError::Conflict {
                message: reason,
                field: Some(field),
                location: ErrorLocation::from(Location::caller()),
            },
            IdentityError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            IdentityError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid email or password".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            // The flow already logged the cause; don't expose it to clients
            IdentityError::Internal { .. } => ApiError::Internal {
                message: "Internal server error".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => {
                log::error!("Auth error: {}", e);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: "Missing authorization header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                message: "Token expired".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Unauthorized {
                message: format!("Invalid token ({})", e.error_code()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert numeric id parse errors to API errors
impl From<ParseIntError> for ApiError {
    #[track_caller]
    fn from(e: ParseIntError) -> Self {
        ApiError::Validation {
            message: format!("Invalid id: {}", e),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
