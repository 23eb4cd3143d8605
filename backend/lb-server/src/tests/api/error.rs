use crate::{ApiError, IdentityError};

use lb_auth::AuthError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "password must be at least 8 characters".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_conflict_error_returns_409_with_field() {
    let error = ApiError::Conflict {
        message: "email is already taken".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Missing authorization header".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Internal server error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_identity_conflict_converts_to_conflict_with_field() {
    let api_error: ApiError = IdentityError::conflict("username").into();

    match api_error {
        ApiError::Conflict { message, field, .. } => {
            assert_eq!(message, "username is already taken");
            assert_eq!(field.as_deref(), Some("username"));
        }
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[test]
fn test_identity_not_found_converts_to_not_found() {
    let api_error: ApiError = IdentityError::not_found(42).into();

    match api_error {
        ApiError::NotFound { message, .. } => assert!(message.contains("42")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_identity_internal_hides_cause() {
    let api_error: ApiError = IdentityError::internal("pool timed out").into();

    match api_error {
        ApiError::Internal { message, .. } => assert!(!message.contains("pool")),
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_invalid_credentials_converts_to_unauthorized() {
    let api_error: ApiError = IdentityError::invalid_credentials().into();

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_missing_header_converts_to_unauthorized() {
    let api_error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_password_hash_failure_converts_to_internal() {
    let api_error: ApiError = AuthError::PasswordHash {
        message: "out of memory".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn test_parse_int_error_converts_to_validation_on_id() {
    let parse_error = "abc".parse::<i64>().unwrap_err();
    let api_error: ApiError = parse_error.into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("id")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}
