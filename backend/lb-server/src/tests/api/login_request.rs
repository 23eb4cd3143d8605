use crate::{ApiError, LoginRequest};

#[test]
fn test_login_request_requires_email() {
    let req = LoginRequest {
        email: " ".to_string(),
        password: "secret123".to_string(),
    };

    match req.validate() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_login_request_requires_password() {
    let req = LoginRequest {
        email: "a@x.com".to_string(),
        password: String::new(),
    };

    match req.validate() {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("password"))
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}
