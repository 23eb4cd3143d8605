use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Missing fields deserialize as empty and are reported by `validate`.
#[derive(Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub password_confirm: String,
}

impl std::fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl RegisterUserRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        if self.username.trim().is_empty() {
            return Err(Self::invalid("username", "username is required"));
        }

        if self.email.trim().is_empty() {
            return Err(Self::invalid("email", "email is required"));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(Self::invalid("email", "email is not a valid address"));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Self::invalid(
                "password",
                format!(
                    "password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            ));
        }

        if self.password != self.password_confirm {
            return Err(Self::invalid(
                "password_confirm",
                "password confirmation does not match",
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn invalid(field: &str, message: impl Into<String>) -> ApiError {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Shape check only: one '@', non-empty local part, dotted domain.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
