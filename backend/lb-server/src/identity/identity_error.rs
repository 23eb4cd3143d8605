//! Outcomes of the identity flow that callers must handle.
//!
//! `Internal` keeps its cause for logging only; the HTTP layer never renders it.

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Conflict on {field}: {reason} {location}")]
    Conflict {
        reason: String,
        field: String,
        location: ErrorLocation,
    },

    #[error("User {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Internal identity failure: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// A uniqueness conflict on `field`, with a reason fit for end users.
    #[track_caller]
    pub fn conflict(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::Conflict {
            reason: format!("{} is already taken", field),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
