use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id, as a string)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The authenticated user's id.
    ///
    /// A well-signed token can still carry a subject that is not a user id;
    /// that is reported as an invalid claim.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub '{}' is not a numeric user id", self.sub),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
