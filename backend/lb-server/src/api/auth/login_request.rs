use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        for (field, value) in [("email", &self.email), ("password", &self.password)] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation {
                    message: format!("{} is required", field),
                    field: Some(field.to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
