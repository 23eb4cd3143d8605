use lb_core::UserIdentifier;

use serde::Serialize;

/// Public user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserIdentifier,
}
