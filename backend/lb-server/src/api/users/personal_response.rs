use lb_core::UserPersonal;

use serde::Serialize;

/// Current-user response
#[derive(Debug, Serialize)]
pub struct PersonalResponse {
    pub user: UserPersonal,
}
