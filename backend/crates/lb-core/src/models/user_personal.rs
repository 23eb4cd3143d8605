use serde::{Deserialize, Serialize};

/// Projection used for the "current user" self-view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPersonal {
    pub id: i64,
    pub username: String,
    pub email: String,
}
