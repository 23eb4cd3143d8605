use serde::{Deserialize, Serialize};

/// Public projection of a user: identity only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentifier {
    pub id: i64,
    pub username: String,
}
