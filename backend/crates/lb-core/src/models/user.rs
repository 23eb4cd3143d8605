//! User entity - the canonical stored account.

use crate::{UserIdentifier, UserPersonal};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// Username and email are each unique across all non-deleted users. The
/// database assigns `id` when the row is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Opaque hashed credential, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Minimal public view: id + username
    pub fn identifier(&self) -> UserIdentifier {
        UserIdentifier {
            id: self.id,
            username: self.username.clone(),
        }
    }

    /// Self view: id + username + email
    pub fn personal(&self) -> UserPersonal {
        UserPersonal {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Check if user is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
