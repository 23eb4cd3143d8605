use crate::UserStoreResult;

use lb_core::{NewUser, User, UserIdentifier, UserPersonal};

use async_trait::async_trait;

/// Persistence port for user accounts.
///
/// Every failure is already classified into a [`UserStoreError`](crate::UserStoreError)
/// variant; implementations never leak raw driver errors. Lookups only see
/// users that have not been soft-deleted.
///
/// Implementations hold no per-call state, so a single instance is shared
/// behind an `Arc` by all callers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Identity projection of the user with `id`.
    async fn find_identifier_by_id(&self, id: i64) -> UserStoreResult<UserIdentifier>;

    /// Self-view projection of the user with `id`.
    async fn find_personal_by_id(&self, id: i64) -> UserStoreResult<UserPersonal>;

    /// Full user, including the hashed credential, by email.
    async fn find_by_email(&self, email: &str) -> UserStoreResult<User>;

    /// Insert `user` and return it with id and timestamps populated.
    ///
    /// Uniqueness of username and email is left to the database, so
    /// concurrent creates with the same values yield exactly one success.
    async fn create(&self, user: NewUser) -> UserStoreResult<User>;
}
