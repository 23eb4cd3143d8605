//! Registration and identity operations over a [`UserStore`].
//!
//! The flow decides how each store outcome is presented to callers; it never
//! reclassifies a store error into a different kind.

use crate::{IdentityError, IdentityResult};

use lb_auth::CredentialHasher;
use lb_core::{NewUser, User, UserIdentifier, UserPersonal};
use lb_db::{UserStore, UserStoreError};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::OnceCell;

/// Secret behind the credential that unknown-email logins are checked against.
const DUMMY_PASSWORD: &str = "leaderboard-login-timing-placeholder";

#[derive(Clone)]
pub struct IdentityFlow {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    /// Hashed once with the configured hasher, so unknown-email logins
    /// verify at the same cost as real ones.
    dummy_credential: Arc<OnceCell<String>>,
}

impl IdentityFlow {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        // Retried lazily on first use if the hasher is not ready yet
        let dummy = hasher
            .hash(DUMMY_PASSWORD)
            .map_err(|e| warn!("Pre-computing login placeholder failed: {}", e))
            .ok();

        Self {
            store,
            hasher,
            dummy_credential: Arc::new(OnceCell::new_with(dummy)),
        }
    }

    /// Create an account and return its public identity.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> IdentityResult<UserIdentifier> {
        let credential = self.hash_password(password).await?;

        match self
            .store
            .create(NewUser::new(username, email, credential))
            .await
        {
            Ok(user) => {
                info!("Registered user {} ({})", user.id, user.username);
                Ok(user.identifier())
            }
            Err(UserStoreError::Uniqueness { field, .. }) => {
                warn!("Registration rejected: {} is already taken", field);
                Err(IdentityError::conflict(field))
            }
            Err(e) => {
                error!("Registration failed [{}]: {}", e.kind(), e);
                Err(IdentityError::internal(e.to_string()))
            }
        }
    }

    /// Public identity of the user with `id`.
    pub async fn user(&self, id: i64) -> IdentityResult<UserIdentifier> {
        match self.store.find_identifier_by_id(id).await {
            Ok(identifier) => Ok(identifier),
            Err(UserStoreError::NotFound { .. }) => Err(IdentityError::not_found(id)),
            Err(e) => {
                error!("Loading user {} failed [{}]: {}", id, e.kind(), e);
                Err(IdentityError::internal(e.to_string()))
            }
        }
    }

    /// Self view of the authenticated user.
    ///
    /// The caller already proved who they are, so a missing identity or a
    /// missing row is a server-side inconsistency and reported as `Internal`.
    pub async fn me(&self, user_id: Option<i64>) -> IdentityResult<UserPersonal> {
        let id = user_id.ok_or_else(|| {
            error!("No authenticated user id available");
            IdentityError::internal("no authenticated user id")
        })?;

        self.store.find_personal_by_id(id).await.map_err(|e| {
            error!("Loading current user {} failed [{}]: {}", id, e.kind(), e);
            IdentityError::internal(e.to_string())
        })
    }

    /// Check an email/password pair and return the matching user.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> IdentityResult<User> {
        let user = match self.store.find_by_email(email).await {
            Ok(user) => user,
            Err(UserStoreError::NotFound { .. }) => {
                debug!("Login for unknown email");
                let dummy = self.dummy_credential().await?;
                self.verify_password(password, dummy).await?;
                return Err(IdentityError::invalid_credentials());
            }
            Err(e) => {
                error!("Login lookup failed [{}]: {}", e.kind(), e);
                return Err(IdentityError::internal(e.to_string()));
            }
        };

        if !self.verify_password(password, &user.password).await? {
            debug!("Login with wrong password for user {}", user.id);
            return Err(IdentityError::invalid_credentials());
        }

        debug!("User {} logged in", user.id);
        Ok(user)
    }

    async fn dummy_credential(&self) -> IdentityResult<&str> {
        self.dummy_credential
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD))
            .await
            .map(String::as_str)
    }

    async fn hash_password(&self, password: &str) -> IdentityResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        // Hashing is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                IdentityError::internal(format!("hashing task failed: {}", e))
            })?
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                IdentityError::internal(e.to_string())
            })
    }

    async fn verify_password(&self, password: &str, credential: &str) -> IdentityResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let credential = credential.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &credential))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                IdentityError::internal(format!("verification task failed: {}", e))
            })?
            .map_err(|e| {
                error!("Password verification failed: {}", e);
                IdentityError::internal(e.to_string())
            })
    }
}
