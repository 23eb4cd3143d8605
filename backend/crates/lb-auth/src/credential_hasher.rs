//! Credential hashing collaborator.
//!
//! Callers only see opaque PHC strings; the algorithm and its parameters stay
//! behind [`CredentialHasher`].

use crate::{AuthError, Result as AuthErrorResult};

use lb_core::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, Salt, SaltString};
use argon2::{Algorithm, Argon2, Params, ParamsBuilder, Version};
use rand::{TryRngCore, rngs::OsRng};

pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret into a storable credential.
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String>;

    /// Check a plaintext secret against a stored credential.
    fn verify(&self, plaintext: &str, credential: &str) -> AuthErrorResult<bool>;
}

/// Argon2id with a random per-credential salt.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
    const DEFAULT_ITERATIONS: u32 = 2;
    const DEFAULT_PARALLELISM: u32 = 1;
    const SALT_LENGTH: usize = Salt::RECOMMENDED_LENGTH;

    /// Build a hasher with the OWASP baseline parameters.
    #[track_caller]
    pub fn new() -> AuthErrorResult<Self> {
        Self::with_params(
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_PARALLELISM,
        )
    }

    /// Build a hasher with caller-specified cost (useful for tests).
    #[track_caller]
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params: Params = ParamsBuilder::new()
            .m_cost(memory_kib)
            .t_cost(iterations)
            .p_cost(parallelism)
            .build()
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Invalid Argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::default(), params),
        })
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; Self::SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Failed to generate salt: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, credential: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(credential).map_err(|e| AuthError::PasswordHash {
            message: format!("Stored credential is not a valid hash: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
