pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod jwt_validator;
pub mod token_issuer;

pub use claims::Claims;
pub use credential_hasher::{Argon2Hasher, CredentialHasher};
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use token_issuer::{IssuedToken, TokenIssuer};
