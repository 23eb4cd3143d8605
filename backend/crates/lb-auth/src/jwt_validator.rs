use crate::{AuthError, Claims, Result as AuthErrorResult};

use lb_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates HS256 bearer tokens issued by [`TokenIssuer`](crate::TokenIssuer).
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Extract and validate the token from an `Authorization` header value
    #[track_caller]
    pub fn validate_header(&self, header: Option<&str>) -> AuthErrorResult<Claims> {
        let header = header.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.validate(token.trim())
    }
}
