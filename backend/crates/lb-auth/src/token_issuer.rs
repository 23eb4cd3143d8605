use crate::{AuthError, Claims, Result as AuthErrorResult};

use lb_core::ErrorLocation;

use std::panic::Location;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

/// A signed token and the Unix time it stops being accepted.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Signs HS256 tokens whose subject is a user id.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    #[track_caller]
    pub fn issue(&self, user_id: i64) -> AuthErrorResult<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }
}
