//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use lb_auth::Claims;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Claims of a request carrying a valid `Authorization: Bearer` token.
///
/// Rejects with 401 when the header is missing, uses another scheme, or the
/// token fails validation.
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl AuthenticatedUser {
    /// The subject as a user id, if it is numeric.
    pub fn user_id(&self) -> Option<i64> {
        self.claims.user_id().ok()
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let claims = state.validator.validate_header(header)?;
            log::debug!("Authenticated request for subject {}", claims.sub);

            Ok(AuthenticatedUser { claims })
        }
    }
}
