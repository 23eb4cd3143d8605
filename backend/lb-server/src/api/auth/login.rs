use crate::{ApiResult, AppState, LoginRequest};

use lb_auth::IssuedToken;

use axum::{Json, extract::State};

/// POST /api/v1/login
///
/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<IssuedToken>> {
    req.validate()?;

    let user = state
        .identity
        .login(req.email.trim(), &req.password)
        .await?;

    let token = state.tokens.issue(user.id)?;

    Ok(Json(token))
}
