//! User REST API handlers

use crate::{
    ApiResult, AppState, AuthenticatedUser, PersonalResponse, RegisterUserRequest, UserResponse,
};

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id: i64 = id.parse()?;

    let user = state.identity.user(user_id).await?;

    Ok(Json(UserResponse { user }))
}

/// POST /api/v1/users
///
/// Register a new account
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> ApiResult<Response> {
    req.validate()?;

    let user = state
        .identity
        .register(req.username.trim(), req.email.trim(), &req.password)
        .await?;

    let location = format!("/api/v1/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(UserResponse { user }),
    )
        .into_response())
}

/// GET /api/v1/me
///
/// The authenticated user's own profile
pub async fn me(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> ApiResult<Json<PersonalResponse>> {
    let user = state.identity.me(auth.user_id()).await?;

    Ok(Json(PersonalResponse { user }))
}
