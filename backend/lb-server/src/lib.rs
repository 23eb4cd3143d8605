pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod identity;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login::login,
        login_request::LoginRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    users::{
        personal_response::PersonalResponse,
        register_user_request::RegisterUserRequest,
        user_response::UserResponse,
        users::{create_user, get_user, me},
    },
};
pub use app_state::AppState;
pub use identity::{
    identity_error::{IdentityError, Result as IdentityResult},
    identity_flow::IdentityFlow,
};

pub use crate::routes::build_router;
