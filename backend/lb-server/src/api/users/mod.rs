pub mod personal_response;
pub mod register_user_request;
pub mod user_response;
pub mod users;
