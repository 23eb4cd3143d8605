mod error;
mod login_request;
mod register_user_request;
