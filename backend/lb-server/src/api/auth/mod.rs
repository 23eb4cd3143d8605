pub mod login;
pub mod login_request;
