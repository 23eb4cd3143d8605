pub mod identity_error;
pub mod identity_flow;
