pub mod models;

pub use error_location::ErrorLocation;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_identifier::UserIdentifier;
pub use models::user_personal::UserPersonal;

#[cfg(test)]
mod tests;
