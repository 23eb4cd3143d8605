pub mod connection;
pub mod error;
pub mod repositories;
pub mod unique_violation;
pub mod user_store_error;

pub use connection::sqlite_pool::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::sqlite_user_store::SqliteUserStore;
pub use repositories::user_store::UserStore;
pub use unique_violation::UniqueViolation;
pub use user_store_error::{UserLookup, UserStoreError, UserStoreResult};
