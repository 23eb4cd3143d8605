//! Error taxonomy returned by every [`UserStore`](crate::UserStore) operation.
//!
//! Callers match on the variant to decide how to react:
//! - `NotFound` is a client-visible miss
//! - `Uniqueness` is a client-visible conflict on a named field
//! - `CreationFailed` and `Query` are infrastructure failures whose cause is
//!   for logs only

use lb_core::{ErrorLocation, NewUser};

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// The key a lookup was performed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(i64),
    Email(String),
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::Id(id) => write!(f, "ID {}", id),
            UserLookup::Email(email) => write!(f, "email {}", email),
        }
    }
}

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("User with {lookup} was not found {location}")]
    NotFound {
        lookup: UserLookup,
        location: ErrorLocation,
    },

    #[error("User creation failed: {field} is already in use {location}")]
    Uniqueness {
        user: NewUser,
        field: String,
        location: ErrorLocation,
    },

    #[error("The user creation failed with the following error: {source} {location}")]
    CreationFailed {
        user: NewUser,
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("User lookup failed: {source} {location}")]
    Query {
        source: sqlx::Error,
        location: ErrorLocation,
    },
}

impl UserStoreError {
    #[track_caller]
    pub fn not_found(lookup: UserLookup) -> Self {
        Self::NotFound {
            lookup,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn uniqueness(user: NewUser, field: impl Into<String>) -> Self {
        Self::Uniqueness {
            user,
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn creation_failed(user: NewUser, source: sqlx::Error) -> Self {
        Self::CreationFailed {
            user,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn query(source: sqlx::Error) -> Self {
        Self::Query {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable kind, tagged onto log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Uniqueness { .. } => "UNIQUENESS",
            Self::CreationFailed { .. } => "CREATION_FAILED",
            Self::Query { .. } => "QUERY_FAILED",
        }
    }
}

pub type UserStoreResult<T> = std::result::Result<T, UserStoreError>;
