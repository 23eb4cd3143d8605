//! SQLite-backed [`UserStore`].
//!
//! Timestamps are stored as Unix seconds. Every query filters on
//! `deleted_at IS NULL`, so soft-deleted rows are indistinguishable from
//! missing ones.

use crate::{UniqueViolation, UserLookup, UserStore, UserStoreError, UserStoreResult};

use lb_core::{NewUser, User, UserIdentifier, UserPersonal};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = sqlx::Error;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: r.id,
            username: r.username,
            email: r.email,
            password: r.password,
            created_at: timestamp(r.created_at, "users.created_at")?,
            updated_at: timestamp(r.updated_at, "users.updated_at")?,
            deleted_at: r.deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}

fn timestamp(seconds: i64, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| sqlx::Error::Decode(format!("Invalid timestamp in {}", column).into()))
}

/// Turn a failed insert into `Uniqueness` when the backend names the
/// colliding column, `CreationFailed` otherwise.
pub(crate) fn classify_create_error(user: NewUser, error: sqlx::Error) -> UserStoreError {
    match error.unique_violation_column() {
        Some(field) => UserStoreError::uniqueness(user, field),
        None => UserStoreError::creation_failed(user, error),
    }
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_identifier_by_id(&self, id: i64) -> UserStoreResult<UserIdentifier> {
        let row = sqlx::query_as::<_, (i64, String)>(
            r#"
                SELECT id, username
                FROM users
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::query(e))?;

        let (id, username) = row.ok_or_else(|| UserStoreError::not_found(UserLookup::Id(id)))?;

        Ok(UserIdentifier { id, username })
    }

    async fn find_personal_by_id(&self, id: i64) -> UserStoreResult<UserPersonal> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            r#"
                SELECT id, username, email
                FROM users
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::query(e))?;

        let (id, username, email) =
            row.ok_or_else(|| UserStoreError::not_found(UserLookup::Id(id)))?;

        Ok(UserPersonal {
            id,
            username,
            email,
        })
    }

    async fn find_by_email(&self, email: &str) -> UserStoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password, created_at, updated_at, deleted_at
                FROM users
                WHERE email = ? AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::query(e))?
        .ok_or_else(|| UserStoreError::not_found(UserLookup::Email(email.to_string())))?;

        User::try_from(row).map_err(|e| UserStoreError::query(e))
    }

    async fn create(&self, user: NewUser) -> UserStoreResult<User> {
        let now = Utc::now().timestamp();

        let result = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (username, email, password, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING id, username, email, password, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                // Callers own the reaction, and the log line that goes with it
                let classified = classify_create_error(user, e);
                debug!("User creation failed [{}]", classified.kind());
                return Err(classified);
            }
        };

        let created = User::try_from(row).map_err(|e| UserStoreError::creation_failed(user, e))?;
        debug!("Created user {} ({})", created.id, created.username);

        Ok(created)
    }
}
