//! Backend capability: "is this failure a uniqueness violation, and on which
//! column?"
//!
//! The store only asks this question; how the answer is read out of a driver
//! error lives here, once per backend.

use sqlx::error::ErrorKind;

/// SQLite reports unique index violations as
/// `UNIQUE constraint failed: <table>.<column>[, <table>.<column>]`.
const SQLITE_UNIQUE_PREFIX: &str = "UNIQUE constraint failed:";

pub trait UniqueViolation {
    /// Name of the column that collided, or `None` when the failure is not a
    /// uniqueness violation or names no column.
    fn unique_violation_column(&self) -> Option<String>;
}

impl UniqueViolation for sqlx::Error {
    fn unique_violation_column(&self) -> Option<String> {
        let sqlx::Error::Database(db_error) = self else {
            return None;
        };

        if !matches!(db_error.kind(), ErrorKind::UniqueViolation) {
            return None;
        }

        column_from_sqlite_message(db_error.message())
    }
}

/// Extract the first violating column from a SQLite constraint message.
///
/// Composite violations list several columns; the first one is reported.
pub fn column_from_sqlite_message(message: &str) -> Option<String> {
    let columns = message.trim().strip_prefix(SQLITE_UNIQUE_PREFIX)?;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit('.').next()?.trim();

    if column.is_empty() {
        None
    } else {
        Some(column.to_string())
    }
}
