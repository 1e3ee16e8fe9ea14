use tn_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("{entity} has not been saved yet {location}")]
    NotPersisted {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Row id {rowid} in {table} does not fit an i32 {location}")]
    IdOverflow {
        table: &'static str,
        rowid: i64,
        location: ErrorLocation,
    },

    #[error("{entity} has no loader for relation '{field}' {location}")]
    UnknownRelation {
        entity: &'static str,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: i32,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn not_persisted(entity: &'static str) -> Self {
        Self::NotPersisted {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn unknown_relation(entity: &'static str, field: &'static str) -> Self {
        Self::UnknownRelation {
            entity,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a unique-constraint failure on insert/update of a user to
    /// `DuplicateEmail`; anything else goes through the SQLx variant.
    #[track_caller]
    pub(crate) fn from_user_write(source: sqlx::Error, email: &str) -> Self {
        match &source {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::DuplicateEmail {
                    email: email.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => Self::from(source),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
