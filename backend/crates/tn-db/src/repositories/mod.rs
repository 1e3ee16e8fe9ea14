pub mod comment_repository;
pub mod post_repository;
pub mod user_repository;
pub mod vote_repository;

use crate::{DbError, Result as DbErrorResult};

use tn_core::ErrorLocation;

use std::panic::Location;

/// Narrow a SQLite rowid to the `i32` identifiers records carry.
#[track_caller]
pub(crate) fn assigned_id(rowid: i64, table: &'static str) -> DbErrorResult<i32> {
    i32::try_from(rowid).map_err(|_| DbError::IdOverflow {
        table,
        rowid,
        location: ErrorLocation::from(Location::caller()),
    })
}
