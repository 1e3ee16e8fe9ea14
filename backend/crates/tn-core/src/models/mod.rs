pub mod comment;
pub mod post;
pub mod relation;
pub mod user;
pub mod vote;

use std::fmt;

/// Renders an optional identifier, `null` when unset.
pub(crate) struct DisplayId(pub(crate) Option<i32>);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "null"),
        }
    }
}
