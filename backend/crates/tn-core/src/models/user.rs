//! User entity - one account in the system.

use crate::models::DisplayId;
use crate::{Comment, Post, Relation, Vote};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user account and its authored records.
///
/// Equality and hashing cover every field, relations included, so two users
/// only compare equal when both have fetched the same related data.
///
/// The password is held and rendered exactly as given. Nothing here hashes
/// it, and both `Debug` and `Display` print it in clear text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Assigned by the store on first save.
    pub id: Option<i32>,
    pub username: String,
    /// Unique across all users. Enforced by the store.
    pub email: String,
    pub password: String,
    /// Session flag. Never written to durable storage.
    pub logged_in: bool,

    /// Loaded together with the user.
    pub posts: Relation<Post>,
    /// Loaded on demand.
    pub votes: Relation<Vote>,
    /// Loaded on demand.
    pub comments: Relation<Comment>,
}

impl User {
    pub fn new(
        id: Option<i32>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Whether the store has assigned an identifier yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User{{id={}, username='{}', email='{}', password='{}', loggedIn={}, posts={}, votes={}, comments={}}}",
            DisplayId(self.id),
            self.username,
            self.email,
            self.password,
            self.logged_in,
            self.posts,
            self.votes,
            self.comments,
        )
    }
}
