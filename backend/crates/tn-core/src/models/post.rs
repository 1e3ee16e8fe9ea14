use crate::models::DisplayId;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A submitted link. Owns the back-reference to its author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: Option<i32>,
    pub title: String,
    pub post_url: String,
    pub user_id: Option<i32>,
}

impl Post {
    pub fn new(title: impl Into<String>, post_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            post_url: post_url.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post{{id={}, title='{}', postUrl='{}', userId={}}}",
            DisplayId(self.id),
            self.title,
            self.post_url,
            DisplayId(self.user_id),
        )
    }
}
