use crate::models::DisplayId;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An upvote cast by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vote {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
}

impl Vote {
    pub fn new(post_id: i32) -> Self {
        Self {
            post_id: Some(post_id),
            ..Self::default()
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vote{{id={}, userId={}, postId={}}}",
            DisplayId(self.id),
            DisplayId(self.user_id),
            DisplayId(self.post_id),
        )
    }
}
