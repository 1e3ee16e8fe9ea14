use crate::models::DisplayId;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: Option<i32>,
    pub comment_text: String,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
}

impl Comment {
    pub fn new(post_id: i32, comment_text: impl Into<String>) -> Self {
        Self {
            comment_text: comment_text.into(),
            post_id: Some(post_id),
            ..Self::default()
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comment{{id={}, commentText='{}', userId={}, postId={}}}",
            DisplayId(self.id),
            self.comment_text,
            DisplayId(self.user_id),
            DisplayId(self.post_id),
        )
    }
}
