//! Row shapes as stored, converted into the in-memory records.

use tn_core::{Comment, Post, Relation, User, Vote};

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    /// Relations start out not loaded and the session flag cleared.
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(row.id),
            username: row.username,
            email: row.email,
            password: row.password,
            logged_in: false,
            posts: Relation::NotLoaded,
            votes: Relation::NotLoaded,
            comments: Relation::NotLoaded,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PostRow {
    pub id: i32,
    pub title: String,
    pub post_url: String,
    pub user_id: Option<i32>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: Some(row.id),
            title: row.title,
            post_url: row.post_url,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VoteRow {
    pub id: i32,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Self {
            id: Some(row.id),
            user_id: row.user_id,
            post_id: row.post_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CommentRow {
    pub id: i32,
    pub comment_text: String,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: Some(row.id),
            comment_text: row.comment_text,
            user_id: row.user_id,
            post_id: row.post_id,
        }
    }
}
