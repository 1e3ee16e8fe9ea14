use crate::repositories::assigned_id;
use crate::rows::CommentRow;
use crate::{DbError, Result as DbErrorResult};

use tn_core::Comment;

use sqlx::{Executor, Sqlite};

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &mut Comment) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO comments (comment_text, user_id, post_id)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&comment.comment_text)
        .bind(comment.user_id)
        .bind(comment.post_id)
        .execute(executor)
        .await?;

        comment.id = Some(assigned_id(result.last_insert_rowid(), "comments")?);

        Ok(())
    }

    pub async fn update<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id = comment.id.ok_or_else(|| DbError::not_persisted("Comment"))?;

        let result = sqlx::query(
            r#"
                UPDATE comments
                SET comment_text = ?, user_id = ?, post_id = ?
                WHERE id = ?
            "#,
        )
        .bind(&comment.comment_text)
        .bind(comment.user_id)
        .bind(comment.post_id)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Comment", id));
        }

        Ok(())
    }

    pub async fn save<'e, E>(executor: E, comment: &mut Comment) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        match comment.id {
            None => Self::create(executor, comment).await,
            Some(_) => Self::update(executor, comment).await,
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> DbErrorResult<Option<Comment>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
                SELECT id, comment_text, user_id, post_id
                FROM comments
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Comment::from))
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<Vec<Comment>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
                SELECT id, comment_text, user_id, post_id
                FROM comments
                WHERE user_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<u64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM comments WHERE user_id = ?")
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
