use crate::repositories::assigned_id;
use crate::rows::PostRow;
use crate::{DbError, Result as DbErrorResult};

use tn_core::Post;

use sqlx::{Executor, Sqlite};

/// Stateless: every operation takes the executor to run on, so callers can
/// pass the pool or an open transaction.
pub struct PostRepository;

impl PostRepository {
    pub async fn create<'e, E>(executor: E, post: &mut Post) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO posts (title, post_url, user_id)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&post.title)
        .bind(&post.post_url)
        .bind(post.user_id)
        .execute(executor)
        .await?;

        post.id = Some(assigned_id(result.last_insert_rowid(), "posts")?);

        Ok(())
    }

    pub async fn update<'e, E>(executor: E, post: &Post) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id = post.id.ok_or_else(|| DbError::not_persisted("Post"))?;

        let result = sqlx::query(
            r#"
                UPDATE posts
                SET title = ?, post_url = ?, user_id = ?
                WHERE id = ?
            "#,
        )
        .bind(&post.title)
        .bind(&post.post_url)
        .bind(post.user_id)
        .bind(id)
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Post", id));
        }

        Ok(())
    }

    /// Insert when unsaved, update otherwise.
    pub async fn save<'e, E>(executor: E, post: &mut Post) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        match post.id {
            None => Self::create(executor, post).await,
            Some(_) => Self::update(executor, post).await,
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> DbErrorResult<Option<Post>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
                SELECT id, title, post_url, user_id
                FROM posts
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Post::from))
    }

    /// Posts authored by `user_id`, oldest first.
    pub async fn find_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<Vec<Post>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
                SELECT id, title, post_url, user_id
                FROM posts
                WHERE user_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<u64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM posts WHERE user_id = ?")
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
