use crate::repositories::assigned_id;
use crate::rows::VoteRow;
use crate::{DbError, Result as DbErrorResult};

use tn_core::Vote;

use sqlx::{Executor, Sqlite};

pub struct VoteRepository;

impl VoteRepository {
    pub async fn create<'e, E>(executor: E, vote: &mut Vote) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("INSERT INTO votes (user_id, post_id) VALUES (?, ?)")
            .bind(vote.user_id)
            .bind(vote.post_id)
            .execute(executor)
            .await?;

        vote.id = Some(assigned_id(result.last_insert_rowid(), "votes")?);

        Ok(())
    }

    pub async fn update<'e, E>(executor: E, vote: &Vote) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id = vote.id.ok_or_else(|| DbError::not_persisted("Vote"))?;

        let result = sqlx::query("UPDATE votes SET user_id = ?, post_id = ? WHERE id = ?")
            .bind(vote.user_id)
            .bind(vote.post_id)
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Vote", id));
        }

        Ok(())
    }

    pub async fn save<'e, E>(executor: E, vote: &mut Vote) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        match vote.id {
            None => Self::create(executor, vote).await,
            Some(_) => Self::update(executor, vote).await,
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> DbErrorResult<Option<Vote>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, VoteRow>(
            "SELECT id, user_id, post_id FROM votes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Vote::from))
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<Vec<Vote>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, VoteRow>(
            r#"
                SELECT id, user_id, post_id
                FROM votes
                WHERE user_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Vote::from).collect())
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: i32) -> DbErrorResult<u64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM votes WHERE user_id = ?")
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
