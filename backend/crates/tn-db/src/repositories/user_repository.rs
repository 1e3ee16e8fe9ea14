//! User repository.
//!
//! ## Relationship handling
//!
//! What gets loaded and what gets cascaded is read from
//! [`USER_MAPPING`](tn_core::USER_MAPPING):
//!
//! - Reads fill every eager relation (posts) and leave lazy ones (votes,
//!   comments) as `Relation::NotLoaded`. `load_votes` / `load_comments` fetch
//!   those on demand.
//! - Saves write the user row and then every *loaded* cascading relation,
//!   stamping each dependent's `user_id` with the owner's id. Each written
//!   relation is then re-read in the same transaction, so a collection that
//!   was pushed to without being loaded comes back complete. Dependents in
//!   the store but missing from the in-memory collection are not deleted.
//! - Deletes remove the dependents of every cascading relation before the
//!   user row, all in one transaction. The schema's `ON DELETE CASCADE`
//!   foreign keys back this up and take care of votes and comments left on
//!   the removed posts by other users.
//!
//! The session flag `logged_in` is never written, and always reads back as
//! `false`.

use crate::repositories::assigned_id;
use crate::rows::UserRow;
use crate::{CommentRepository, DbError, PostRepository, Result as DbErrorResult, VoteRepository};

use tn_core::{FetchType, Relation, RelationMapping, USER_MAPPING, User};

use log::{debug, info};
use sqlx::{Executor, Sqlite, SqlitePool, Transaction};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user and its loaded dependents, assigning identifiers.
    ///
    /// `user` is only updated once the transaction commits.
    pub async fn create(&self, user: &mut User) -> DbErrorResult<()> {
        let mut staged = user.clone();
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO {} (username, email, password) VALUES (?, ?, ?)",
            USER_MAPPING.table
        );
        let result = sqlx::query(&sql)
            .bind(&staged.username)
            .bind(&staged.email)
            .bind(&staged.password)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_user_write(e, &staged.email))?;

        let id = assigned_id(result.last_insert_rowid(), USER_MAPPING.table)?;
        staged.id = Some(id);

        Self::cascade_save(&mut tx, id, &mut staged).await?;
        tx.commit().await?;

        info!("Created user {} ({})", id, staged.email);
        *user = staged;

        Ok(())
    }

    /// Write back a saved user and its loaded dependents.
    pub async fn update(&self, user: &mut User) -> DbErrorResult<()> {
        let id = user.id.ok_or_else(|| DbError::not_persisted("User"))?;
        let mut staged = user.clone();
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "UPDATE {} SET username = ?, email = ?, password = ? WHERE {} = ?",
            USER_MAPPING.table, USER_MAPPING.id_column
        );
        let result = sqlx::query(&sql)
            .bind(&staged.username)
            .bind(&staged.email)
            .bind(&staged.password)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_user_write(e, &staged.email))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Self::cascade_save(&mut tx, id, &mut staged).await?;
        tx.commit().await?;

        debug!("Updated user {}", id);
        *user = staged;

        Ok(())
    }

    /// `create` for unsaved users, `update` otherwise.
    pub async fn save(&self, user: &mut User) -> DbErrorResult<()> {
        if user.is_persisted() {
            self.update(user).await
        } else {
            self.create(user).await
        }
    }

    pub async fn find_by_id(&self, id: i32) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            USER_MAPPING.select_list(),
            USER_MAPPING.table,
            USER_MAPPING.id_column
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE email = ?",
            USER_MAPPING.select_list(),
            USER_MAPPING.table
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    /// All users in id order, eager relations loaded.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {} ASC",
            USER_MAPPING.select_list(),
            USER_MAPPING.table,
            USER_MAPPING.id_column
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let mut user = User::from(row);
            self.load_eager(&mut user).await?;
            users.push(user);
        }

        Ok(users)
    }

    pub async fn load_votes(&self, user: &mut User) -> DbErrorResult<()> {
        self.load_relation(user, UserRelation::Votes).await
    }

    pub async fn load_comments(&self, user: &mut User) -> DbErrorResult<()> {
        self.load_relation(user, UserRelation::Comments).await
    }

    /// Delete a user and everything that cascades from it.
    /// Returns `false` if no user had that id.
    pub async fn delete(&self, id: i32) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        for mapping in USER_MAPPING.cascading_relations() {
            let relation = UserRelation::try_from(mapping)?;
            let removed = relation.delete_for_user(&mut *tx, id).await?;
            debug!("Cascade removed {} {} of user {}", removed, relation.field(), id);
        }

        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            USER_MAPPING.table, USER_MAPPING.id_column
        );
        let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted user {}", id);
        }

        Ok(deleted)
    }

    async fn hydrate(&self, row: Option<UserRow>) -> DbErrorResult<Option<User>> {
        match row {
            None => Ok(None),
            Some(row) => {
                let mut user = User::from(row);
                self.load_eager(&mut user).await?;
                Ok(Some(user))
            }
        }
    }

    async fn load_eager(&self, user: &mut User) -> DbErrorResult<()> {
        for mapping in USER_MAPPING.eager_relations() {
            self.load_relation(user, UserRelation::try_from(mapping)?).await?;
        }
        Ok(())
    }

    async fn load_relation(&self, user: &mut User, relation: UserRelation) -> DbErrorResult<()> {
        let id = user.id.ok_or_else(|| DbError::not_persisted("User"))?;

        relation.load(&self.pool, user, id).await?;
        debug!("Loaded {} ({}) for user {}", relation.field(), relation.fetch(), id);

        Ok(())
    }

    /// Write every loaded cascading relation, then re-read it inside the
    /// transaction so the collection holds exactly what the store holds.
    async fn cascade_save(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i32,
        user: &mut User,
    ) -> DbErrorResult<()> {
        for mapping in USER_MAPPING.cascading_relations() {
            let relation = UserRelation::try_from(mapping)?;
            if !relation.is_loaded(user) {
                continue;
            }

            relation.save(tx, user_id, user).await?;
            relation.load(&mut **tx, user, user_id).await?;
        }

        Ok(())
    }
}

/// The user's one-to-many relations, resolved from their mapping entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserRelation {
    Posts,
    Votes,
    Comments,
}

impl UserRelation {
    fn field(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Votes => "votes",
            Self::Comments => "comments",
        }
    }

    fn fetch(self) -> FetchType {
        USER_MAPPING
            .relation(self.field())
            .map_or(FetchType::Lazy, |r| r.fetch)
    }

    fn is_loaded(self, user: &User) -> bool {
        match self {
            Self::Posts => user.posts.is_loaded(),
            Self::Votes => user.votes.is_loaded(),
            Self::Comments => user.comments.is_loaded(),
        }
    }

    async fn load<'e, E>(self, executor: E, user: &mut User, user_id: i32) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        match self {
            Self::Posts => {
                user.posts = Relation::from(PostRepository::find_by_user(executor, user_id).await?)
            }
            Self::Votes => {
                user.votes = Relation::from(VoteRepository::find_by_user(executor, user_id).await?)
            }
            Self::Comments => {
                user.comments =
                    Relation::from(CommentRepository::find_by_user(executor, user_id).await?)
            }
        }
        Ok(())
    }

    /// Stamp `user_id` on each loaded dependent and insert or update it.
    async fn save(
        self,
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i32,
        user: &mut User,
    ) -> DbErrorResult<()> {
        match self {
            Self::Posts => {
                for post in user.posts.iter_mut() {
                    post.user_id = Some(user_id);
                    PostRepository::save(&mut **tx, post).await?;
                }
            }
            Self::Votes => {
                for vote in user.votes.iter_mut() {
                    vote.user_id = Some(user_id);
                    VoteRepository::save(&mut **tx, vote).await?;
                }
            }
            Self::Comments => {
                for comment in user.comments.iter_mut() {
                    comment.user_id = Some(user_id);
                    CommentRepository::save(&mut **tx, comment).await?;
                }
            }
        }
        Ok(())
    }

    async fn delete_for_user<'e, E>(self, executor: E, user_id: i32) -> DbErrorResult<u64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        match self {
            Self::Posts => PostRepository::delete_by_user(executor, user_id).await,
            Self::Votes => VoteRepository::delete_by_user(executor, user_id).await,
            Self::Comments => CommentRepository::delete_by_user(executor, user_id).await,
        }
    }
}

impl TryFrom<&RelationMapping> for UserRelation {
    type Error = DbError;

    #[track_caller]
    fn try_from(mapping: &RelationMapping) -> DbErrorResult<Self> {
        match mapping.field {
            "posts" => Ok(Self::Posts),
            "votes" => Ok(Self::Votes),
            "comments" => Ok(Self::Comments),
            other => Err(DbError::unknown_relation("User", other)),
        }
    }
}
