//! Todo repository: the single point of contact with the todos table
//!
//! Every operation is one statement. Not-found outcomes are encoded in the
//! return type (`Option`/`bool`/count) and stay distinct from query
//! failures, which surface as `DbError`.

use sqlx::PgPool;

use crate::models::{Todo, TodoTitle};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every todo, unfinished first, newest first within each group.
    pub async fn list_all(&self) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, finished, created
            FROM todos
            ORDER BY finished ASC, created DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a new todo with `finished = false`.
    ///
    /// Returns the stored row so the caller sees the generated id and
    /// creation timestamp.
    pub async fn create(&self, title: &TodoTitle) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title)
            VALUES ($1)
            RETURNING id, title, finished, created
            "#,
        )
        .bind(title.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(todo)
    }

    /// Replace title and finished flag for one row.
    ///
    /// Full replace, no partial update. `None` means no row matched the id.
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        finished: bool,
    ) -> Result<Option<Todo>, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $1, finished = $2
            WHERE id = $3
            RETURNING id, title, finished, created
            "#,
        )
        .bind(title)
        .bind(finished)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(todo)
    }

    /// Delete one row by id. Returns whether a row was actually removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every finished row. Returns the number removed.
    pub async fn delete_finished(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE finished = TRUE")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
