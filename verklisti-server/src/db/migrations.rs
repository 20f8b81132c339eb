//! Schema setup for the todos table
//!
//! Create-if-absent only; safe to run on every process start.

use sqlx::PgPool;

use super::DbError;

/// Ensure the todos table and its listing index exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running todos migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            finished BOOLEAN NOT NULL DEFAULT FALSE,
            created TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Covers the one query the page runs: ORDER BY finished ASC, created DESC
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_todos_finished_created ON todos (finished, created DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("todos migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
