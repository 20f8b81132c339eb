//! Database layer: pool management, migrations, and the todo repository

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, spawn_pool_watchdog};
pub use repos::{DbError, TodoRepo};

/// Convert a repository result into the failure sentinel the handlers check.
///
/// Every database call site funnels through here: a failure is logged once
/// and becomes `None`, so nothing past the repository boundary ever
/// propagates a database error. Handlers treat `None` uniformly as
/// "nothing happened" and redirect.
pub fn checked<T>(result: Result<T, DbError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!("database query failed: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_passes_values_through() {
        assert_eq!(checked(Ok(5)), Some(5));
    }

    #[test]
    fn checked_maps_failure_to_none() {
        let err: Result<i32, DbError> = Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        assert_eq!(checked(err), None);
    }
}
