//! # Query Execution
//!
//! Runs a [`BuiltQuery`] from lightbnb-core against SQLite.
//!
//! ```text
//! BuiltQuery { sql: "... $1 ... $2", params: [Text, Integer] }
//!      │
//!      ▼  bind params[0], params[1], ... in order
//! sqlx::query_as::<_, T>(sql).bind(..).bind(..)
//!      │
//!      ▼
//! Vec<T>  or  Err(DbError)
//! ```
//!
//! SQLite reads `$n` as a positional parameter and sqlx binds the n-th
//! argument to it, so binding in list order is all that is needed.

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use lightbnb_core::{BuiltQuery, SqlValue};

/// Executes `built` and maps every row to `T`.
pub async fn fetch_all<T>(pool: &SqlitePool, built: &BuiltQuery) -> DbResult<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    debug!(params = built.params.len(), "Executing built query");

    let mut query = sqlx::query_as::<_, T>(&built.sql);
    for value in &built.params {
        query = bind_value(query, value);
    }

    Ok(query.fetch_all(pool).await?)
}

fn bind_value<'q, T>(
    query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    value: &SqlValue,
) -> QueryAs<'q, Sqlite, T, SqliteArguments<'q>> {
    match value {
        SqlValue::Text(text) => query.bind(text.clone()),
        SqlValue::Integer(n) => query.bind(*n),
        SqlValue::Real(x) => query.bind(*x),
    }
}
