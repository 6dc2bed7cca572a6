//! Query execution utilities.

use rusqlite::Row;
use rusqlite::types::ToSql;

use super::{DbError, FlightDb};

/// Run a parameterized query and map each result row.
///
/// Parameters are bound by name through the driver; query text is never
/// concatenated with user input. Rows come back in the database's natural
/// order unless the query orders them itself.
pub fn run_query<T, F>(
    db: &FlightDb,
    sql: &str,
    params: &[(&str, &dyn ToSql)],
    mut map_row: F,
) -> Result<Vec<T>, DbError>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = db.conn().prepare(sql).map_err(query_failed)?;
    let rows = stmt
        .query_map(params, |row| map_row(row))
        .map_err(query_failed)?;
    rows.collect::<rusqlite::Result<Vec<T>>>()
        .map_err(query_failed)
}

fn query_failed(e: rusqlite::Error) -> DbError {
    DbError::QueryFailed {
        message: e.to_string(),
    }
}
