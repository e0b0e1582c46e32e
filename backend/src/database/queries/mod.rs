//! Database query functions (Data Access Objects).
//!
//! One submodule per table. Every function takes the shared [`Database`]
//! handle and returns typed rows from `super::models`. Inserts and updates
//! use `RETURNING` so the stored row comes back from the same statement.

pub mod contacts;
pub mod schools;
pub mod session_edits;
pub mod sessions;
pub mod users;

use super::DatabaseError;

/// Read every remaining row through `map`.
pub(crate) async fn collect<T>(
    mut rows: libsql::Rows,
    map: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(map(&row)?);
    }
    Ok(results)
}

/// Read at most one row through `map`.
pub(crate) async fn first<T>(
    mut rows: libsql::Rows,
    map: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Option<T>, DatabaseError> {
    match rows.next().await? {
        Some(row) => Ok(Some(map(&row)?)),
        None => Ok(None),
    }
}
