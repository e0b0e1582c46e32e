//! Module for database connection setup and common utilities.
//!
//! Wraps an embedded libSQL database (local file or `:memory:`). Foreign keys
//! are enabled on the connection and the schema is migrated on open.

mod migrations;
pub mod models;
pub mod queries;

use chrono::NaiveDate;
use libsql::Builder;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The configured database URL is not usable.
    #[error("Invalid database URL '{0}'")]
    InvalidUrl(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Shared handle to the application database.
///
/// Cloning is cheap: clones share the same underlying connection.
#[derive(Clone)]
pub struct Database {
    #[allow(dead_code)]
    db: std::sync::Arc<libsql::Database>,
    conn: libsql::Connection,
}

impl Database {
    /// Open the database described by a connection URL and run migrations.
    pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
        let path = resolve_path(url)?;
        Self::open_local(&path).await
    }

    /// Open a local database file (or `:memory:`) and run migrations.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let database = Self {
            db: std::sync::Arc::new(db),
            conn,
        };
        database.run_migrations().await?;
        tracing::info!(path, "database ready");
        Ok(database)
    }

    pub fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

/// Turn a `sqlite://` style URL into a path libSQL can open.
///
/// `sqlite:///./app.db` and `sqlite://app.db` both yield a relative path,
/// `sqlite:////var/db/app.db` an absolute one. Plain paths pass through.
pub fn resolve_path(url: &str) -> Result<String, DatabaseError> {
    let url = url.trim();
    let path = if let Some(rest) = url.strip_prefix("sqlite:///") {
        rest
    } else if let Some(rest) = url.strip_prefix("sqlite://") {
        rest
    } else if url.contains("://") {
        return Err(DatabaseError::InvalidUrl(url.to_string()));
    } else {
        url
    };

    if path.is_empty() {
        return Err(DatabaseError::InvalidUrl(url.to_string()));
    }
    Ok(path.to_string())
}

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("sqlite:///./app.db", "./app.db")]
    #[case("sqlite://app.db", "app.db")]
    #[case("sqlite:////var/lib/app.db", "/var/lib/app.db")]
    #[case("data/app.db", "data/app.db")]
    #[case(":memory:", ":memory:")]
    fn resolves_database_urls(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(resolve_path(url).unwrap(), expected);
    }

    #[rstest]
    #[case("postgres://localhost/app")]
    #[case("sqlite:///")]
    #[case("")]
    fn rejects_unusable_urls(#[case] url: &str) {
        assert!(matches!(resolve_path(url), Err(DatabaseError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn open_creates_schema() {
        let db = test_support::test_db().await;
        for table in ["schools", "users", "sessions", "session_edits", "contacts"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_support::test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn file_backed_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");
        let url = format!("sqlite:///{}", path.display());

        {
            let db = Database::connect(&url).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO contacts (name, email, message) VALUES ('a', 'b', 'c')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = Database::connect(&url).await.unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM contacts", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[test]
    fn dates_use_iso_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "2024-03-09");
        assert_eq!(parse_date("2024-03-09").unwrap(), date);
        assert!(parse_date("09/03/2024").is_err());
    }
}
