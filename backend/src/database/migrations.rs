//! Embedded schema migrations, run on every open. Statements use
//! `IF NOT EXISTS` so re-running is a no-op.

use super::{Database, DatabaseError};

const MIGRATION_001: &str = include_str!("../../migrations/001_initial.sql");

impl Database {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
