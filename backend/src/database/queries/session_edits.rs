//! Session edit repository: create, read, delete and filtered listings.

use super::{collect, first};
use crate::database::models::{NewSessionEdit, SessionEdit};
use crate::database::{format_date, parse_date, Database, DatabaseError};

const SELECT_COLS: &str = "session_edits.id, session_edits.session_id, session_edits.school_id,
     session_edits.supervisor_id, session_edits.supervisor_email, session_edits.client_id,
     session_edits.client_email, session_edits.date, session_edits.request,
     session_edits.additional_info";

const RETURNING_COLS: &str = "id, session_id, school_id, supervisor_id, supervisor_email,
     client_id, client_email, date, request, additional_info";

fn row_to_session_edit(row: &libsql::Row) -> Result<SessionEdit, DatabaseError> {
    Ok(SessionEdit {
        id: row.get(0)?,
        session_id: row.get::<Option<i64>>(1)?,
        school_id: row.get::<Option<i64>>(2)?,
        supervisor_id: row.get::<Option<i64>>(3)?,
        supervisor_email: row.get(4)?,
        client_id: row.get(5)?,
        client_email: row.get(6)?,
        date: parse_date(&row.get::<String>(7)?)?,
        request: row.get(8)?,
        additional_info: row.get::<Option<String>>(9)?,
    })
}

pub async fn insert(db: &Database, edit: &NewSessionEdit) -> Result<SessionEdit, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "INSERT INTO session_edits
                   (session_id, school_id, supervisor_id, supervisor_email, client_id,
                    client_email, date, request, additional_info)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 RETURNING {RETURNING_COLS}"
            ),
            libsql::params![
                edit.session_id,
                edit.school_id,
                edit.supervisor_id,
                edit.supervisor_email.as_str(),
                edit.client_id,
                edit.client_email.as_str(),
                format_date(edit.date),
                edit.request.as_str(),
                edit.additional_info.as_deref()
            ],
        )
        .await?;
    first(rows, row_to_session_edit).await?.ok_or(DatabaseError::NoResult)
}

pub async fn list(db: &Database) -> Result<Vec<SessionEdit>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!("SELECT {SELECT_COLS} FROM session_edits ORDER BY session_edits.id"),
            (),
        )
        .await?;
    collect(rows, row_to_session_edit).await
}

pub async fn get(db: &Database, id: i64) -> Result<Option<SessionEdit>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!("SELECT {SELECT_COLS} FROM session_edits WHERE session_edits.id = ?1"),
            [id],
        )
        .await?;
    first(rows, row_to_session_edit).await
}

pub async fn delete(db: &Database, id: i64) -> Result<bool, DatabaseError> {
    let affected = db
        .conn()
        .execute("DELETE FROM session_edits WHERE id = ?1", [id])
        .await?;
    Ok(affected > 0)
}

pub async fn list_by_supervisor_email(
    db: &Database,
    email: &str,
) -> Result<Vec<SessionEdit>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "SELECT {SELECT_COLS} FROM session_edits
                 WHERE session_edits.supervisor_email = ?1 ORDER BY session_edits.id"
            ),
            [email],
        )
        .await?;
    collect(rows, row_to_session_edit).await
}

pub async fn list_by_client_email(
    db: &Database,
    email: &str,
) -> Result<Vec<SessionEdit>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "SELECT {SELECT_COLS} FROM session_edits
                 WHERE session_edits.client_email = ?1 ORDER BY session_edits.id"
            ),
            [email],
        )
        .await?;
    collect(rows, row_to_session_edit).await
}

/// Edits whose linked session belongs to `school_id`. Edits without a
/// session are never included, whatever their own `school_id` says.
pub async fn list_by_school(
    db: &Database,
    school_id: i64,
) -> Result<Vec<SessionEdit>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "SELECT {SELECT_COLS} FROM session_edits
                 JOIN sessions ON sessions.id = session_edits.session_id
                 WHERE sessions.school_id = ?1 ORDER BY session_edits.id"
            ),
            [school_id],
        )
        .await?;
    collect(rows, row_to_session_edit).await
}
