//! Session repository: CRUD plus lookups by supervisor, client and school.

use super::{collect, first};
use crate::database::models::{NewSession, Session};
use crate::database::{format_date, parse_date, Database, DatabaseError};

const SELECT_COLS: &str =
    "id, school_id, supervisor_id, supervisor_email, client_id, client_email, date, additional_info";

fn row_to_session(row: &libsql::Row) -> Result<Session, DatabaseError> {
    Ok(Session {
        id: row.get(0)?,
        school_id: row.get::<Option<i64>>(1)?,
        supervisor_id: row.get::<Option<i64>>(2)?,
        supervisor_email: row.get(3)?,
        client_id: row.get::<Option<i64>>(4)?,
        client_email: row.get(5)?,
        date: parse_date(&row.get::<String>(6)?)?,
        additional_info: row.get::<Option<String>>(7)?,
    })
}

pub async fn insert(db: &Database, session: &NewSession) -> Result<Session, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "INSERT INTO sessions
                   (school_id, supervisor_id, supervisor_email, client_id, client_email, date, additional_info)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                session.school_id,
                session.supervisor_id,
                session.supervisor_email.as_str(),
                session.client_id,
                session.client_email.as_str(),
                format_date(session.date),
                session.additional_info.as_deref()
            ],
        )
        .await?;
    first(rows, row_to_session).await?.ok_or(DatabaseError::NoResult)
}

pub async fn list(db: &Database) -> Result<Vec<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM sessions ORDER BY id"), ())
        .await?;
    collect(rows, row_to_session).await
}

pub async fn get(db: &Database, id: i64) -> Result<Option<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM sessions WHERE id = ?1"), [id])
        .await?;
    first(rows, row_to_session).await
}

pub async fn update(
    db: &Database,
    id: i64,
    session: &NewSession,
) -> Result<Option<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "UPDATE sessions SET school_id = ?1, supervisor_id = ?2, supervisor_email = ?3,
                   client_id = ?4, client_email = ?5, date = ?6, additional_info = ?7
                 WHERE id = ?8
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                session.school_id,
                session.supervisor_id,
                session.supervisor_email.as_str(),
                session.client_id,
                session.client_email.as_str(),
                format_date(session.date),
                session.additional_info.as_deref(),
                id
            ],
        )
        .await?;
    first(rows, row_to_session).await
}

pub async fn delete(db: &Database, id: i64) -> Result<bool, DatabaseError> {
    let affected = db
        .conn()
        .execute("DELETE FROM sessions WHERE id = ?1", [id])
        .await?;
    Ok(affected > 0)
}

pub async fn list_by_supervisor_email(
    db: &Database,
    email: &str,
) -> Result<Vec<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!("SELECT {SELECT_COLS} FROM sessions WHERE supervisor_email = ?1 ORDER BY id"),
            [email],
        )
        .await?;
    collect(rows, row_to_session).await
}

pub async fn list_by_client_email(
    db: &Database,
    email: &str,
) -> Result<Vec<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!("SELECT {SELECT_COLS} FROM sessions WHERE client_email = ?1 ORDER BY id"),
            [email],
        )
        .await?;
    collect(rows, row_to_session).await
}

pub async fn list_by_school(db: &Database, school_id: i64) -> Result<Vec<Session>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!("SELECT {SELECT_COLS} FROM sessions WHERE school_id = ?1 ORDER BY id"),
            [school_id],
        )
        .await?;
    collect(rows, row_to_session).await
}
