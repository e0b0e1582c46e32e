//! User repository. Users are addressed by email for reads and updates and
//! by id for deletes. Callers hash passwords before they reach this module.

use super::{collect, first};
use crate::database::models::User;
use crate::database::{Database, DatabaseError};

const SELECT_COLS: &str = "id, email, account_type, school_id, password_hash";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        account_type: row.get(2)?,
        school_id: row.get::<Option<i64>>(3)?,
        password_hash: row.get(4)?,
    })
}

/// Fields written on create and full update.
#[derive(Debug, Clone, Copy)]
pub struct UserRecord<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub account_type: &'a str,
    pub school_id: Option<i64>,
}

pub async fn insert(db: &Database, user: UserRecord<'_>) -> Result<User, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "INSERT INTO users (email, password_hash, account_type, school_id)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                user.email,
                user.password_hash,
                user.account_type,
                user.school_id
            ],
        )
        .await?;
    first(rows, row_to_user).await?.ok_or(DatabaseError::NoResult)
}

pub async fn list(db: &Database) -> Result<Vec<User>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM users ORDER BY id"), ())
        .await?;
    collect(rows, row_to_user).await
}

pub async fn get_by_email(db: &Database, email: &str) -> Result<Option<User>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1"), [email])
        .await?;
    first(rows, row_to_user).await
}

/// Replace every field of the user currently registered under `email`.
pub async fn update_by_email(
    db: &Database,
    email: &str,
    user: UserRecord<'_>,
) -> Result<Option<User>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "UPDATE users SET email = ?1, password_hash = ?2, account_type = ?3, school_id = ?4
                 WHERE email = ?5
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                user.email,
                user.password_hash,
                user.account_type,
                user.school_id,
                email
            ],
        )
        .await?;
    first(rows, row_to_user).await
}

pub async fn delete(db: &Database, id: i64) -> Result<bool, DatabaseError> {
    let affected = db
        .conn()
        .execute("DELETE FROM users WHERE id = ?1", [id])
        .await?;
    Ok(affected > 0)
}
