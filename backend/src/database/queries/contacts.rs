//! Contact message repository.

use super::{collect, first};
use crate::database::models::{Contact, NewContact};
use crate::database::{Database, DatabaseError};

const SELECT_COLS: &str = "id, name, email, message";

fn row_to_contact(row: &libsql::Row) -> Result<Contact, DatabaseError> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        message: row.get(3)?,
    })
}

pub async fn insert(db: &Database, contact: &NewContact) -> Result<Contact, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "INSERT INTO contacts (name, email, message) VALUES (?1, ?2, ?3)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                contact.name.as_str(),
                contact.email.as_str(),
                contact.message.as_str()
            ],
        )
        .await?;
    first(rows, row_to_contact).await?.ok_or(DatabaseError::NoResult)
}

pub async fn list(db: &Database) -> Result<Vec<Contact>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM contacts ORDER BY id"), ())
        .await?;
    collect(rows, row_to_contact).await
}

pub async fn get(db: &Database, id: i64) -> Result<Option<Contact>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM contacts WHERE id = ?1"), [id])
        .await?;
    first(rows, row_to_contact).await
}

pub async fn delete(db: &Database, id: i64) -> Result<bool, DatabaseError> {
    let affected = db
        .conn()
        .execute("DELETE FROM contacts WHERE id = ?1", [id])
        .await?;
    Ok(affected > 0)
}
