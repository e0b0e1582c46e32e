//! School repository: CRUD.

use super::{collect, first};
use crate::database::models::{NewSchool, School};
use crate::database::{Database, DatabaseError};

const SELECT_COLS: &str = "id, name, address, city, county, postcode, phone, website, domain";

fn row_to_school(row: &libsql::Row) -> Result<School, DatabaseError> {
    Ok(School {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        city: row.get(3)?,
        county: row.get(4)?,
        postcode: row.get(5)?,
        phone: row.get(6)?,
        website: row.get(7)?,
        domain: row.get(8)?,
    })
}

pub async fn insert(db: &Database, school: &NewSchool) -> Result<School, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "INSERT INTO schools (name, address, city, county, postcode, phone, website, domain)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                school.name.as_str(),
                school.address.as_str(),
                school.city.as_str(),
                school.county.as_str(),
                school.postcode.as_str(),
                school.phone.as_str(),
                school.website.as_str(),
                school.domain.as_str()
            ],
        )
        .await?;
    first(rows, row_to_school).await?.ok_or(DatabaseError::NoResult)
}

pub async fn list(db: &Database) -> Result<Vec<School>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM schools ORDER BY id"), ())
        .await?;
    collect(rows, row_to_school).await
}

pub async fn get(db: &Database, id: i64) -> Result<Option<School>, DatabaseError> {
    let rows = db
        .conn()
        .query(&format!("SELECT {SELECT_COLS} FROM schools WHERE id = ?1"), [id])
        .await?;
    first(rows, row_to_school).await
}

/// Replace every field of school `id`. Returns `None` if it does not exist.
pub async fn update(
    db: &Database,
    id: i64,
    school: &NewSchool,
) -> Result<Option<School>, DatabaseError> {
    let rows = db
        .conn()
        .query(
            &format!(
                "UPDATE schools SET name = ?1, address = ?2, city = ?3, county = ?4,
                   postcode = ?5, phone = ?6, website = ?7, domain = ?8
                 WHERE id = ?9
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                school.name.as_str(),
                school.address.as_str(),
                school.city.as_str(),
                school.county.as_str(),
                school.postcode.as_str(),
                school.phone.as_str(),
                school.website.as_str(),
                school.domain.as_str(),
                id
            ],
        )
        .await?;
    first(rows, row_to_school).await
}

/// Returns `false` if no school had this id.
pub async fn delete(db: &Database, id: i64) -> Result<bool, DatabaseError> {
    let affected = db
        .conn()
        .execute("DELETE FROM schools WHERE id = ?1", [id])
        .await?;
    Ok(affected > 0)
}


#[cfg(test)]
mod tests {
    use super::fixtures::new_school;
    use super::*;
    use crate::database::test_support::test_db;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn insert_and_get() {
        let db = test_db().await;
        let created = insert(&db, &new_school("Hillside", "hillside.example")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.phone, "01132345678");

        let fetched = get(&db, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let db = test_db().await;
        assert!(get(&db, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let db = test_db().await;
        for (name, domain) in [("A", "a.example"), ("B", "b.example"), ("C", "c.example")] {
            insert(&db, &new_school(name, domain)).await.unwrap();
        }
        let names: Vec<_> = list(&db).await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn duplicate_domain_is_rejected() {
        let db = test_db().await;
        insert(&db, &new_school("A", "same.example")).await.unwrap();
        let err = insert(&db, &new_school("B", "same.example")).await.unwrap_err();
        assert!(err.to_string().contains("UNIQUE constraint failed"), "{err}");
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let db = test_db().await;
        let created = insert(&db, &new_school("Old", "old.example")).await.unwrap();
        let mut replacement = new_school("New", "new.example");
        replacement.city = "York".to_string();

        let updated = update(&db, created.id, &replacement).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.city, "York");
        assert_eq!(updated.domain, "new.example");
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let db = test_db().await;
        let result = update(&db, 7, &new_school("X", "x.example")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let db = test_db().await;
        let created = insert(&db, &new_school("A", "a.example")).await.unwrap();
        assert!(delete(&db, created.id).await.unwrap());
        assert!(!delete(&db, created.id).await.unwrap());
        assert!(get(&db, created.id).await.unwrap().is_none());
    }
}
