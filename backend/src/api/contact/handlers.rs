use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::extract::{ApiJson, ApiPath};
use crate::database::models::{Contact, NewContact};
use crate::database::queries::contacts;
use crate::database::Database;
use crate::errors::AppError;

pub async fn create_contact(
    State(db): State<Database>,
    ApiJson(payload): ApiJson<NewContact>,
) -> Result<Json<Contact>, AppError> {
    let contact = contacts::insert(&db, &payload).await?;
    tracing::info!(contact_id = contact.id, "contact message stored");
    Ok(Json(contact))
}

pub async fn list_contacts(State(db): State<Database>) -> Result<Json<Vec<Contact>>, AppError> {
    Ok(Json(contacts::list(&db).await?))
}

pub async fn get_contact(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Contact>, AppError> {
    contacts::get(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Contact"))
}

pub async fn delete_contact(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !contacts::delete(&db, id).await? {
        return Err(AppError::not_found("Contact"));
    }
    Ok(Json(json!({ "message": "Contact deleted" })))
}
