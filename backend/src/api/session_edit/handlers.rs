//! Handler functions for session edit requests.
//!
//! Unlike sessions, every listing here answers 404 when it would be empty.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::extract::{ApiJson, ApiPath};
use crate::database::models::{NewSessionEdit, SessionEdit};
use crate::database::queries::session_edits;
use crate::database::Database;
use crate::errors::AppError;

fn non_empty(edits: Vec<SessionEdit>) -> Result<Json<Vec<SessionEdit>>, AppError> {
    if edits.is_empty() {
        return Err(AppError::not_found("Session Edit"));
    }
    Ok(Json(edits))
}

pub async fn create_session_edit(
    State(db): State<Database>,
    ApiJson(payload): ApiJson<NewSessionEdit>,
) -> Result<Json<SessionEdit>, AppError> {
    let edit = session_edits::insert(&db, &payload).await?;
    tracing::info!(session_edit_id = edit.id, session_id = ?edit.session_id, "session edit requested");
    Ok(Json(edit))
}

pub async fn list_session_edits(
    State(db): State<Database>,
) -> Result<Json<Vec<SessionEdit>>, AppError> {
    non_empty(session_edits::list(&db).await?)
}

pub async fn get_session_edit(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SessionEdit>, AppError> {
    session_edits::get(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Session Edit"))
}

pub async fn delete_session_edit(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !session_edits::delete(&db, id).await? {
        return Err(AppError::not_found("Session Edit"));
    }
    Ok(Json(json!({ "message": "Session Edit deleted" })))
}

pub async fn list_by_supervisor(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<Vec<SessionEdit>>, AppError> {
    non_empty(session_edits::list_by_supervisor_email(&db, &email).await?)
}

pub async fn list_by_client(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<Vec<SessionEdit>>, AppError> {
    non_empty(session_edits::list_by_client_email(&db, &email).await?)
}

pub async fn list_by_school(
    State(db): State<Database>,
    ApiPath(school_id): ApiPath<i64>,
) -> Result<Json<Vec<SessionEdit>>, AppError> {
    non_empty(session_edits::list_by_school(&db, school_id).await?)
}
