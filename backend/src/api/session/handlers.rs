//! Handler functions for session endpoints.
//!
//! Participant and school listings return an empty array when nothing
//! matches; only single-session lookups answer 404.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::extract::{ApiJson, ApiPath};
use crate::database::models::{NewSession, Session};
use crate::database::queries::sessions;
use crate::database::Database;
use crate::errors::AppError;

pub async fn create_session(
    State(db): State<Database>,
    ApiJson(payload): ApiJson<NewSession>,
) -> Result<Json<Session>, AppError> {
    let session = sessions::insert(&db, &payload).await?;
    tracing::info!(session_id = session.id, date = %session.date, "session booked");
    Ok(Json(session))
}

pub async fn list_sessions(State(db): State<Database>) -> Result<Json<Vec<Session>>, AppError> {
    Ok(Json(sessions::list(&db).await?))
}

pub async fn get_session(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Session>, AppError> {
    sessions::get(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Session"))
}

pub async fn update_session(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewSession>,
) -> Result<Json<Session>, AppError> {
    sessions::update(&db, id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Session"))
}

pub async fn delete_session(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !sessions::delete(&db, id).await? {
        return Err(AppError::not_found("Session"));
    }
    tracing::info!(session_id = id, "session deleted");
    Ok(Json(json!({ "message": "Session deleted" })))
}

pub async fn list_by_supervisor(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<Vec<Session>>, AppError> {
    Ok(Json(sessions::list_by_supervisor_email(&db, &email).await?))
}

pub async fn list_by_client(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<Vec<Session>>, AppError> {
    Ok(Json(sessions::list_by_client_email(&db, &email).await?))
}

pub async fn list_by_school(
    State(db): State<Database>,
    ApiPath(school_id): ApiPath<i64>,
) -> Result<Json<Vec<Session>>, AppError> {
    Ok(Json(sessions::list_by_school(&db, school_id).await?))
}
