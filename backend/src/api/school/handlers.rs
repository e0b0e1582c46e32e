//! Handler functions for school endpoints.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::extract::{ApiJson, ApiPath};
use crate::database::models::{NewSchool, School};
use crate::database::queries::schools;
use crate::database::Database;
use crate::errors::AppError;

pub async fn create_school(
    State(db): State<Database>,
    ApiJson(payload): ApiJson<NewSchool>,
) -> Result<Json<School>, AppError> {
    let school = schools::insert(&db, &payload).await?;
    tracing::info!(school_id = school.id, domain = %school.domain, "school created");
    Ok(Json(school))
}

pub async fn list_schools(State(db): State<Database>) -> Result<Json<Vec<School>>, AppError> {
    Ok(Json(schools::list(&db).await?))
}

pub async fn get_school(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<School>, AppError> {
    schools::get(&db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("School"))
}

pub async fn update_school(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewSchool>,
) -> Result<Json<School>, AppError> {
    schools::update(&db, id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("School"))
}

pub async fn delete_school(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !schools::delete(&db, id).await? {
        return Err(AppError::not_found("School"));
    }
    tracing::info!(school_id = id, "school deleted");
    Ok(Json(json!({ "message": "School deleted" })))
}
