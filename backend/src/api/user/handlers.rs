//! Handler functions for user account endpoints.
//!
//! Users are looked up and updated by email, deleted by numeric id. Passwords
//! are hashed here before they reach the database layer.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::extract::{ApiJson, ApiPath};
use crate::auth::hash_password;
use crate::database::models::{NewUser, User};
use crate::database::queries::users::{self, UserRecord};
use crate::database::Database;
use crate::errors::AppError;

fn record<'a>(payload: &'a NewUser, password_hash: &'a str) -> UserRecord<'a> {
    UserRecord {
        email: &payload.email,
        password_hash,
        account_type: &payload.account_type,
        school_id: payload.school_id,
    }
}

pub async fn create_user(
    State(db): State<Database>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<Json<User>, AppError> {
    let password_hash = hash_password(&payload.password)?;
    let user = users::insert(&db, record(&payload, &password_hash)).await?;
    tracing::info!(user_id = user.id, account_type = %user.account_type, "user created");
    Ok(Json(user))
}

pub async fn list_users(State(db): State<Database>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(users::list(&db).await?))
}

pub async fn get_user(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<User>, AppError> {
    users::get_by_email(&db, &email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User"))
}

pub async fn update_user(
    State(db): State<Database>,
    ApiPath(email): ApiPath<String>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<Json<User>, AppError> {
    let password_hash = hash_password(&payload.password)?;
    let user = users::update_by_email(&db, &email, record(&payload, &password_hash))
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;
    tracing::info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

pub async fn delete_user(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !users::delete(&db, id).await? {
        return Err(AppError::not_found("User"));
    }
    tracing::info!(user_id = id, "user deleted");
    Ok(Json(json!({ "message": "User deleted" })))
}
