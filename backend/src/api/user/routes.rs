//! HTTP routes for user accounts.

use axum::{routing::get, Router};

use super::handlers::{create_user, delete_user, get_user, list_users, update_user};
use crate::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{user}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
