//! HTTP routes for schools.

use axum::{routing::get, Router};

use super::handlers::{create_school, delete_school, get_school, list_schools, update_school};
use crate::AppState;

pub fn school_router() -> Router<AppState> {
    Router::new()
        .route("/schools", get(list_schools).post(create_school))
        .route("/schools/", get(list_schools).post(create_school))
        .route(
            "/schools/{school_id}",
            get(get_school).put(update_school).delete(delete_school),
        )
}
