//! HTTP routes for sessions.
//!
//! `/sessions/{id}/` (trailing slash) lists a school's sessions, `{id}` being
//! the school id. Both id routes share one parameter name so they can coexist
//! in the router.

use axum::{routing::get, Router};

use super::handlers::{
    create_session, delete_session, get_session, list_by_client, list_by_school,
    list_by_supervisor, list_sessions, update_session,
};
use crate::AppState;

pub fn session_router() -> Router<AppState> {
    Router::new()
        .route("/sessions", get(list_sessions).post(create_session))
        .route("/sessions/", get(list_sessions).post(create_session))
        .route(
            "/sessions/{id}",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route("/sessions/{id}/", get(list_by_school))
        .route("/sessions/supervisor/{email}", get(list_by_supervisor))
        .route("/sessions/client/{email}", get(list_by_client))
        .route("/sessions/school/{school_id}", get(list_by_school))
}
