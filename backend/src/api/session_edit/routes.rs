//! HTTP routes for session edit requests. Edits cannot be updated in place.

use axum::{routing::get, Router};

use super::handlers::{
    create_session_edit, delete_session_edit, get_session_edit, list_by_client, list_by_school,
    list_by_supervisor, list_session_edits,
};
use crate::AppState;

pub fn session_edit_router() -> Router<AppState> {
    Router::new()
        .route("/session_edits", get(list_session_edits).post(create_session_edit))
        .route("/session_edits/", get(list_session_edits).post(create_session_edit))
        .route(
            "/session_edits/{session_edit_id}",
            get(get_session_edit).delete(delete_session_edit),
        )
        .route("/session_edits/supervisor/{email}", get(list_by_supervisor))
        .route("/session_edits/client/{email}", get(list_by_client))
        .route("/session_edits/school/{school_id}", get(list_by_school))
}
