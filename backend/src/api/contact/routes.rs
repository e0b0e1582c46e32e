//! HTTP routes for contact messages. There is no update route.

use axum::{routing::get, Router};

use super::handlers::{create_contact, delete_contact, get_contact, list_contacts};
use crate::AppState;

pub fn contact_router() -> Router<AppState> {
    Router::new()
        .route("/contact", get(list_contacts).post(create_contact))
        .route("/contact/", get(list_contacts).post(create_contact))
        .route("/contact/{contact_id}", get(get_contact).delete(delete_contact))
}
