//! REST route registration for the reminders module.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::RemindersService;

/// Registers all REST routes for the reminders module.
///
/// `completed`, `not-completed` and `due-today` are literal segments and win
/// over `/reminders/{id}` for GET. PATCH and DELETE on them act on the
/// reminder with that id, so such a reminder can still be updated and deleted.
pub fn register_routes(router: Router, service: Arc<RemindersService>) -> Router {
    router
        // GET / - Welcome text
        .route("/", get(handlers::welcome))
        // GET /reminders - All reminders, POST /reminders - Create a reminder
        .route(
            "/reminders",
            get(handlers::list_reminders).post(handlers::create_reminder),
        )
        // Filtered lists
        .route(
            "/reminders/completed",
            get(handlers::list_completed)
                .patch(handlers::update_reserved_id)
                .delete(handlers::delete_reserved_id),
        )
        .route(
            "/reminders/not-completed",
            get(handlers::list_not_completed)
                .patch(handlers::update_reserved_id)
                .delete(handlers::delete_reserved_id),
        )
        .route(
            "/reminders/due-today",
            get(handlers::list_due_today)
                .patch(handlers::update_reserved_id)
                .delete(handlers::delete_reserved_id),
        )
        // Single reminder by id
        .route(
            "/reminders/{id}",
            get(handlers::get_reminder)
                .patch(handlers::update_reminder)
                .delete(handlers::delete_reminder),
        )
        .route(
            "/reminders/{id}/mark-completed",
            post(handlers::mark_completed),
        )
        .route(
            "/reminders/{id}/unmark-completed",
            post(handlers::unmark_completed),
        )
        .fallback(handlers::route_not_found)
        .layer(Extension(service))
}
