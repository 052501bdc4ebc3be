//! Reminders Module Implementation
//!
//! The public API is defined in `reminders-sdk` and re-exported here.

use std::sync::Arc;

pub use reminders_sdk::{
    NewReminder, Reminder, ReminderFilter, ReminderPatch, RemindersApi, RemindersError,
};

pub mod config;
pub use config::RemindersConfig;

pub mod local_client;
pub use local_client::RemindersLocalClient;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

use domain::service::RemindersService;
use infra::InMemoryReminderRepository;

/// Wires the service to a fresh, empty in-memory store.
#[must_use]
pub fn build_service(config: RemindersConfig) -> Arc<RemindersService> {
    let repo = Arc::new(InMemoryReminderRepository::new());
    Arc::new(RemindersService::new(repo, config))
}

/// REST router for the module, with the service attached.
#[must_use]
pub fn router(service: Arc<RemindersService>) -> axum::Router {
    api::rest::routes::register_routes(axum::Router::new(), service)
}
