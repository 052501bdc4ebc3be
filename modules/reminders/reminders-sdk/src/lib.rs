//! Reminders SDK
//!
//! Transport-agnostic contract of the reminders module: the `RemindersApi`
//! trait, the models it exchanges and the public error type.

pub mod api;
pub mod errors;
pub mod models;

pub use api::RemindersApi;
pub use errors::RemindersError;
pub use models::{NewReminder, Reminder, ReminderFilter, ReminderPatch};
