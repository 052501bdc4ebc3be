//! Domain error types for the reminders module.

use reminders_sdk::{ReminderFilter, RemindersError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required field missing, empty or unreadable.
    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    /// A reminder with the same id is already stored.
    #[error("Reminder already exists: {0}")]
    AlreadyExists(String),

    /// No reminder has the requested id.
    #[error("Reminder not found: {0}")]
    NotFound(String),

    /// A list query matched nothing.
    #[error("No reminders match filter '{0}'")]
    NoReminders(ReminderFilter),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}

impl From<DomainError> for RemindersError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { field, message } => Self::validation(field, message),
            DomainError::AlreadyExists(id) => Self::already_exists(id),
            DomainError::NotFound(id) => Self::not_found(id),
            DomainError::NoReminders(filter) => Self::NoReminders(filter),
        }
    }
}
