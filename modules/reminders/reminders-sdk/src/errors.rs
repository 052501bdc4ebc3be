//! Error types for the reminders SDK.

use thiserror::Error;

use crate::models::ReminderFilter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemindersError {
    #[error("Reminder not found: {id}")]
    NotFound { id: String },

    #[error("Reminder already exists: {id}")]
    AlreadyExists { id: String },

    #[error("No reminders match filter '{0}'")]
    NoReminders(ReminderFilter),

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl RemindersError {
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for both a missing id and an empty list result.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoReminders(_))
    }

    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
