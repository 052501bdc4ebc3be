//! REST error mapping for the reminders module.
//!
//! Every failure is rendered as `{"error": <message>}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reminders_sdk::ReminderFilter;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub const INVALID_FIELDS: &str = "Bad Request: Missing or invalid required fields.";
pub const DUPLICATE_ID: &str = "Reminder with this ID already exists.";
pub const REMINDER_NOT_FOUND: &str = "Not Found: Reminder not found.";
pub const ROUTE_NOT_FOUND: &str = "Not Found";

/// Message for a list query that matched nothing.
#[must_use]
pub fn no_reminders_message(filter: ReminderFilter) -> &'static str {
    match filter {
        ReminderFilter::All => "Not Found: No reminders available.",
        ReminderFilter::Completed => "Not Found: No completed reminders.",
        ReminderFilter::NotCompleted => "Not Found: No uncompleted reminders.",
        ReminderFilter::DueToday => "Not Found: No reminders due today.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The request body was not JSON, or not of the expected shape.
    #[must_use]
    pub fn invalid_body(rejection: &JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::new(StatusCode::BAD_REQUEST, INVALID_FIELDS)
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { field, message } => {
                tracing::debug!(%field, %message, "Reminder validation failed");
                Self::new(StatusCode::BAD_REQUEST, INVALID_FIELDS)
            }
            DomainError::AlreadyExists(id) => {
                tracing::debug!(reminder_id = %id, "Duplicate reminder id");
                Self::new(StatusCode::BAD_REQUEST, DUPLICATE_ID)
            }
            DomainError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, REMINDER_NOT_FOUND),
            DomainError::NoReminders(filter) => {
                Self::new(StatusCode::NOT_FOUND, no_reminders_message(filter))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
