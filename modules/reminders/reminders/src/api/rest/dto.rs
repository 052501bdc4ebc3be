use reminders_sdk::{NewReminder, Reminder, ReminderPatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::fields::ReminderFields;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub is_completed: bool,
}

impl From<Reminder> for ReminderDto {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            description: reminder.description,
            due_date: reminder.due_date,
            is_completed: reminder.is_completed,
        }
    }
}

/// Body of `POST /reminders`.
///
/// Fields are optional here so a missing field surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl TryFrom<CreateReminderRequest> for NewReminder {
    type Error = DomainError;

    fn try_from(req: CreateReminderRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required(ReminderFields::ID, req.id)?,
            title: required(ReminderFields::TITLE, req.title)?,
            description: required(ReminderFields::DESCRIPTION, req.description)?,
            due_date: required(ReminderFields::DUE_DATE, req.due_date)?,
            is_completed: required(ReminderFields::IS_COMPLETED, req.is_completed)?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(field, "is required"))
}

/// Body of `PATCH /reminders/{id}`.
///
/// Values of the wrong JSON type are ignored, not rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchReminderRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default)]
    pub is_completed: Option<Value>,
}

impl From<PatchReminderRequest> for ReminderPatch {
    fn from(req: PatchReminderRequest) -> Self {
        Self {
            title: req.title.and_then(into_string),
            description: req.description.and_then(into_string),
            due_date: req.due_date.and_then(into_string),
            is_completed: req.is_completed.as_ref().and_then(Value::as_bool),
        }
    }
}

fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// `{"message": ...}` success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
