//! Public models for the reminders module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the reminders module and its consumers. Wire naming lives in the
//! REST DTOs, not here.

use std::fmt;

/// A stored reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 date-time, kept exactly as submitted.
    pub due_date: String,
    pub is_completed: bool,
}

/// Creation data for a reminder. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub is_completed: bool,
}

impl From<NewReminder> for Reminder {
    fn from(new: NewReminder) -> Self {
        Self {
            id: new.id,
            title: new.title,
            description: new.description,
            due_date: new.due_date,
            is_completed: new.is_completed,
        }
    }
}

/// Partial update data for a reminder.
///
/// `None` leaves the field untouched. `is_completed: Some(false)` is a real
/// update, not an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}

impl ReminderPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.is_completed.is_none()
    }

    /// Overwrites every field of `reminder` that this patch carries.
    pub fn apply_to(self, reminder: &mut Reminder) {
        if let Some(title) = self.title {
            reminder.title = title;
        }
        if let Some(description) = self.description {
            reminder.description = description;
        }
        if let Some(due_date) = self.due_date {
            reminder.due_date = due_date;
        }
        if let Some(is_completed) = self.is_completed {
            reminder.is_completed = is_completed;
        }
    }
}

/// Selects which reminders a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderFilter {
    All,
    Completed,
    NotCompleted,
    /// Due on the server's current local calendar date.
    DueToday,
}

impl fmt::Display for ReminderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::NotCompleted => "not-completed",
            Self::DueToday => "due-today",
        };
        f.write_str(name)
    }
}
