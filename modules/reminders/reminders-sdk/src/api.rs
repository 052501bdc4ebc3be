use async_trait::async_trait;

use crate::errors::RemindersError;
use crate::models::{NewReminder, Reminder, ReminderFilter, ReminderPatch};

/// In-process API of the reminders module.
///
/// List operations fail with [`RemindersError::NoReminders`] instead of
/// returning an empty vector.
#[async_trait]
pub trait RemindersApi: Send + Sync {
    async fn create_reminder(&self, new: NewReminder) -> Result<(), RemindersError>;

    async fn get_reminder(&self, id: &str) -> Result<Reminder, RemindersError>;

    async fn list_reminders(&self, filter: ReminderFilter)
    -> Result<Vec<Reminder>, RemindersError>;

    async fn update_reminder(&self, id: &str, patch: ReminderPatch)
    -> Result<(), RemindersError>;

    async fn delete_reminder(&self, id: &str) -> Result<(), RemindersError>;

    async fn set_completed(&self, id: &str, completed: bool) -> Result<(), RemindersError>;
}
