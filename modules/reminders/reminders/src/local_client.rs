//! Local client implementing the `RemindersApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use reminders_sdk::{
    NewReminder, Reminder, ReminderFilter, ReminderPatch, RemindersApi, RemindersError,
};

use crate::domain::service::RemindersService;

/// In-process client for the reminders module.
///
/// Delegates to the domain service and converts domain errors to the SDK
/// error type.
pub struct RemindersLocalClient {
    service: Arc<RemindersService>,
}

impl RemindersLocalClient {
    #[must_use]
    pub fn new(service: Arc<RemindersService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RemindersApi for RemindersLocalClient {
    async fn create_reminder(&self, reminder: NewReminder) -> Result<(), RemindersError> {
        self.service.create(reminder).map_err(RemindersError::from)
    }

    async fn get_reminder(&self, id: &str) -> Result<Reminder, RemindersError> {
        self.service.get(id).map_err(RemindersError::from)
    }

    async fn list_reminders(
        &self,
        filter: ReminderFilter,
    ) -> Result<Vec<Reminder>, RemindersError> {
        self.service.list(filter).map_err(RemindersError::from)
    }

    async fn update_reminder(&self, id: &str, patch: ReminderPatch) -> Result<(), RemindersError> {
        self.service.update(id, patch).map_err(RemindersError::from)
    }

    async fn delete_reminder(&self, id: &str) -> Result<(), RemindersError> {
        self.service.delete(id).map_err(RemindersError::from)
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<(), RemindersError> {
        self.service
            .set_completed(id, completed)
            .map_err(RemindersError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemindersConfig;

    fn create_client() -> RemindersLocalClient {
        RemindersLocalClient::new(crate::build_service(RemindersConfig::default()))
    }

    fn new_reminder(id: &str) -> NewReminder {
        NewReminder {
            id: id.to_owned(),
            title: "Call the dentist".to_owned(),
            description: "Reschedule the checkup".to_owned(),
            due_date: "2024-03-10T09:00:00Z".to_owned(),
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let client = create_client();

        client.create_reminder(new_reminder("r1")).await.unwrap();

        let reminder = client.get_reminder("r1").await.unwrap();
        assert_eq!(reminder.title, "Call the dentist");
        assert!(!reminder.is_completed);
    }

    #[tokio::test]
    async fn test_errors_are_mapped_to_sdk_errors() {
        let client = create_client();
        client.create_reminder(new_reminder("r1")).await.unwrap();

        let err = client.create_reminder(new_reminder("r1")).await.unwrap_err();
        assert!(err.is_already_exists());

        let err = client.get_reminder("missing").await.unwrap_err();
        assert_eq!(err, RemindersError::not_found("missing"));

        let mut empty_title = new_reminder("r2");
        empty_title.title = String::new();
        let err = client.create_reminder(empty_title).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_list_filters() {
        let client = create_client();
        client.create_reminder(new_reminder("r1")).await.unwrap();
        client.create_reminder(new_reminder("r2")).await.unwrap();
        client.set_completed("r2", true).await.unwrap();

        let all = client.list_reminders(ReminderFilter::All).await.unwrap();
        assert_eq!(all.len(), 2);

        let completed = client
            .list_reminders(ReminderFilter::Completed)
            .await
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "r2");

        client.set_completed("r2", false).await.unwrap();
        let err = client
            .list_reminders(ReminderFilter::Completed)
            .await
            .unwrap_err();
        assert_eq!(err, RemindersError::NoReminders(ReminderFilter::Completed));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let client = create_client();
        client.create_reminder(new_reminder("r1")).await.unwrap();

        let patch = ReminderPatch {
            title: Some("Call the dentist today".to_owned()),
            ..ReminderPatch::default()
        };
        client.update_reminder("r1", patch).await.unwrap();
        assert_eq!(
            client.get_reminder("r1").await.unwrap().title,
            "Call the dentist today"
        );

        client.delete_reminder("r1").await.unwrap();
        assert!(client.get_reminder("r1").await.unwrap_err().is_not_found());
        assert!(client.delete_reminder("r1").await.unwrap_err().is_not_found());
    }
}
