//! Domain service for the reminders module.

use std::sync::Arc;

use chrono::NaiveDate;
use reminders_sdk::{NewReminder, Reminder, ReminderFilter, ReminderPatch};

use super::due_date;
use super::error::DomainError;
use super::fields::ReminderFields;
use super::repo::ReminderRepository;
use crate::config::RemindersConfig;

/// Validates input and delegates storage to the repository.
///
/// Empty list results are reported as [`DomainError::NoReminders`], never as
/// an empty vector.
pub struct RemindersService {
    repo: Arc<dyn ReminderRepository>,
    config: RemindersConfig,
}

impl RemindersService {
    #[must_use]
    pub fn new(repo: Arc<dyn ReminderRepository>, config: RemindersConfig) -> Self {
        Self { repo, config }
    }

    /// # Errors
    ///
    /// `Validation` if a text field is empty (or the due date is unreadable in
    /// strict mode), `AlreadyExists` if the id is taken.
    pub fn create(&self, new: NewReminder) -> Result<(), DomainError> {
        require_non_empty(ReminderFields::ID, &new.id)?;
        require_non_empty(ReminderFields::TITLE, &new.title)?;
        require_non_empty(ReminderFields::DESCRIPTION, &new.description)?;
        require_non_empty(ReminderFields::DUE_DATE, &new.due_date)?;
        self.validate_due_date(&new.due_date)?;

        let id = new.id.clone();
        self.repo.insert(new.into())?;
        tracing::info!(reminder_id = %id, "Reminder created");
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` if no reminder has this id.
    pub fn get(&self, id: &str) -> Result<Reminder, DomainError> {
        self.repo.get(id)
    }

    /// # Errors
    ///
    /// `NoReminders(filter)` if nothing matches.
    pub fn list(&self, filter: ReminderFilter) -> Result<Vec<Reminder>, DomainError> {
        let reminders = match filter {
            ReminderFilter::All => self.repo.find_all(&|_| true),
            ReminderFilter::Completed => self.repo.find_all(&|r| r.is_completed),
            ReminderFilter::NotCompleted => self.repo.find_all(&|r| !r.is_completed),
            ReminderFilter::DueToday => return self.list_due_on(due_date::today()),
        };
        non_empty(filter, reminders)
    }

    /// Reminders whose due date falls on `day` in local time.
    ///
    /// # Errors
    ///
    /// `NoReminders(DueToday)` if nothing matches.
    pub fn list_due_on(&self, day: NaiveDate) -> Result<Vec<Reminder>, DomainError> {
        let reminders = self
            .repo
            .find_all(&|r| due_date::is_due_on(&r.due_date, day));
        non_empty(ReminderFilter::DueToday, reminders)
    }

    /// Applies the non-empty fields of `patch`. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// `NotFound` if no reminder has this id, `Validation` for an unreadable
    /// due date in strict mode.
    pub fn update(&self, id: &str, patch: ReminderPatch) -> Result<(), DomainError> {
        let patch = ReminderPatch {
            title: patch.title.filter(|v| !v.is_empty()),
            description: patch.description.filter(|v| !v.is_empty()),
            due_date: patch.due_date.filter(|v| !v.is_empty()),
            is_completed: patch.is_completed,
        };
        if let Some(ref due_date) = patch.due_date
            && self.config.strict_due_date
        {
            // An unknown id is reported before an unreadable due date.
            self.repo.get(id)?;
            self.validate_due_date(due_date)?;
        }

        self.repo.update(id, patch)?;
        tracing::debug!(reminder_id = %id, "Reminder updated");
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` if no reminder has this id.
    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        tracing::info!(reminder_id = %id, "Reminder deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// `NotFound` if no reminder has this id.
    pub fn set_completed(&self, id: &str, completed: bool) -> Result<(), DomainError> {
        self.repo.set_completed(id, completed)?;
        tracing::debug!(reminder_id = %id, completed, "Reminder completion changed");
        Ok(())
    }

    fn validate_due_date(&self, raw: &str) -> Result<(), DomainError> {
        if self.config.strict_due_date && due_date::local_calendar_date(raw).is_none() {
            return Err(DomainError::validation(
                ReminderFields::DUE_DATE,
                "is not an ISO-8601 date or date-time",
            ));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn non_empty(
    filter: ReminderFilter,
    reminders: Vec<Reminder>,
) -> Result<Vec<Reminder>, DomainError> {
    if reminders.is_empty() {
        return Err(DomainError::NoReminders(filter));
    }
    Ok(reminders)
}
