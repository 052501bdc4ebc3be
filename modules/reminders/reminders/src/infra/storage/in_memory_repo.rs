//! In-memory reminder storage.

use parking_lot::RwLock;
use reminders_sdk::{Reminder, ReminderPatch};

use crate::domain::error::DomainError;
use crate::domain::repo::ReminderRepository;

/// Process-lifetime reminder store.
///
/// A `Vec` keeps insertion order for list queries. Each operation takes the
/// lock once, so the id check and the write of `insert` are one atomic step.
#[derive(Default)]
pub struct InMemoryReminderRepository {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.reminders.read().len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reminders.read().is_empty()
    }

    fn with_reminder_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Reminder) -> T,
    ) -> Result<T, DomainError> {
        let mut reminders = self.reminders.write();
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found(id))?;
        Ok(f(reminder))
    }
}

impl ReminderRepository for InMemoryReminderRepository {
    fn insert(&self, reminder: Reminder) -> Result<(), DomainError> {
        let mut reminders = self.reminders.write();
        if reminders.iter().any(|r| r.id == reminder.id) {
            return Err(DomainError::already_exists(reminder.id));
        }
        reminders.push(reminder);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Reminder, DomainError> {
        self.reminders
            .read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    fn find_all(&self, filter: &dyn Fn(&Reminder) -> bool) -> Vec<Reminder> {
        self.reminders
            .read()
            .iter()
            .filter(|r| filter(r))
            .cloned()
            .collect()
    }

    fn update(&self, id: &str, patch: ReminderPatch) -> Result<(), DomainError> {
        self.with_reminder_mut(id, |reminder| patch.apply_to(reminder))
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut reminders = self.reminders.write();
        let index = reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found(id))?;
        reminders.remove(index);
        Ok(())
    }

    fn set_completed(&self, id: &str, completed: bool) -> Result<(), DomainError> {
        self.with_reminder_mut(id, |reminder| reminder.is_completed = completed)
    }
}
