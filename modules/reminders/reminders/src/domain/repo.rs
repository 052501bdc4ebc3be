//! Repository trait for reminder storage.

use reminders_sdk::{Reminder, ReminderPatch};

use super::error::DomainError;

/// Storage interface used by the domain service.
///
/// Every method is one critical section: an implementation must never let
/// another call observe or interleave with a half-applied operation.
pub trait ReminderRepository: Send + Sync {
    /// Stores a new reminder.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a reminder with the same id is stored.
    fn insert(&self, reminder: Reminder) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no reminder has this id.
    fn get(&self, id: &str) -> Result<Reminder, DomainError>;

    /// Reminders accepted by `filter`, in insertion order. May be empty.
    fn find_all(&self, filter: &dyn Fn(&Reminder) -> bool) -> Vec<Reminder>;

    /// Applies `patch` in place.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reminder has this id.
    fn update(&self, id: &str, patch: ReminderPatch) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no reminder has this id.
    fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no reminder has this id.
    fn set_completed(&self, id: &str, completed: bool) -> Result<(), DomainError>;
}
