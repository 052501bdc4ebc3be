pub mod storage;

pub use storage::InMemoryReminderRepository;
