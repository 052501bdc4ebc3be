//! REST API layer for the reminders module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
