//! REST handlers for the reminders module.
//!
//! Each handler validates its input and makes exactly one call into
//! [`RemindersService`].

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::{StatusCode, Uri};
use reminders_sdk::{NewReminder, ReminderFilter};

use super::dto::{CreateReminderRequest, MessageDto, PatchReminderRequest, ReminderDto};
use super::error::{ApiError, ApiResult};
use crate::domain::service::RemindersService;

pub const WELCOME_MESSAGE: &str = "Welcome to the Reminder Management API!";

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// POST /reminders
pub async fn create_reminder(
    Extension(svc): Extension<Arc<RemindersService>>,
    body: Result<Json<CreateReminderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageDto>)> {
    let Json(req) = body.map_err(|rejection| ApiError::invalid_body(&rejection))?;
    let new = NewReminder::try_from(req)?;

    svc.create(new)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Reminder created successfully.")),
    ))
}

/// GET /reminders/{id}
pub async fn get_reminder(
    Extension(svc): Extension<Arc<RemindersService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReminderDto>> {
    let reminder = svc.get(&id)?;
    Ok(Json(reminder.into()))
}

/// GET /reminders
pub async fn list_reminders(
    Extension(svc): Extension<Arc<RemindersService>>,
) -> ApiResult<Json<Vec<ReminderDto>>> {
    list(&svc, ReminderFilter::All)
}

/// GET /reminders/completed
pub async fn list_completed(
    Extension(svc): Extension<Arc<RemindersService>>,
) -> ApiResult<Json<Vec<ReminderDto>>> {
    list(&svc, ReminderFilter::Completed)
}

/// GET /reminders/not-completed
pub async fn list_not_completed(
    Extension(svc): Extension<Arc<RemindersService>>,
) -> ApiResult<Json<Vec<ReminderDto>>> {
    list(&svc, ReminderFilter::NotCompleted)
}

/// GET /reminders/due-today
pub async fn list_due_today(
    Extension(svc): Extension<Arc<RemindersService>>,
) -> ApiResult<Json<Vec<ReminderDto>>> {
    list(&svc, ReminderFilter::DueToday)
}

fn list(svc: &RemindersService, filter: ReminderFilter) -> ApiResult<Json<Vec<ReminderDto>>> {
    let reminders = svc.list(filter)?;
    Ok(Json(reminders.into_iter().map(Into::into).collect()))
}

/// PATCH /reminders/{id}
pub async fn update_reminder(
    Extension(svc): Extension<Arc<RemindersService>>,
    Path(id): Path<String>,
    body: Result<Json<PatchReminderRequest>, JsonRejection>,
) -> ApiResult<Json<MessageDto>> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            // An unknown id is reported before an unreadable body.
            svc.get(&id)?;
            return Err(ApiError::invalid_body(&rejection));
        }
    };

    svc.update(&id, req.into())?;
    Ok(Json(MessageDto::new("Reminder updated successfully.")))
}

/// DELETE /reminders/{id}
pub async fn delete_reminder(
    Extension(svc): Extension<Arc<RemindersService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    svc.delete(&id)?;
    Ok(Json(MessageDto::new("Reminder deleted successfully.")))
}

/// POST /reminders/{id}/mark-completed
pub async fn mark_completed(
    Extension(svc): Extension<Arc<RemindersService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    svc.set_completed(&id, true)?;
    Ok(Json(MessageDto::new("Reminder marked as completed.")))
}

/// POST /reminders/{id}/unmark-completed
pub async fn unmark_completed(
    Extension(svc): Extension<Arc<RemindersService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    svc.set_completed(&id, false)?;
    Ok(Json(MessageDto::new("Reminder unmarked as completed.")))
}

/// PATCH on `/reminders/completed`, `/not-completed` or `/due-today`: the
/// last path segment is the reminder id.
pub async fn update_reserved_id(
    Extension(svc): Extension<Arc<RemindersService>>,
    uri: Uri,
    body: Result<Json<PatchReminderRequest>, JsonRejection>,
) -> ApiResult<Json<MessageDto>> {
    update_reminder(Extension(svc), Path(last_segment(&uri)), body).await
}

/// DELETE on a reserved list path, see [`update_reserved_id`].
pub async fn delete_reserved_id(
    Extension(svc): Extension<Arc<RemindersService>>,
    uri: Uri,
) -> ApiResult<Json<MessageDto>> {
    delete_reminder(Extension(svc), Path(last_segment(&uri))).await
}

fn last_segment(uri: &Uri) -> String {
    uri.path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_owned()
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
