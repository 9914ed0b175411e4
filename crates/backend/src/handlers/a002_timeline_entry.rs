use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_timeline_entry::aggregate::{TimelineEntry, TimelineEntryDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::PublishRequest;

use super::parse_id;
use crate::domain::a002_timeline_entry::service;
use crate::shared::api_error::{ApiResult, AppError};

fn not_found() -> AppError {
    AppError::NotFound(TimelineEntry::element_name().into())
}

/// GET /api/timeline
pub async fn list_published() -> ApiResult<Json<Vec<TimelineEntry>>> {
    Ok(Json(service::list_published().await?))
}

/// GET /api/admin/timeline
pub async fn list_all() -> ApiResult<Json<Vec<TimelineEntry>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/timeline/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<TimelineEntry>> {
    let uuid = parse_id(&id)?;
    service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/admin/timeline
pub async fn create(Json(dto): Json<TimelineEntryDto>) -> ApiResult<(StatusCode, Json<TimelineEntry>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/timeline/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<TimelineEntryDto>,
) -> ApiResult<Json<TimelineEntry>> {
    let uuid = parse_id(&id)?;
    Ok(Json(service::update(uuid, dto).await?))
}

/// POST /api/admin/timeline/:id/publish
pub async fn set_published(
    Path(id): Path<String>,
    Json(req): Json<PublishRequest>,
) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::set_published(uuid, req.published).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}

/// DELETE /api/admin/timeline/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}
