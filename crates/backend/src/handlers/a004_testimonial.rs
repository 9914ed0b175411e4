use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_testimonial::aggregate::{Testimonial, TestimonialDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::PublishRequest;

use super::parse_id;
use crate::domain::a004_testimonial::service;
use crate::shared::api_error::{ApiResult, AppError};

fn not_found() -> AppError {
    AppError::NotFound(Testimonial::element_name().into())
}

/// GET /api/testimonials
pub async fn list_published() -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(service::list_published().await?))
}

/// GET /api/admin/testimonials
pub async fn list_all() -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/testimonials/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Testimonial>> {
    let uuid = parse_id(&id)?;
    service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/admin/testimonials
pub async fn create(Json(dto): Json<TestimonialDto>) -> ApiResult<(StatusCode, Json<Testimonial>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/testimonials/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<TestimonialDto>,
) -> ApiResult<Json<Testimonial>> {
    let uuid = parse_id(&id)?;
    Ok(Json(service::update(uuid, dto).await?))
}

/// POST /api/admin/testimonials/:id/publish
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

/// DELETE /api/admin/testimonials/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}
