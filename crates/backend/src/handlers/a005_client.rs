use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a005_client::aggregate::{Client, ClientDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::PublishRequest;

use super::parse_id;
use crate::domain::a005_client::service;
use crate::shared::api_error::{ApiResult, AppError};

fn not_found() -> AppError {
    AppError::NotFound(Client::element_name().into())
}

/// GET /api/clients
pub async fn list_published() -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(service::list_published().await?))
}

/// GET /api/admin/clients
pub async fn list_all() -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/clients/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Client>> {
    let uuid = parse_id(&id)?;
    service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/admin/clients
pub async fn create(Json(dto): Json<ClientDto>) -> ApiResult<(StatusCode, Json<Client>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/clients/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ClientDto>,
) -> ApiResult<Json<Client>> {
    let uuid = parse_id(&id)?;
    Ok(Json(service::update(uuid, dto).await?))
}

/// POST /api/admin/clients/:id/publish
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

/// DELETE /api/admin/clients/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}
