use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_team_member::aggregate::{TeamMember, TeamMemberDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::PublishRequest;

use super::parse_id;
use crate::domain::a001_team_member::service;
use crate::shared::api_error::{ApiResult, AppError};

fn not_found() -> AppError {
    AppError::NotFound(TeamMember::element_name().into())
}

/// GET /api/team
pub async fn list_published() -> ApiResult<Json<Vec<TeamMember>>> {
    Ok(Json(service::list_published().await?))
}

/// GET /api/admin/team
pub async fn list_all() -> ApiResult<Json<Vec<TeamMember>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/team/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<TeamMember>> {
    let uuid = parse_id(&id)?;
    service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/admin/team
pub async fn create(Json(dto): Json<TeamMemberDto>) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/team/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<TeamMemberDto>,
) -> ApiResult<Json<TeamMember>> {
    let uuid = parse_id(&id)?;
    Ok(Json(service::update(uuid, dto).await?))
}

/// POST /api/admin/team/:id/publish
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

/// DELETE /api/admin/team/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_id_rejected_before_storage() {
        let err = get_by_id(Path("not-a-uuid".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("not-a-uuid"));

        let err = delete(Path("42".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
