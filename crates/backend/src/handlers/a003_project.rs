use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_project::aggregate::{Project, ProjectDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{ProjectQuery, PublishRequest};
use serde_json::json;
use std::collections::HashMap;

use super::parse_id;
use crate::domain::a003_project::service;
use crate::shared::api_error::{ApiResult, AppError};

fn not_found() -> AppError {
    AppError::NotFound(Project::element_name().into())
}

/// Разбор параметров публичного списка; пустые значения = параметр не задан
pub fn parse_project_query(params: &HashMap<String, String>) -> Result<ProjectQuery, AppError> {
    let non_empty = |key: &str| {
        params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let featured = match non_empty("featured").as_deref() {
        None => None,
        Some("true") | Some("1") => Some(true),
        Some("false") | Some("0") => Some(false),
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Invalid 'featured' value: '{}'",
                other
            )))
        }
    };

    Ok(ProjectQuery {
        category: non_empty("category"),
        sub: non_empty("sub"),
        featured,
    })
}

/// GET /api/projects?category=&sub=&featured=
pub async fn list_published(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Project>>> {
    let query = parse_project_query(&params)?;
    Ok(Json(service::list_published(&query).await?))
}

/// GET /api/projects/:slug
pub async fn get_published_by_slug(Path(slug): Path<String>) -> ApiResult<Json<Project>> {
    service::get_published_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// GET /api/admin/projects
pub async fn list_all() -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/projects/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Project>> {
    let uuid = parse_id(&id)?;
    service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/admin/projects
pub async fn create(Json(dto): Json<ProjectDto>) -> ApiResult<(StatusCode, Json<Project>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/projects/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProjectDto>,
) -> ApiResult<Json<Project>> {
    let uuid = parse_id(&id)?;
    Ok(Json(service::update(uuid, dto).await?))
}

/// POST /api/admin/projects/:id/publish
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

/// DELETE /api/admin/projects/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await? {
        true => Ok(StatusCode::OK),
        false => Err(not_found()),
    }
}

/// POST /api/admin/projects/testdata
pub async fn insert_test_data() -> ApiResult<Json<serde_json::Value>> {
    let inserted = service::insert_test_data().await?;
    Ok(Json(json!({ "inserted": inserted })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_full_query() {
        let q = parse_project_query(&params(&[
            ("category", "technology"),
            ("sub", "web-development"),
            ("featured", "true"),
        ]))
        .unwrap();
        assert_eq!(q.category.as_deref(), Some("technology"));
        assert_eq!(q.sub.as_deref(), Some("web-development"));
        assert_eq!(q.featured, Some(true));
    }

    #[test]
    fn test_parse_empty_values_mean_unset() {
        let q = parse_project_query(&params(&[("category", ""), ("featured", " ")])).unwrap();
        assert_eq!(q, ProjectQuery::default());
    }

    #[test]
    fn test_parse_invalid_featured() {
        let err = parse_project_query(&params(&[("featured", "maybe")])).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
