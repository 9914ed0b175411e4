use crate::shared::api_utils::{delete, get_json, post_empty, post_json, put_json};
use contracts::domain::a003_project::aggregate::{Project, ProjectDto};
use contracts::shared::api::{ProjectQuery, PublishRequest};

const ADMIN_PATH: &str = "/api/admin/projects";

/// Опубликованные проекты; фильтры из `query` применяет сервер
pub async fn fetch_published(query: &ProjectQuery) -> Result<Vec<Project>, String> {
    let qs = query.to_query_string();
    if qs.is_empty() {
        get_json("/api/projects").await
    } else {
        get_json(&format!("/api/projects?{}", qs)).await
    }
}

/// Опубликованный проект по slug
pub async fn fetch_published_by_slug(slug: &str) -> Result<Project, String> {
    get_json(&format!("/api/projects/{}", urlencoding::encode(slug))).await
}

pub async fn fetch_all() -> Result<Vec<Project>, String> {
    get_json(ADMIN_PATH).await
}

pub async fn fetch_by_id(id: &str) -> Result<Project, String> {
    get_json(&format!("{}/{}", ADMIN_PATH, id)).await
}

/// Создать или обновить, в зависимости от наличия id
pub async fn save(dto: &ProjectDto) -> Result<Project, String> {
    match dto.id.as_deref() {
        Some(id) => put_json(&format!("{}/{}", ADMIN_PATH, id), dto).await,
        None => post_json(ADMIN_PATH, dto).await,
    }
}

pub async fn set_published(id: &str, published: bool) -> Result<(), String> {
    post_empty(
        &format!("{}/{}/publish", ADMIN_PATH, id),
        &PublishRequest { published },
    )
    .await
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("{}/{}", ADMIN_PATH, id)).await
}

/// Вставить демонстрационные проекты; возвращает число добавленных
pub async fn insert_test_data() -> Result<usize, String> {
    let response: serde_json::Value = post_json(&format!("{}/testdata", ADMIN_PATH), &()).await?;
    Ok(response
        .get("inserted")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as usize)
}
