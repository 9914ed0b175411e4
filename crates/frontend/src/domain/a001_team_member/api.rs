use crate::shared::api_utils::{delete, get_json, post_empty, post_json, put_json};
use contracts::domain::a001_team_member::aggregate::{TeamMember, TeamMemberDto};
use contracts::shared::api::PublishRequest;

const ADMIN_PATH: &str = "/api/admin/team";

/// Опубликованные участники для страницы About
pub async fn fetch_published() -> Result<Vec<TeamMember>, String> {
    get_json("/api/team").await
}

pub async fn fetch_all() -> Result<Vec<TeamMember>, String> {
    get_json(ADMIN_PATH).await
}

pub async fn fetch_by_id(id: &str) -> Result<TeamMember, String> {
    get_json(&format!("{}/{}", ADMIN_PATH, id)).await
}

/// Создать или обновить, в зависимости от наличия id
pub async fn save(dto: &TeamMemberDto) -> Result<TeamMember, String> {
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
