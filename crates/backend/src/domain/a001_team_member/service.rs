use super::repository;
use contracts::domain::a001_team_member::aggregate::{TeamMember, TeamMemberDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

use crate::domain::public_view::published_in_site_order;
use crate::shared::api_error::AppError;

/// Создание нового участника команды
pub async fn create(dto: TeamMemberDto) -> anyhow::Result<TeamMember> {
    let mut aggregate = TeamMember::new_for_insert(&dto);

    aggregate.validate().map_err(AppError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Created team member {} ({})", aggregate.name, aggregate.to_string_id());
    Ok(aggregate)
}

/// Обновление существующего участника
pub async fn update(id: Uuid, dto: TeamMemberDto) -> anyhow::Result<TeamMember> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(TeamMember::element_name().into()))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(AppError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Переключение публикации
pub async fn set_published(id: Uuid, published: bool) -> anyhow::Result<bool> {
    repository::set_published(id, published).await
}

/// Мягкое удаление
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<TeamMember>> {
    repository::get_by_id(id).await
}

/// Все записи, включая черновики (админка)
pub async fn list_all() -> anyhow::Result<Vec<TeamMember>> {
    repository::list_all().await
}

/// Опубликованные записи в порядке сайта
pub async fn list_published() -> anyhow::Result<Vec<TeamMember>> {
    Ok(published_in_site_order(repository::list_all().await?))
}
