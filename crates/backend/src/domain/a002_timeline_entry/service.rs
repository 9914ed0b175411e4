use super::repository;
use contracts::domain::a002_timeline_entry::aggregate::{TimelineEntry, TimelineEntryDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

use crate::domain::public_view::published_in_site_order;
use crate::shared::api_error::AppError;

pub async fn create(dto: TimelineEntryDto) -> anyhow::Result<TimelineEntry> {
    let mut aggregate = TimelineEntry::new_for_insert(&dto);

    aggregate.validate().map_err(AppError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Created timeline entry {} {}", aggregate.year, aggregate.title);
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: TimelineEntryDto) -> anyhow::Result<TimelineEntry> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(TimelineEntry::element_name().into()))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(AppError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn set_published(id: Uuid, published: bool) -> anyhow::Result<bool> {
    repository::set_published(id, published).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<TimelineEntry>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<TimelineEntry>> {
    repository::list_all().await
}

pub async fn list_published() -> anyhow::Result<Vec<TimelineEntry>> {
    Ok(published_in_site_order(repository::list_all().await?))
}
