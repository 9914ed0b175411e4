use super::repository;
use contracts::domain::a004_testimonial::aggregate::{Testimonial, TestimonialDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

use crate::domain::public_view::published_in_site_order;
use crate::shared::api_error::AppError;

pub async fn create(dto: TestimonialDto) -> anyhow::Result<Testimonial> {
    let mut aggregate = Testimonial::new_for_insert(&dto);

    aggregate.validate().map_err(AppError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!(
        "Created testimonial from {} ({}/5)",
        aggregate.author_name,
        aggregate.rating
    );
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: TestimonialDto) -> anyhow::Result<Testimonial> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(Testimonial::element_name().into()))?;

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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Testimonial>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Testimonial>> {
    repository::list_all().await
}

pub async fn list_published() -> anyhow::Result<Vec<Testimonial>> {
    Ok(published_in_site_order(repository::list_all().await?))
}
