use super::repository;
use contracts::domain::a003_project::aggregate::{Project, ProjectDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::ProjectQuery;
use contracts::shared::category_matcher::{HasCategories, ProjectCategoryAssignment};
use contracts::shared::taxonomy::taxonomy;
use uuid::Uuid;

use crate::domain::public_view::published_in_site_order;
use crate::shared::api_error::AppError;
use crate::shared::sanitize::sanitize_html;

/// Slug проекта уникален среди неудаленных проектов
async fn ensure_unique_slug(aggregate: &Project) -> anyhow::Result<()> {
    if let Some(existing) = repository::get_by_slug(&aggregate.slug).await? {
        if existing.base.id != aggregate.base.id {
            return Err(AppError::Validation(format!(
                "Slug '{}' is already used by another project",
                aggregate.slug
            ))
            .into());
        }
    }
    Ok(())
}

/// Создание нового проекта
pub async fn create(dto: ProjectDto) -> anyhow::Result<Project> {
    let mut aggregate = Project::new_for_insert(&dto);
    aggregate.content = sanitize_html(&aggregate.content);

    aggregate.validate().map_err(AppError::Validation)?;
    ensure_unique_slug(&aggregate).await?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!(
        "Created project '{}' with {} category assignment(s)",
        aggregate.slug,
        aggregate.categories.len()
    );
    Ok(aggregate)
}

/// Обновление существующего проекта
pub async fn update(id: Uuid, dto: ProjectDto) -> anyhow::Result<Project> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(Project::element_name().into()))?;

    aggregate.update(&dto);
    aggregate.content = sanitize_html(&aggregate.content);

    aggregate.validate().map_err(AppError::Validation)?;
    ensure_unique_slug(&aggregate).await?;
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Project>> {
    repository::list_all().await
}

/// Применить фильтр публичного списка к уже упорядоченным проектам
pub fn apply_query(items: Vec<Project>, query: &ProjectQuery) -> Vec<Project> {
    let category = query.category.as_deref().filter(|s| !s.is_empty());
    // подуслуга без категории игнорируется
    let sub = category.and(query.sub.as_deref().filter(|s| !s.is_empty()));

    items
        .into_iter()
        .filter(|p| p.matches_category(taxonomy(), category, sub))
        .filter(|p| query.featured.map_or(true, |featured| p.featured == featured))
        .collect()
}

/// Опубликованные проекты с фильтром по категории / подуслуге / featured
pub async fn list_published(query: &ProjectQuery) -> anyhow::Result<Vec<Project>> {
    let ordered = published_in_site_order(repository::list_all().await?);
    Ok(apply_query(ordered, query))
}

/// Опубликованный проект по slug
pub async fn get_published_by_slug(slug: &str) -> anyhow::Result<Option<Project>> {
    Ok(repository::get_by_slug(slug)
        .await?
        .filter(|p| p.base.published))
}

/// Вставка демонстрационных проектов
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let data = vec![
        ProjectDto {
            title: "Retail Platform Modernization".into(),
            summary: "Moved a monolithic storefront to cloud-native services.".into(),
            content: "<h2>Challenge</h2><p>Seasonal traffic spikes took the shop offline.</p>"
                .into(),
            client_name: Some("Northwind Traders".into()),
            technologies: vec!["Rust".into(), "Kubernetes".into(), "PostgreSQL".into()],
            categories: vec![
                ProjectCategoryAssignment::new("Technology", "Cloud Solutions"),
                ProjectCategoryAssignment::new("Technology", "Software Architecture"),
            ],
            featured: true,
            published: true,
            position: Some(1),
            ..Default::default()
        },
        ProjectDto {
            title: "Banking App Redesign".into(),
            summary: "Research-driven redesign of a mobile banking experience.".into(),
            content: "<p>Task success rate grew from 61% to 89%.</p>".into(),
            client_name: Some("Contoso Bank".into()),
            technologies: vec!["Figma".into(), "Kotlin".into(), "Swift".into()],
            categories: vec![
                ProjectCategoryAssignment::new("Design", "UI/UX Design"),
                ProjectCategoryAssignment::new("Technology", "Mobile Development"),
            ],
            published: true,
            position: Some(2),
            ..Default::default()
        },
        ProjectDto {
            title: "Demand Forecasting Engine".into(),
            summary: "Machine learning forecasts for a logistics network.".into(),
            content: "<p>Forecast error dropped by a third.</p>".into(),
            client_name: Some("Fabrikam Logistics".into()),
            technologies: vec!["Python".into(), "Spark".into()],
            categories: vec![
                ProjectCategoryAssignment::new("Data & AI", "Machine Learning"),
                ProjectCategoryAssignment::new("Data & AI", "Data Analytics"),
            ],
            featured: true,
            published: true,
            ..Default::default()
        },
        ProjectDto {
            title: "ISO 27001 Readiness".into(),
            summary: "Gap analysis and remediation roadmap ahead of certification.".into(),
            content: "<p>Certification passed on the first audit.</p>".into(),
            client_name: Some("Tailspin Health".into()),
            categories: vec![
                ProjectCategoryAssignment::new("Security", "Compliance"),
                ProjectCategoryAssignment::new("Security", "Security Audit"),
            ],
            published: true,
            ..Default::default()
        },
        ProjectDto {
            title: "Cloud Strategy Workshop".into(),
            summary: "Draft engagement, not yet public.".into(),
            categories: vec![ProjectCategoryAssignment::new("Consulting", "IT Strategy")],
            published: false,
            ..Default::default()
        },
    ];

    let mut inserted = 0;
    for dto in data {
        let slug = contracts::shared::slug::slugify(&dto.title);
        if repository::get_by_slug(&slug).await?.is_some() {
            tracing::debug!("Demo project '{}' already present, skipping", slug);
            continue;
        }
        create(dto).await?;
        inserted += 1;
    }

    tracing::info!("Inserted {} demo project(s)", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: bool, pairs: &[(&str, &str)]) -> Project {
        Project::new_for_insert(&ProjectDto {
            title: title.into(),
            featured,
            published: true,
            categories: pairs
                .iter()
                .map(|(c, s)| ProjectCategoryAssignment::new(*c, *s))
                .collect(),
            ..Default::default()
        })
    }

    fn sample() -> Vec<Project> {
        vec![
            project("Web Shop", true, &[("Technology", "Web Development")]),
            project("Brand Refresh", false, &[("Design", "Branding")]),
            project("Pen Test", false, &[("Security", "Penetration Testing")]),
        ]
    }

    fn titles(items: &[Project]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_apply_query_by_category_and_sub() {
        let query = ProjectQuery {
            category: Some("technology".into()),
            sub: Some("web-development".into()),
            featured: None,
        };
        assert_eq!(titles(&apply_query(sample(), &query)), vec!["Web Shop"]);

        let query = ProjectQuery {
            category: Some("design".into()),
            ..Default::default()
        };
        assert_eq!(titles(&apply_query(sample(), &query)), vec!["Brand Refresh"]);
    }

    #[test]
    fn test_apply_query_ignores_sub_without_category() {
        let query = ProjectQuery {
            sub: Some("branding".into()),
            ..Default::default()
        };
        assert_eq!(apply_query(sample(), &query).len(), 3);
    }

    #[test]
    fn test_apply_query_featured_and_unknown_category() {
        let featured = ProjectQuery {
            featured: Some(true),
            ..Default::default()
        };
        assert_eq!(titles(&apply_query(sample(), &featured)), vec!["Web Shop"]);

        let unknown = ProjectQuery {
            category: Some("retired".into()),
            ..Default::default()
        };
        assert!(apply_query(sample(), &unknown).is_empty());
    }
}
