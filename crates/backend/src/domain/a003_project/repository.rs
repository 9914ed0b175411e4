use chrono::Utc;
use contracts::domain::a003_project::aggregate::{Project, ProjectId};
use contracts::domain::common::{ContentBase, EntityMetadata};
use contracts::shared::category_matcher::parse_assignments;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub client_name: Option<String>,
    pub project_url: Option<String>,
    /// JSON массив строк
    pub technologies: String,
    /// JSON массив назначений `{category, subCategory}`; null = нет назначений
    pub categories: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub position: Option<i32>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        // Битый JSON в колонке трактуется как пустой список
        let technologies: Vec<String> = serde_json::from_str(&m.technologies).unwrap_or_default();
        let categories = parse_assignments(&m.categories.map(Value::String).unwrap_or(Value::Null))
            .into_list();

        Project {
            base: ContentBase::with_metadata(ProjectId(uuid), m.published, m.position, metadata),
            title: m.title,
            slug: m.slug,
            summary: m.summary,
            content: m.content,
            image_url: m.image_url,
            client_name: m.client_name,
            project_url: m.project_url,
            technologies,
            categories,
            featured: m.featured,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Project) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        title: Set(aggregate.title.clone()),
        slug: Set(aggregate.slug.clone()),
        summary: Set(aggregate.summary.clone()),
        content: Set(aggregate.content.clone()),
        image_url: Set(aggregate.image_url.clone()),
        client_name: Set(aggregate.client_name.clone()),
        project_url: Set(aggregate.project_url.clone()),
        technologies: Set(serde_json::to_string(&aggregate.technologies)?),
        categories: Set(Some(serde_json::to_string(&aggregate.categories)?)),
        featured: Set(aggregate.featured),
        published: Set(aggregate.base.published),
        position: Set(aggregate.base.position),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Project>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<Project>> {
    let result = Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Project) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Project) -> anyhow::Result<()> {
    let mut active = to_active(aggregate)?;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn set_published(id: Uuid, published: bool) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Published, Expr::value(published))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(technologies: &str, categories: Option<&str>) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            title: "Data Platform".into(),
            slug: "data-platform".into(),
            summary: String::new(),
            content: String::new(),
            image_url: None,
            client_name: None,
            project_url: None,
            technologies: technologies.into(),
            categories: categories.map(str::to_string),
            featured: false,
            published: true,
            position: None,
            is_deleted: false,
            created_at: None,
            updated_at: None,
            version: 1,
        }
    }

    #[test]
    fn test_model_with_json_columns() {
        let project: Project = model(
            r#"["Rust","Kafka"]"#,
            Some(r#"[{"category":"Data & AI","subCategory":"Data Analytics"}]"#),
        )
        .into();
        assert_eq!(project.technologies, vec!["Rust", "Kafka"]);
        assert_eq!(project.categories.len(), 1);
        assert_eq!(project.categories[0].sub_category, "Data Analytics");
    }

    #[test]
    fn test_model_with_broken_columns_degrades_to_empty() {
        let project: Project = model("oops", Some("{not json")).into();
        assert!(project.technologies.is_empty());
        assert!(project.categories.is_empty());

        let project: Project = model("[]", None).into();
        assert!(project.categories.is_empty());
    }
}
