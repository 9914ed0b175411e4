use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    trimmed_or_none, validate_optional_link, AggregateId, AggregateRoot, ContentBase,
    EntityMetadata,
};
use crate::shared::category_matcher::{
    deserialize_assignments, validate_assignments, HasCategories, ProjectCategoryAssignment,
};
use crate::shared::list_query::ListItem;
use crate::shared::slug::{is_valid_slug, slugify};
use crate::shared::taxonomy::taxonomy;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор проекта портфолио
    ProjectId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Проект портфолио
///
/// `categories` хранит пары (категория, подуслуга) отображаемыми именами
/// таксономии. При чтении принимается массив, JSON-строка или null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub base: ContentBase<ProjectId>,

    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    /// HTML тело кейса (санитизируется на backend перед записью)
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_assignments")]
    pub categories: Vec<ProjectCategoryAssignment>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn new_for_insert(dto: &ProjectDto) -> Self {
        let mut project = Self {
            base: ContentBase::new(ProjectId::new_v4(), dto.published, dto.position),
            title: String::new(),
            slug: String::new(),
            summary: String::new(),
            content: String::new(),
            image_url: None,
            client_name: None,
            project_url: None,
            technologies: Vec::new(),
            categories: Vec::new(),
            featured: false,
        };
        project.update(dto);
        project
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO.
    ///
    /// Пустые технологии отбрасываются, пустой slug строится из заголовка.
    pub fn update(&mut self, dto: &ProjectDto) {
        self.title = dto.title.trim().to_string();
        self.slug = if dto.slug.trim().is_empty() {
            slugify(&dto.title)
        } else {
            dto.slug.trim().to_string()
        };
        self.summary = dto.summary.trim().to_string();
        self.content = dto.content.clone();
        self.image_url = trimmed_or_none(&dto.image_url);
        self.client_name = trimmed_or_none(&dto.client_name);
        self.project_url = trimmed_or_none(&dto.project_url);
        self.technologies = dto
            .technologies
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        self.categories = dto.categories.clone();
        self.featured = dto.featured;
        self.base.published = dto.published;
        self.base.position = dto.position;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("Title is required".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(format!("Invalid slug: '{}'", self.slug));
        }
        validate_optional_link("Image URL", &self.image_url)?;
        validate_optional_link("Project URL", &self.project_url)?;
        validate_assignments(&self.categories, taxonomy())?;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.record_write();
    }

    pub fn to_dto(&self) -> ProjectDto {
        ProjectDto {
            id: Some(self.to_string_id()),
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            image_url: self.image_url.clone(),
            client_name: self.client_name.clone(),
            project_url: self.project_url.clone(),
            technologies: self.technologies.clone(),
            categories: self.categories.clone(),
            featured: self.featured,
            published: self.base.published,
            position: self.base.position,
        }
    }
}

impl HasCategories for Project {
    fn category_assignments(&self) -> &[ProjectCategoryAssignment] {
        &self.categories
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Project"
    }
}

impl ListItem for Project {
    fn item_id(&self) -> String {
        self.to_string_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.slug.as_str(), self.summary.as_str()];
        if let Some(client) = self.client_name.as_deref() {
            fields.push(client);
        }
        fields
    }

    fn is_published(&self) -> bool {
        self.base.published
    }

    fn flag(&self) -> Option<bool> {
        Some(self.featured)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    fn position(&self) -> Option<i32> {
        self.base.position
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDto {
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub client_name: Option<String>,
    pub project_url: Option<String>,
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "deserialize_assignments")]
    pub categories: Vec<ProjectCategoryAssignment>,
    pub featured: bool,
    pub published: bool,
    pub position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto() -> ProjectDto {
        ProjectDto {
            title: "Cloud Migration for Acme".into(),
            summary: "Lift and shift".into(),
            technologies: vec!["Rust".into(), " ".into(), "AWS".into()],
            categories: vec![ProjectCategoryAssignment::new("Technology", "Cloud Solutions")],
            published: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_for_insert() {
        let project = Project::new_for_insert(&dto());
        assert_eq!(project.slug, "cloud-migration-for-acme");
        assert_eq!(project.technologies, vec!["Rust", "AWS"]);
        assert!(project.validate().is_ok());
        assert!(project.matches_category(taxonomy(), Some("technology"), Some("cloud-solutions")));
    }

    #[test]
    fn test_duplicate_assignment_rejected() {
        let mut form = dto();
        form.categories
            .push(ProjectCategoryAssignment::new("Technology", "Cloud Solutions"));
        let project = Project::new_for_insert(&form);
        assert!(project.validate().unwrap_err().contains("Duplicate"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut form = dto();
        form.categories = vec![ProjectCategoryAssignment::new("Marketing", "SEO")];
        assert!(Project::new_for_insert(&form).validate().is_err());
    }

    #[test]
    fn test_categories_accept_string_payload() {
        let project = Project::new_for_insert(&dto());
        let mut json = serde_json::to_value(&project).unwrap();
        json["categories"] =
            json!("[{\"category\":\"Design\",\"subCategory\":\"Branding\"}]");
        let back: Project = serde_json::from_value(json).unwrap();
        assert_eq!(
            back.categories,
            vec![ProjectCategoryAssignment::new("Design", "Branding")]
        );
    }

    #[test]
    fn test_json_shape() {
        let project = Project::new_for_insert(&dto());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["categories"][0]["subCategory"], "Cloud Solutions");
        assert_eq!(json["featured"], false);
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("version").is_none());
    }

    #[test]
    fn test_search_skips_technologies() {
        use crate::shared::list_query::matches_search;
        let project = Project::new_for_insert(&dto());
        assert!(matches_search(&project, "acme"));
        assert!(matches_search(&project, "shift"));
        assert!(!matches_search(&project, "aws"));
    }
}
