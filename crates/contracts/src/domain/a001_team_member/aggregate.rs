use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    trimmed_or_none, validate_optional_link, AggregateId, AggregateRoot, ContentBase,
    EntityMetadata,
};
use crate::shared::list_query::ListItem;
use crate::shared::slug::{is_valid_slug, slugify};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор участника команды
    TeamMemberId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Участник команды (страница About)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(flatten)]
    pub base: ContentBase<TeamMemberId>,

    pub name: String,
    pub slug: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl TeamMember {
    /// Создать нового участника для вставки в БД
    pub fn new_for_insert(dto: &TeamMemberDto) -> Self {
        let mut member = Self {
            base: ContentBase::new(TeamMemberId::new_v4(), dto.published, dto.position),
            name: String::new(),
            slug: String::new(),
            role: String::new(),
            bio: String::new(),
            image_url: None,
            linkedin_url: None,
        };
        member.update(dto);
        member
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO; пустой slug строится из имени
    pub fn update(&mut self, dto: &TeamMemberDto) {
        self.name = dto.name.trim().to_string();
        self.slug = if dto.slug.trim().is_empty() {
            slugify(&dto.name)
        } else {
            dto.slug.trim().to_string()
        };
        self.role = dto.role.trim().to_string();
        self.bio = dto.bio.clone();
        self.image_url = trimmed_or_none(&dto.image_url);
        self.linkedin_url = trimmed_or_none(&dto.linkedin_url);
        self.base.published = dto.published;
        self.base.position = dto.position;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name is required".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(format!("Invalid slug: '{}'", self.slug));
        }
        if self.role.is_empty() {
            return Err("Role is required".into());
        }
        validate_optional_link("Image URL", &self.image_url)?;
        validate_optional_link("LinkedIn URL", &self.linkedin_url)?;
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.record_write();
    }

    /// DTO для формы редактирования
    pub fn to_dto(&self) -> TeamMemberDto {
        TeamMemberDto {
            id: Some(self.to_string_id()),
            name: self.name.clone(),
            slug: self.slug.clone(),
            role: self.role.clone(),
            bio: self.bio.clone(),
            image_url: self.image_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
            published: self.base.published,
            position: self.base.position,
        }
    }
}

impl AggregateRoot for TeamMember {
    type Id = TeamMemberId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "team_member"
    }

    fn element_name() -> &'static str {
        "Team member"
    }
}

impl ListItem for TeamMember {
    fn item_id(&self) -> String {
        self.to_string_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.slug.as_str(), self.role.as_str()]
    }

    fn is_published(&self) -> bool {
        self.base.published
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

/// DTO для создания/обновления участника команды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMemberDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub published: bool,
    pub position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> TeamMemberDto {
        TeamMemberDto {
            name: "Jane Doe".into(),
            role: "Principal Consultant".into(),
            image_url: Some("  ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_derives_slug_and_normalizes() {
        let member = TeamMember::new_for_insert(&dto());
        assert_eq!(member.slug, "jane-doe");
        assert_eq!(member.image_url, None);
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut member = TeamMember::new_for_insert(&dto());
        member.role.clear();
        assert!(member.validate().is_err());

        let mut member = TeamMember::new_for_insert(&dto());
        member.slug = "Bad Slug".into();
        assert!(member.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let member = TeamMember::new_for_insert(&dto());
        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("isDeleted").is_none());
        assert_eq!(json["published"], false);

        let back: TeamMember = serde_json::from_value(json).unwrap();
        assert_eq!(back.name, member.name);
        assert_eq!(back.base.id, member.base.id);
    }

    #[test]
    fn test_dto_round_trip_through_form() {
        let member = TeamMember::new_for_insert(&dto());
        let mut edited = member.clone();
        let mut form = member.to_dto();
        form.role = "Partner".into();
        edited.update(&form);
        assert_eq!(edited.role, "Partner");
        assert_eq!(edited.slug, member.slug);
    }
}
