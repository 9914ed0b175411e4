use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    trimmed_or_none, validate_optional_link, AggregateId, AggregateRoot, ContentBase,
    EntityMetadata,
};
use crate::shared::list_query::ListItem;

/// Допустимый диапазон оценки
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор отзыва
    TestimonialId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Отзыв клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(flatten)]
    pub base: ContentBase<TestimonialId>,

    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
    pub rating: u8,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl Testimonial {
    pub fn new_for_insert(dto: &TestimonialDto) -> Self {
        let mut testimonial = Self {
            base: ContentBase::new(TestimonialId::new_v4(), dto.published, dto.position),
            author_name: String::new(),
            author_role: String::new(),
            company: String::new(),
            message: String::new(),
            rating: MAX_RATING,
            avatar_url: None,
            verified: false,
        };
        testimonial.update(dto);
        testimonial
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &TestimonialDto) {
        self.author_name = dto.author_name.trim().to_string();
        self.author_role = dto.author_role.trim().to_string();
        self.company = dto.company.trim().to_string();
        self.message = dto.message.trim().to_string();
        self.rating = dto.rating;
        self.avatar_url = trimmed_or_none(&dto.avatar_url);
        self.verified = dto.verified;
        self.base.published = dto.published;
        self.base.position = dto.position;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.author_name.is_empty() {
            return Err("Author name is required".into());
        }
        if self.message.is_empty() {
            return Err("Message is required".into());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            ));
        }
        validate_optional_link("Avatar URL", &self.avatar_url)?;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.record_write();
    }

    pub fn to_dto(&self) -> TestimonialDto {
        TestimonialDto {
            id: Some(self.to_string_id()),
            author_name: self.author_name.clone(),
            author_role: self.author_role.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
            rating: self.rating,
            avatar_url: self.avatar_url.clone(),
            verified: self.verified,
            published: self.base.published,
            position: self.base.position,
        }
    }
}

impl AggregateRoot for Testimonial {
    type Id = TestimonialId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "testimonial"
    }

    fn element_name() -> &'static str {
        "Testimonial"
    }
}

impl ListItem for Testimonial {
    fn item_id(&self) -> String {
        self.to_string_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.author_name.as_str(),
            self.company.as_str(),
            self.message.as_str(),
        ]
    }

    fn is_published(&self) -> bool {
        self.base.published
    }

    fn flag(&self) -> Option<bool> {
        Some(self.verified)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    fn position(&self) -> Option<i32> {
        self.base.position
    }

    fn rating(&self) -> Option<u8> {
        Some(self.rating)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialDto {
    pub id: Option<String>,
    pub author_name: String,
    pub author_role: String,
    pub company: String,
    pub message: String,
    pub rating: u8,
    pub avatar_url: Option<String>,
    pub verified: bool,
    pub published: bool,
    pub position: Option<i32>,
}

impl Default for TestimonialDto {
    fn default() -> Self {
        Self {
            id: None,
            author_name: String::new(),
            author_role: String::new(),
            company: String::new(),
            message: String::new(),
            rating: MAX_RATING,
            avatar_url: None,
            verified: false,
            published: false,
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(rating: u8) -> TestimonialDto {
        TestimonialDto {
            author_name: "Sam Lee".into(),
            company: "Northwind".into(),
            message: "Delivered on time.".into(),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Testimonial::new_for_insert(&dto(1)).validate().is_ok());
        assert!(Testimonial::new_for_insert(&dto(5)).validate().is_ok());
        assert!(Testimonial::new_for_insert(&dto(0)).validate().is_err());
        assert!(Testimonial::new_for_insert(&dto(6)).validate().is_err());
    }

    #[test]
    fn test_default_dto_rating_is_max() {
        assert_eq!(TestimonialDto::default().rating, MAX_RATING);
        let parsed: TestimonialDto = serde_json::from_str(r#"{"authorName":"A"}"#).unwrap();
        assert_eq!(parsed.rating, MAX_RATING);
    }

    #[test]
    fn test_list_item_exposes_flag_and_rating() {
        let mut form = dto(4);
        form.verified = true;
        let t = Testimonial::new_for_insert(&form);
        assert_eq!(t.flag(), Some(true));
        assert_eq!(ListItem::rating(&t), Some(4));
    }
}
