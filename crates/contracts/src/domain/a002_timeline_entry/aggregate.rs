use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot, ContentBase, EntityMetadata};
use crate::shared::list_query::ListItem;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор записи хронологии
    TimelineEntryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Веха в истории компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub base: ContentBase<TimelineEntryId>,

    /// Год как отображаемая строка ("2019", "2020-2021")
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TimelineEntry {
    pub fn new_for_insert(dto: &TimelineEntryDto) -> Self {
        let mut entry = Self {
            base: ContentBase::new(TimelineEntryId::new_v4(), dto.published, dto.position),
            year: String::new(),
            title: String::new(),
            description: String::new(),
        };
        entry.update(dto);
        entry
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &TimelineEntryDto) {
        self.year = dto.year.trim().to_string();
        self.title = dto.title.trim().to_string();
        self.description = dto.description.clone();
        self.base.published = dto.published;
        self.base.position = dto.position;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.year.is_empty() {
            return Err("Year is required".into());
        }
        if self.year.chars().count() > 16 {
            return Err("Year is too long".into());
        }
        if self.title.is_empty() {
            return Err("Title is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.record_write();
    }

    pub fn to_dto(&self) -> TimelineEntryDto {
        TimelineEntryDto {
            id: Some(self.to_string_id()),
            year: self.year.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            published: self.base.published,
            position: self.base.position,
        }
    }
}

impl AggregateRoot for TimelineEntry {
    type Id = TimelineEntryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "timeline_entry"
    }

    fn element_name() -> &'static str {
        "Timeline entry"
    }
}

impl ListItem for TimelineEntry {
    fn item_id(&self) -> String {
        self.to_string_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.year.as_str(), self.title.as_str(), self.description.as_str()]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEntryDto {
    pub id: Option<String>,
    pub year: String,
    pub title: String,
    pub description: String,
    pub published: bool,
    pub position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let dto = TimelineEntryDto {
            year: " 2015 ".into(),
            title: "Founded".into(),
            ..Default::default()
        };
        let entry = TimelineEntry::new_for_insert(&dto);
        assert_eq!(entry.year, "2015");
        assert!(entry.validate().is_ok());

        let mut missing_year = entry.clone();
        missing_year.year.clear();
        assert_eq!(missing_year.validate().unwrap_err(), "Year is required");
    }

    #[test]
    fn test_search_covers_description() {
        let dto = TimelineEntryDto {
            year: "2020".into(),
            title: "Expansion".into(),
            description: "Opened the Berlin office".into(),
            ..Default::default()
        };
        let entry = TimelineEntry::new_for_insert(&dto);
        assert!(crate::shared::list_query::matches_search(&entry, "berlin"));
    }
}
