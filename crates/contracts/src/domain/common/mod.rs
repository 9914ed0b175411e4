//! Общие типы и трейты для всех агрегатов контента

pub mod aggregate_id;
pub mod aggregate_root;
pub mod content_base;
pub mod entity_metadata;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use content_base::{trimmed_or_none, validate_optional_link, ContentBase};
pub use entity_metadata::EntityMetadata;
