use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Служебные поля записи: время создания / изменения, мягкое удаление и счетчик записей.
///
/// `is_deleted` и `version` наружу не сериализуются. Версия только растет;
/// конфликтов она не проверяет, последняя запись побеждает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Отметить очередную запись в БД
    pub fn record_write(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_write() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        meta.record_write();
        meta.record_write();
        assert_eq!(meta.version, 2);
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at >= created);
    }

    #[test]
    fn test_internal_fields_are_not_serialized() {
        let json = serde_json::to_value(EntityMetadata::new()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("isDeleted").is_none());
        assert!(json.get("version").is_none());
    }
}
