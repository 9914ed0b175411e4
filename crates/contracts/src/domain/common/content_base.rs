use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовая часть любого элемента контента: id, публикация, ручной порядок и метаданные
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBase<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Опубликовано на сайте (false = черновик)
    #[serde(default)]
    pub published: bool,
    /// Ручная позиция для сортировки; None сортируется после всех заданных
    #[serde(default)]
    pub position: Option<i32>,
    /// Метаданные жизненного цикла
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl<Id> ContentBase<Id> {
    /// Создать базу для нового агрегата
    pub fn new(id: Id, published: bool, position: Option<i32>) -> Self {
        Self {
            id,
            published,
            position,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать базу с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(
        id: Id,
        published: bool,
        position: Option<i32>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            published,
            position,
            metadata,
        }
    }

    pub fn record_write(&mut self) {
        self.metadata.record_write();
    }
}

/// Пустую или пробельную строку превратить в None, остальное обрезать
pub fn trimmed_or_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ссылка: абсолютный http(s) URL или путь от корня сайта (загруженные файлы)
pub fn is_valid_link(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://") || value.starts_with('/')
}

/// Проверить необязательную ссылку; `field` попадает в сообщение об ошибке
pub fn validate_optional_link(field: &str, value: &Option<String>) -> Result<(), String> {
    match value.as_deref() {
        Some(link) if !is_valid_link(link) => Err(format!(
            "{} must be an http(s) URL or a site path",
            field
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_or_none() {
        assert_eq!(trimmed_or_none(&None), None);
        assert_eq!(trimmed_or_none(&Some("   ".into())), None);
        assert_eq!(trimmed_or_none(&Some(" x ".into())), Some("x".to_string()));
    }

    #[test]
    fn test_links() {
        assert!(validate_optional_link("Image", &None).is_ok());
        assert!(validate_optional_link("Image", &Some("/uploads/team/a.png".into())).is_ok());
        assert!(validate_optional_link("Image", &Some("https://cdn.example.com/a.png".into())).is_ok());
        assert!(validate_optional_link("Image", &Some("javascript:alert(1)".into())).is_err());
    }
}
