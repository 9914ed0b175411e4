//! Полезные нагрузки REST API, общие для backend и frontend

use serde::{Deserialize, Serialize};

/// Тело любого ответа с ошибкой (non-2xx)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Ответ эндпоинта загрузки файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Ответ на создание записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Тело запроса переключения публикации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub published: bool,
}

/// Параметры публичного списка проектов
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuery {
    /// slug категории
    pub category: Option<String>,
    /// slug подуслуги (учитывается только вместе с category)
    pub sub: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectQuery {
    /// Строка запроса без ведущего '?'; пустые параметры опускаются
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("category={}", category));
            if let Some(sub) = self.sub.as_deref().filter(|s| !s.is_empty()) {
                parts.push(format!("sub={}", sub));
            }
        }
        if let Some(featured) = self.featured {
            parts.push(format!("featured={}", featured));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_string(&ApiErrorBody::new("Not found")).unwrap();
        assert_eq!(json, r#"{"error":"Not found"}"#);
    }

    #[test]
    fn test_project_query_string() {
        let q = ProjectQuery {
            category: Some("technology".into()),
            sub: Some("web-development".into()),
            featured: Some(true),
        };
        assert_eq!(q.to_query_string(), "category=technology&sub=web-development&featured=true");

        let sub_only = ProjectQuery {
            category: None,
            sub: Some("web-development".into()),
            featured: None,
        };
        assert_eq!(sub_only.to_query_string(), "");
    }
}
