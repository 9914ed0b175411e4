//! Принадлежность проекта выбранной категории / подуслуге.
//!
//! Назначения категорий приходят в трех формах: `null`, массив объектов
//! или JSON-строка с таким массивом. Неоднозначность формы разбирается
//! только здесь, в [`parse_assignments`]; все остальные работают со срезом.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::taxonomy::Taxonomy;

/// Пара (категория, подуслуга), назначенная проекту. Хранятся отображаемые имена.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategoryAssignment {
    pub category: String,
    pub sub_category: String,
}

impl ProjectCategoryAssignment {
    pub fn new(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }
}

/// Результат разбора сырого значения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAssignments {
    Parsed(Vec<ProjectCategoryAssignment>),
    Unparseable,
}

impl ParsedAssignments {
    /// Нераспознанные данные трактуются как отсутствие назначений
    pub fn into_list(self) -> Vec<ProjectCategoryAssignment> {
        match self {
            ParsedAssignments::Parsed(list) => list,
            ParsedAssignments::Unparseable => Vec::new(),
        }
    }
}

/// Разобрать сырое значение назначений
pub fn parse_assignments(raw: &Value) -> ParsedAssignments {
    match raw {
        Value::Null => ParsedAssignments::Parsed(Vec::new()),
        Value::Array(entries) => ParsedAssignments::Parsed(collect_entries(entries)),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(entries)) => ParsedAssignments::Parsed(collect_entries(&entries)),
            _ => ParsedAssignments::Unparseable,
        },
        _ => ParsedAssignments::Unparseable,
    }
}

// Элементы не той формы пропускаются, остальные сохраняют порядок
fn collect_entries(entries: &[Value]) -> Vec<ProjectCategoryAssignment> {
    entries
        .iter()
        .filter_map(|entry| ProjectCategoryAssignment::deserialize(entry).ok())
        .collect()
}

/// serde-хелпер: поле принимает любую из трех форм и всегда дает Vec
pub fn deserialize_assignments<'de, D>(
    deserializer: D,
) -> Result<Vec<ProjectCategoryAssignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(parse_assignments(&raw).into_list())
}

/// Проверка принадлежности набора назначений выбранной категории/подуслуге.
///
/// - без категории подходит любой элемент (вид "All");
/// - неизвестный slug категории или подуслуги не подходит никому;
/// - без подуслуги достаточно совпадения по категории.
pub fn matches_category(
    assignments: &[ProjectCategoryAssignment],
    taxonomy: &Taxonomy,
    category_slug: Option<&str>,
    sub_category_slug: Option<&str>,
) -> bool {
    let Some(category_slug) = category_slug else {
        return true;
    };
    let Some(category) = taxonomy.find_by_slug(category_slug) else {
        return false;
    };

    match sub_category_slug {
        None => assignments.iter().any(|a| a.category == category.category),
        Some(sub_slug) => match category.find_sub_service(sub_slug) {
            Some(sub) => assignments
                .iter()
                .any(|a| a.category == category.category && a.sub_category == sub.name),
            None => false,
        },
    }
}

/// То же, что [`matches_category`], но для сырого значения
pub fn matches_raw(
    raw: &Value,
    taxonomy: &Taxonomy,
    category_slug: Option<&str>,
    sub_category_slug: Option<&str>,
) -> bool {
    let assignments = parse_assignments(raw).into_list();
    matches_category(&assignments, taxonomy, category_slug, sub_category_slug)
}

/// Элементы, у которых есть назначения категорий
pub trait HasCategories {
    fn category_assignments(&self) -> &[ProjectCategoryAssignment];

    fn matches_category(
        &self,
        taxonomy: &Taxonomy,
        category_slug: Option<&str>,
        sub_category_slug: Option<&str>,
    ) -> bool {
        matches_category(
            self.category_assignments(),
            taxonomy,
            category_slug,
            sub_category_slug,
        )
    }
}

/// Найти назначения, которые не соответствуют таксономии или повторяются.
///
/// Возвращает сообщение об ошибке для первой найденной проблемы.
pub fn validate_assignments(
    assignments: &[ProjectCategoryAssignment],
    taxonomy: &Taxonomy,
) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for a in assignments {
        let category = taxonomy
            .find_by_name(&a.category)
            .ok_or_else(|| format!("Unknown category: {}", a.category))?;
        if category.find_sub_service_by_name(&a.sub_category).is_none() {
            return Err(format!(
                "Unknown sub-service '{}' for category '{}'",
                a.sub_category, a.category
            ));
        }
        if !seen.insert((a.category.as_str(), a.sub_category.as_str())) {
            return Err(format!(
                "Duplicate category assignment: {} / {}",
                a.category, a.sub_category
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::taxonomy::taxonomy;
    use serde_json::json;

    fn web_dev() -> Vec<ProjectCategoryAssignment> {
        vec![ProjectCategoryAssignment::new("Technology", "Web Development")]
    }

    #[test]
    fn test_parse_string_payload() {
        let raw = json!("[{\"category\":\"Technology\",\"subCategory\":\"Web Development\"}]");
        assert_eq!(parse_assignments(&raw), ParsedAssignments::Parsed(web_dev()));
    }

    #[test]
    fn test_parse_array_payload() {
        let raw = json!([{"category": "Technology", "subCategory": "Web Development"}]);
        assert_eq!(parse_assignments(&raw).into_list(), web_dev());
    }

    #[test]
    fn test_parse_degrades_to_empty() {
        assert_eq!(parse_assignments(&json!(null)), ParsedAssignments::Parsed(vec![]));
        assert_eq!(parse_assignments(&json!("{broken")), ParsedAssignments::Unparseable);
        assert_eq!(parse_assignments(&json!("{\"a\":1}")), ParsedAssignments::Unparseable);
        assert_eq!(parse_assignments(&json!(42)), ParsedAssignments::Unparseable);
        assert!(parse_assignments(&json!({"category": "Technology"}))
            .into_list()
            .is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let raw = json!([
            {"category": "Technology", "subCategory": "Web Development"},
            {"category": "Design"},
            "noise"
        ]);
        assert_eq!(parse_assignments(&raw).into_list(), web_dev());
    }

    #[test]
    fn test_string_payload_matches_category_without_sub() {
        let raw = json!("[{\"category\":\"Technology\",\"subCategory\":\"Web Development\"}]");
        assert!(matches_raw(&raw, taxonomy(), Some("technology"), None));
    }

    #[test]
    fn test_no_category_matches_everything() {
        for raw in [json!(null), json!("garbage"), json!([]), json!(7)] {
            assert!(matches_raw(&raw, taxonomy(), None, None));
        }
        assert!(matches_category(&[], taxonomy(), None, Some("web-development")));
    }

    #[test]
    fn test_sub_category_match() {
        let items = web_dev();
        assert!(matches_category(&items, taxonomy(), Some("technology"), Some("web-development")));
        assert!(!matches_category(&items, taxonomy(), Some("technology"), Some("cloud-solutions")));
        assert!(!matches_category(&items, taxonomy(), Some("design"), None));
    }

    #[test]
    fn test_sub_category_match_implies_category_match() {
        let items = vec![
            ProjectCategoryAssignment::new("Design", "Branding"),
            ProjectCategoryAssignment::new("Security", "Compliance"),
        ];
        for category in taxonomy().categories() {
            for sub in &category.sub_services {
                if matches_category(&items, taxonomy(), Some(&category.slug), Some(&sub.slug)) {
                    assert!(matches_category(&items, taxonomy(), Some(&category.slug), None));
                }
            }
        }
    }

    #[test]
    fn test_sub_category_must_belong_to_selected_category() {
        // подуслуга из другой категории не резолвится
        let items = web_dev();
        assert!(!matches_category(&items, taxonomy(), Some("design"), Some("web-development")));
    }

    #[test]
    fn test_unknown_slugs_match_nothing() {
        let items = web_dev();
        assert!(!matches_category(&items, taxonomy(), Some("retired"), None));
        assert!(!matches_category(&items, taxonomy(), Some("technology"), Some("retired")));
    }

    #[test]
    fn test_malformed_payload_never_matches_concrete_category() {
        let raw = json!("[{not json");
        for category in taxonomy().categories() {
            assert!(!matches_raw(&raw, taxonomy(), Some(&category.slug), None));
            for sub in &category.sub_services {
                assert!(!matches_raw(&raw, taxonomy(), Some(&category.slug), Some(&sub.slug)));
            }
        }
    }

    #[test]
    fn test_deserialize_helper_accepts_all_shapes() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_assignments")]
            categories: Vec<ProjectCategoryAssignment>,
        }

        let from_string: Holder = serde_json::from_value(json!({
            "categories": "[{\"category\":\"Technology\",\"subCategory\":\"Web Development\"}]"
        }))
        .unwrap();
        assert_eq!(from_string.categories, web_dev());

        let from_null: Holder = serde_json::from_value(json!({ "categories": null })).unwrap();
        assert!(from_null.categories.is_empty());

        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(missing.categories.is_empty());

        let broken: Holder = serde_json::from_value(json!({ "categories": "oops" })).unwrap();
        assert!(broken.categories.is_empty());
    }

    #[test]
    fn test_validate_assignments() {
        assert!(validate_assignments(&web_dev(), taxonomy()).is_ok());

        let duplicate = vec![
            ProjectCategoryAssignment::new("Technology", "Web Development"),
            ProjectCategoryAssignment::new("Technology", "Web Development"),
        ];
        assert!(validate_assignments(&duplicate, taxonomy())
            .unwrap_err()
            .contains("Duplicate"));

        let unknown = vec![ProjectCategoryAssignment::new("Gardening", "Roses")];
        assert!(validate_assignments(&unknown, taxonomy()).is_err());

        let wrong_sub = vec![ProjectCategoryAssignment::new("Design", "Web Development")];
        assert!(validate_assignments(&wrong_sub, taxonomy()).is_err());
    }
}
