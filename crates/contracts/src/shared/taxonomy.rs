//! Статическая таксономия услуг: категории и их подуслуги.
//!
//! Порядок категорий и подуслуг значим: в нем они показываются на сайте.
//! Таксономия строится один раз на процесс и дальше не меняется.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Подуслуга внутри категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubService {
    pub name: String,
    pub slug: String,
}

/// Категория услуг
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Отображаемое имя (именно оно хранится в проектах)
    pub category: String,
    pub slug: String,
    pub sub_services: Vec<SubService>,
}

impl Category {
    pub fn find_sub_service(&self, slug: &str) -> Option<&SubService> {
        self.sub_services.iter().find(|s| s.slug == slug)
    }

    pub fn find_sub_service_by_name(&self, name: &str) -> Option<&SubService> {
        self.sub_services.iter().find(|s| s.name == name)
    }
}

/// Упорядоченный набор категорий
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Стандартная таксономия сайта
    pub fn standard() -> Self {
        let categories = STANDARD_CATEGORIES
            .iter()
            .map(|(name, slug, subs)| Category {
                category: (*name).to_string(),
                slug: (*slug).to_string(),
                sub_services: subs
                    .iter()
                    .map(|(sub_name, sub_slug)| SubService {
                        name: (*sub_name).to_string(),
                        slug: (*sub_slug).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self::new(categories)
    }
}

type CategoryRow = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const STANDARD_CATEGORIES: &[CategoryRow] = &[
    (
        "Technology",
        "technology",
        &[
            ("Web Development", "web-development"),
            ("Mobile Development", "mobile-development"),
            ("Cloud Solutions", "cloud-solutions"),
            ("DevOps & Infrastructure", "devops-infrastructure"),
            ("Software Architecture", "software-architecture"),
        ],
    ),
    (
        "Consulting",
        "consulting",
        &[
            ("IT Strategy", "it-strategy"),
            ("Digital Transformation", "digital-transformation"),
            ("Process Optimization", "process-optimization"),
            ("Vendor Selection", "vendor-selection"),
        ],
    ),
    (
        "Design",
        "design",
        &[
            ("UI/UX Design", "ui-ux-design"),
            ("Product Design", "product-design"),
            ("Branding", "branding"),
        ],
    ),
    (
        "Data & AI",
        "data-ai",
        &[
            ("Data Analytics", "data-analytics"),
            ("Machine Learning", "machine-learning"),
            ("Business Intelligence", "business-intelligence"),
        ],
    ),
    (
        "Security",
        "security",
        &[
            ("Security Audit", "security-audit"),
            ("Penetration Testing", "penetration-testing"),
            ("Compliance", "compliance"),
        ],
    ),
];

static TAXONOMY: Lazy<Taxonomy> = Lazy::new(Taxonomy::standard);

/// Таксономия процесса (загружается при первом обращении)
pub fn taxonomy() -> &'static Taxonomy {
    &TAXONOMY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_taxonomy_order_is_stable() {
        let slugs: Vec<&str> = taxonomy()
            .categories()
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(
            slugs,
            vec!["technology", "consulting", "design", "data-ai", "security"]
        );
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut seen = HashSet::new();
        for category in taxonomy().categories() {
            assert!(seen.insert(category.slug.clone()), "duplicate {}", category.slug);
            let mut sub_seen = HashSet::new();
            for sub in &category.sub_services {
                assert!(sub_seen.insert(sub.slug.clone()), "duplicate {}", sub.slug);
            }
        }
    }

    #[test]
    fn test_lookups() {
        let tech = taxonomy().find_by_slug("technology").unwrap();
        assert_eq!(tech.category, "Technology");
        assert_eq!(
            tech.find_sub_service("web-development").unwrap().name,
            "Web Development"
        );
        assert!(tech.find_sub_service("branding").is_none());
        assert_eq!(taxonomy().find_by_name("Design").unwrap().slug, "design");
        assert!(taxonomy().find_by_slug("unknown").is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(taxonomy()).unwrap();
        assert_eq!(json[0]["category"], "Technology");
        assert_eq!(json[0]["subServices"][0]["slug"], "web-development");
    }
}
