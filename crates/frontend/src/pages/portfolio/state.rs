//! Выбор категории / подуслуги / страницы на странице портфолио.
//!
//! Состояние зеркалится в `?category=..&sub=..&page=..`.

use contracts::domain::a003_project::aggregate::Project;
use contracts::shared::category_matcher::HasCategories;
use contracts::shared::list_query::{paginate, PageSlice};
use contracts::shared::taxonomy::Taxonomy;
use std::collections::{BTreeMap, HashMap};

/// Проектов на одной странице сетки
pub const PORTFOLIO_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSelection {
    /// slug категории; None = "All"
    pub category: Option<String>,
    /// slug подуслуги; имеет смысл только вместе с category
    pub sub: Option<String>,
    pub page: usize,
}

impl Default for PortfolioSelection {
    fn default() -> Self {
        Self {
            category: None,
            sub: None,
            page: 1,
        }
    }
}

impl PortfolioSelection {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let non_empty = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();
        let category = non_empty("category");
        let sub = category.as_ref().and_then(|_| non_empty("sub"));
        let page = params
            .get("page")
            .and_then(|p| p.parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        Self { category, sub, page }
    }

    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(category) = &self.category {
            params.insert("category".to_string(), category.clone());
            if let Some(sub) = &self.sub {
                params.insert("sub".to_string(), sub.clone());
            }
        }
        if self.page > 1 {
            params.insert("page".to_string(), self.page.to_string());
        }
        params
    }

    /// Смена категории сбрасывает подуслугу и страницу
    pub fn select_category(&mut self, category: Option<String>) {
        if self.category != category {
            self.category = category;
            self.sub = None;
            self.page = 1;
        }
    }

    /// Повторный выбор той же подуслуги снимает ее
    pub fn toggle_sub(&mut self, sub: String) {
        if self.category.is_none() {
            return;
        }
        self.sub = if self.sub.as_deref() == Some(sub.as_str()) {
            None
        } else {
            Some(sub)
        };
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn is_selected(&self, category: Option<&str>) -> bool {
        self.category.as_deref() == category
    }

    /// Отфильтрованные проекты и текущая страница
    pub fn view(&self, items: &[Project], taxonomy: &Taxonomy) -> PageSlice<Project> {
        let filtered: Vec<Project> = items
            .iter()
            .filter(|p| p.matches_category(taxonomy, self.category.as_deref(), self.sub.as_deref()))
            .cloned()
            .collect();
        paginate(&filtered, self.page, PORTFOLIO_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_project::aggregate::ProjectDto;
    use contracts::shared::category_matcher::ProjectCategoryAssignment;

    fn project(title: &str, pairs: &[(&str, &str)]) -> Project {
        Project::new_for_insert(&ProjectDto {
            title: title.to_string(),
            slug: title.to_lowercase(),
            categories: pairs
                .iter()
                .map(|(c, s)| ProjectCategoryAssignment::new(*c, *s))
                .collect(),
            published: true,
            ..ProjectDto::default()
        })
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_params_ignores_sub_without_category() {
        let sel = PortfolioSelection::from_params(&params(&[("sub", "branding"), ("page", "0")]));
        assert_eq!(sel, PortfolioSelection::default());

        let sel = PortfolioSelection::from_params(&params(&[
            ("category", "design"),
            ("sub", "branding"),
            ("page", "3"),
        ]));
        assert_eq!(sel.category.as_deref(), Some("design"));
        assert_eq!(sel.sub.as_deref(), Some("branding"));
        assert_eq!(sel.page, 3);
        assert_eq!(sel.to_params().len(), 3);
    }

    #[test]
    fn test_select_category_resets_sub_and_page() {
        let mut sel = PortfolioSelection {
            category: Some("design".into()),
            sub: Some("branding".into()),
            page: 2,
        };
        sel.select_category(Some("design".into()));
        assert_eq!(sel.page, 2);

        sel.select_category(Some("technology".into()));
        assert_eq!(sel.sub, None);
        assert_eq!(sel.page, 1);
        assert!(sel.is_selected(Some("technology")));
    }

    #[test]
    fn test_toggle_sub() {
        let mut sel = PortfolioSelection::default();
        sel.toggle_sub("branding".into());
        assert_eq!(sel.sub, None);

        sel.select_category(Some("design".into()));
        sel.toggle_sub("branding".into());
        assert_eq!(sel.sub.as_deref(), Some("branding"));
        sel.toggle_sub("branding".into());
        assert_eq!(sel.sub, None);
    }

    #[test]
    fn test_view_filters_by_taxonomy() {
        let tax = Taxonomy::standard();
        let items = vec![
            project("Shop", &[("Technology", "Web Development")]),
            project("Logo", &[("Design", "Branding")]),
            project("Portal", &[("Technology", "Cloud Solutions"), ("Design", "UI/UX Design")]),
        ];

        let all = PortfolioSelection::default().view(&items, &tax);
        assert_eq!(all.total_count, 3);

        let mut sel = PortfolioSelection::default();
        sel.select_category(Some("design".into()));
        let design = sel.view(&items, &tax);
        assert_eq!(design.total_count, 2);

        sel.select_category(Some("no-such-category".into()));
        assert_eq!(sel.view(&items, &tax).total_count, 0);
    }
}
