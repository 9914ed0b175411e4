use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category_matcher::HasCategories;
use super::taxonomy::Taxonomy;

/// Ключ общего количества в словаре счетчиков
pub const ALL_KEY: &str = "all";

/// Количество проектов по категориям.
///
/// Считается по полному (нефильтрованному) списку, поэтому размеры
/// категорий видны при любом активном фильтре.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCounts {
    all: usize,
    /// (slug категории, количество) в порядке таксономии
    by_category: Vec<(String, usize)>,
}

impl ProjectCounts {
    pub fn compute<T: HasCategories>(items: &[T], taxonomy: &Taxonomy) -> Self {
        let by_category = taxonomy
            .categories()
            .iter()
            .map(|category| {
                let count = items
                    .iter()
                    .filter(|item| item.matches_category(taxonomy, Some(&category.slug), None))
                    .count();
                (category.slug.clone(), count)
            })
            .collect();

        Self {
            all: items.len(),
            by_category,
        }
    }

    pub fn all(&self) -> usize {
        self.all
    }

    /// Количество для slug категории; "all" дает общее, неизвестный slug дает 0
    pub fn get(&self, slug: &str) -> usize {
        if slug == ALL_KEY {
            return self.all;
        }
        self.by_category
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_category.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn to_map(&self) -> HashMap<String, usize> {
        let mut map: HashMap<String, usize> = self.by_category.iter().cloned().collect();
        map.insert(ALL_KEY.to_string(), self.all);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::category_matcher::ProjectCategoryAssignment;
    use crate::shared::taxonomy::taxonomy;

    struct Item(Vec<ProjectCategoryAssignment>);

    impl HasCategories for Item {
        fn category_assignments(&self) -> &[ProjectCategoryAssignment] {
            &self.0
        }
    }

    fn item(pairs: &[(&str, &str)]) -> Item {
        Item(
            pairs
                .iter()
                .map(|(c, s)| ProjectCategoryAssignment::new(*c, *s))
                .collect(),
        )
    }

    #[test]
    fn test_counts() {
        let items = vec![
            item(&[("Technology", "Web Development"), ("Technology", "Cloud Solutions")]),
            item(&[("Technology", "DevOps & Infrastructure"), ("Design", "Branding")]),
            item(&[("Security", "Compliance")]),
            item(&[]),
        ];
        let counts = ProjectCounts::compute(&items, taxonomy());

        assert_eq!(counts.all(), 4);
        assert_eq!(counts.get(ALL_KEY), 4);
        // проект с двумя подуслугами одной категории считается один раз
        assert_eq!(counts.get("technology"), 2);
        assert_eq!(counts.get("design"), 1);
        assert_eq!(counts.get("security"), 1);
        assert_eq!(counts.get("consulting"), 0);
        assert_eq!(counts.get("unknown"), 0);
    }

    #[test]
    fn test_every_category_present_and_bounded_by_total() {
        let items = vec![item(&[("Data & AI", "Machine Learning")]), item(&[])];
        let counts = ProjectCounts::compute(&items, taxonomy());
        let map = counts.to_map();

        assert_eq!(map.len(), taxonomy().categories().len() + 1);
        for category in taxonomy().categories() {
            assert!(map[&category.slug] <= map[ALL_KEY]);
        }
        let order: Vec<&str> = counts.iter().map(|(slug, _)| slug).collect();
        assert_eq!(order[0], "technology");
    }

    #[test]
    fn test_empty_list() {
        let counts = ProjectCounts::compute::<Item>(&[], taxonomy());
        assert_eq!(counts.all(), 0);
        assert!(counts.iter().all(|(_, c)| c == 0));
    }
}
