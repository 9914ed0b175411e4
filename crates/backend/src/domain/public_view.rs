use contracts::shared::list_query::{sort_items, ListItem, SortBy};

/// Только опубликованные, в порядке сайта:
/// ручная позиция по возрастанию (пустые в конце), затем новые сначала
pub fn published_in_site_order<T: ListItem>(items: Vec<T>) -> Vec<T> {
    let mut published: Vec<T> = items.into_iter().filter(|i| i.is_published()).collect();
    sort_items(&mut published, SortBy::Latest);
    // сортировка стабильная: при равной позиции остается порядок по дате
    sort_items(&mut published, SortBy::Position);
    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Clone)]
    struct Entry {
        id: &'static str,
        published: bool,
        position: Option<i32>,
        day: u32,
    }

    impl ListItem for Entry {
        fn item_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.id]
        }

        fn is_published(&self) -> bool {
            self.published
        }

        fn created_at(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, self.day, 0, 0, 0).unwrap()
        }

        fn position(&self) -> Option<i32> {
            self.position
        }
    }

    fn entry(id: &'static str, published: bool, position: Option<i32>, day: u32) -> Entry {
        Entry {
            id,
            published,
            position,
            day,
        }
    }

    #[test]
    fn test_site_order() {
        let items = vec![
            entry("old-unpositioned", true, None, 1),
            entry("draft", false, Some(0), 2),
            entry("second", true, Some(2), 3),
            entry("new-unpositioned", true, None, 4),
            entry("first", true, Some(1), 5),
            entry("first-older", true, Some(1), 2),
        ];
        let ids: Vec<String> = published_in_site_order(items)
            .iter()
            .map(|e| e.item_id())
            .collect();
        assert_eq!(
            ids,
            vec![
                "first",
                "first-older",
                "second",
                "new-unpositioned",
                "old-unpositioned"
            ]
        );
    }
}
