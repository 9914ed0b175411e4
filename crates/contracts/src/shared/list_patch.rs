//! Локальная правка списка после успешного ответа сервера (без перезагрузки).
//! Вызывается только после успеха: неудачная мутация список не меняет.

use super::list_query::ListItem;

/// Новый элемент добавляется в конец
pub fn apply_created<T>(list: &mut Vec<T>, item: T) {
    list.push(item);
}

/// Заменить элемент с тем же id; если его нет, добавить в конец
pub fn apply_updated<T: ListItem>(list: &mut Vec<T>, item: T) {
    let id = item.item_id();
    match list.iter().position(|x| x.item_id() == id) {
        Some(index) => list[index] = item,
        None => list.push(item),
    }
}

/// Удалить элемент по id. Возвращает false, если элемента не было.
pub fn apply_removed<T: ListItem>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|x| x.item_id() != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: &'static str,
        text: &'static str,
    }

    impl ListItem for Note {
        fn item_id(&self) -> String {
            self.id.to_string()
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![self.text]
        }
        fn is_published(&self) -> bool {
            true
        }
        fn created_at(&self) -> DateTime<Utc> {
            DateTime::<Utc>::default()
        }
        fn position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_create_update_remove() {
        let mut list = vec![Note { id: "a", text: "one" }];

        apply_created(&mut list, Note { id: "b", text: "two" });
        assert_eq!(list.len(), 2);

        apply_updated(&mut list, Note { id: "a", text: "uno" });
        assert_eq!(list[0].text, "uno");
        assert_eq!(list.len(), 2);

        apply_updated(&mut list, Note { id: "c", text: "three" });
        assert_eq!(list.last().unwrap().id, "c");

        assert!(apply_removed(&mut list, "b"));
        assert!(!apply_removed(&mut list, "b"));
        let ids: Vec<&str> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
