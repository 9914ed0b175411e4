//! Фильтрация, сортировка и постраничный вывод списков в памяти.
//!
//! Все функции чистые: состояние фильтров передается явно как
//! [`FilterState`], а меняется только в обработчиках событий UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Размер страницы во всех списках админки
pub const PAGE_SIZE: usize = 15;

/// Если страниц больше, номера страниц сворачиваются с многоточиями
pub const PAGE_WINDOW_THRESHOLD: usize = 5;

/// Элемент списка, поддерживающий поиск, фильтры и сортировку
pub trait ListItem {
    fn item_id(&self) -> String;

    /// Поля, по которым идет текстовый поиск
    fn search_fields(&self) -> Vec<&str>;

    fn is_published(&self) -> bool;

    /// Булев признак для третьего фильтра (featured / verified); None если его нет
    fn flag(&self) -> Option<bool> {
        None
    }

    fn created_at(&self) -> DateTime<Utc>;

    fn position(&self) -> Option<i32>;

    fn rating(&self) -> Option<u8> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Published => "published",
            StatusFilter::Draft => "draft",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StatusFilter::All),
            "published" => Some(StatusFilter::Published),
            "draft" => Some(StatusFilter::Draft),
            _ => None,
        }
    }

    pub fn accepts(&self, published: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => published,
            StatusFilter::Draft => !published,
        }
    }
}

/// Трехпозиционный фильтр по булеву признаку.
///
/// В UI проектов это "featured / regular", в отзывах "verified / unverified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagFilter {
    #[default]
    All,
    #[serde(alias = "featured", alias = "verified")]
    Only,
    #[serde(alias = "regular", alias = "unverified")]
    Without,
}

impl FlagFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagFilter::All => "all",
            FlagFilter::Only => "only",
            FlagFilter::Without => "without",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "all" => Some(FlagFilter::All),
            "only" | "featured" | "verified" => Some(FlagFilter::Only),
            "without" | "regular" | "unverified" => Some(FlagFilter::Without),
            _ => None,
        }
    }

    /// Элементы без признака фильтром не отсекаются
    pub fn accepts(&self, flag: Option<bool>) -> bool {
        match (self, flag) {
            (FlagFilter::All, _) | (_, None) => true,
            (FlagFilter::Only, Some(v)) => v,
            (FlagFilter::Without, Some(v)) => !v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// createdAt по убыванию
    Latest,
    /// рейтинг по убыванию
    Rating,
    /// ручная позиция по возрастанию, пустые в конце
    Position,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::Rating => "rating",
            SortBy::Position => "position",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(SortBy::Latest),
            "rating" => Some(SortBy::Rating),
            "position" => Some(SortBy::Position),
            _ => None,
        }
    }
}

/// Состояние фильтров страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub flag_filter: FlagFilter,
    /// None = порядок исходного списка
    pub sort_by: Option<SortBy>,
    /// Номер страницы, начиная с 1
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            flag_filter: FlagFilter::All,
            sort_by: None,
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn with_sort(sort_by: SortBy) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }

    // Любое изменение фильтра возвращает на первую страницу,
    // повторная установка того же значения страницу не трогает.

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search_term != term {
            self.search_term = term;
            self.current_page = 1;
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        if self.status_filter != status {
            self.status_filter = status;
            self.current_page = 1;
        }
    }

    pub fn set_flag_filter(&mut self, flag: FlagFilter) {
        if self.flag_filter != flag {
            self.flag_filter = flag;
            self.current_page = 1;
        }
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        if self.sort_by != Some(sort_by) {
            self.sort_by = Some(sort_by);
            self.current_page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Удержать страницу в допустимых границах (например, после удаления)
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Есть ли активные фильтры, кроме страницы и сортировки
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.status_filter != StatusFilter::All
            || self.flag_filter != FlagFilter::All
    }

    pub fn accepts<T: ListItem>(&self, item: &T) -> bool {
        matches_search(item, &self.search_term)
            && self.status_filter.accepts(item.is_published())
            && self.flag_filter.accepts(item.flag())
    }

    /// Фильтр, затем сортировка (если задана), затем страница
    pub fn view<T: ListItem + Clone>(&self, items: &[T], page_size: usize) -> PageSlice<T> {
        let mut filtered = apply_filters(items, self);
        if let Some(sort_by) = self.sort_by {
            sort_items(&mut filtered, sort_by);
        }
        paginate(&filtered, self.current_page, page_size)
    }
}

/// Регистронезависимый поиск подстроки хотя бы в одном поле
pub fn matches_search<T: ListItem>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Отфильтровать список; порядок исходного списка сохраняется
pub fn apply_filters<T: ListItem + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| state.accepts(*item))
        .cloned()
        .collect()
}

/// Сравнение ручных позиций: None после всех заданных, два None равны
pub fn compare_positions(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// Стабильная сортировка уже отфильтрованного списка
pub fn sort_items<T: ListItem>(items: &mut [T], sort_by: SortBy) {
    match sort_by {
        SortBy::Latest => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortBy::Rating => {
            items.sort_by(|a, b| b.rating().unwrap_or(0).cmp(&a.rating().unwrap_or(0)))
        }
        SortBy::Position => items.sort_by(|a, b| compare_positions(a.position(), b.position())),
    }
}

/// ceil(count / page_size), но не меньше 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Одна страница списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Вырезать страницу `page` (с 1). Страница за пределами дает пустой срез.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_count = items.len();
    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = page.saturating_mul(page_size).min(total_count);

    PageSlice {
        items: items[start..end].to_vec(),
        current_page: page,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}

/// Элемент строки номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Номера страниц для пагинатора.
///
/// До пяти страниц показываются все; иначе первая, последняя,
/// текущая ±1 и многоточия на месте пропусков.
pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    if total <= PAGE_WINDOW_THRESHOLD {
        return (1..=total).map(PageToken::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut pages = vec![1, total];
    for p in current.saturating_sub(1)..=current + 1 {
        if (1..=total).contains(&p) {
            pages.push(p);
        }
    }
    pages.sort_unstable();
    pages.dedup();

    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut prev: Option<usize> = None;
    for p in pages {
        if let Some(prev) = prev {
            if p > prev + 1 {
                tokens.push(PageToken::Ellipsis);
            }
        }
        tokens.push(PageToken::Page(p));
        prev = Some(p);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        title: String,
        role: String,
        published: bool,
        featured: Option<bool>,
        created: i64,
        position: Option<i32>,
        rating: Option<u8>,
    }

    impl ListItem for Row {
        fn item_id(&self) -> String {
            self.id.to_string()
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.role.as_str()]
        }
        fn is_published(&self) -> bool {
            self.published
        }
        fn flag(&self) -> Option<bool> {
            self.featured
        }
        fn created_at(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(self.created, 0).unwrap()
        }
        fn position(&self) -> Option<i32> {
            self.position
        }
        fn rating(&self) -> Option<u8> {
            self.rating
        }
    }

    fn row(id: u32, title: &str, published: bool) -> Row {
        Row {
            id,
            title: title.to_string(),
            role: String::new(),
            published,
            featured: None,
            created: id as i64,
            position: None,
            rating: None,
        }
    }

    fn titles(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_published_filter_example() {
        let items = vec![row(1, "Alpha", true), row(2, "Beta", false), row(3, "Gamma", true)];
        let mut state = FilterState::default();
        state.set_status_filter(StatusFilter::Published);

        let page = state.view(&items, PAGE_SIZE);
        assert_eq!(titles(&page.items), vec!["Alpha", "Gamma"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_draft_filter() {
        let items = vec![row(1, "Alpha", true), row(2, "Beta", false)];
        let mut state = FilterState::default();
        state.set_status_filter(StatusFilter::Draft);
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Beta"]);
    }

    #[test]
    fn test_sixteen_items_make_two_pages() {
        let items: Vec<Row> = (1..=16).map(|i| row(i, &format!("Item {i}"), true)).collect();
        let first = paginate(&items, 1, PAGE_SIZE);
        let second = paginate(&items, 2, PAGE_SIZE);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 15);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id, 16);
    }

    #[test]
    fn test_pages_concatenate_to_filtered_list() {
        for count in [0usize, 1, 14, 15, 16, 30, 31, 47] {
            let items: Vec<Row> = (0..count as u32)
                .map(|i| row(i, &format!("t{i}"), i % 3 != 0))
                .collect();
            let mut state = FilterState::default();
            state.set_status_filter(StatusFilter::Published);
            let filtered = apply_filters(&items, &state);
            let pages = total_pages(filtered.len(), PAGE_SIZE);

            let mut joined = Vec::new();
            for p in 1..=pages {
                joined.extend(paginate(&filtered, p, PAGE_SIZE).items);
            }
            assert_eq!(joined, filtered, "count = {count}");
        }
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(15, PAGE_SIZE), 1);
        assert_eq!(total_pages(16, PAGE_SIZE), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = vec![row(1, "Alpha", true)];
        let page = paginate(&items, 4, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let mut lead = row(1, "Jane Doe", true);
        lead.role = "Lead Engineer".to_string();
        let items = vec![lead, row(2, "John Smith", true)];

        let mut state = FilterState::default();
        state.set_search_term("ENGINEER");
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Jane Doe"]);

        state.set_search_term("");
        assert_eq!(apply_filters(&items, &state).len(), 2);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let items = vec![row(1, "Jane Doe", true), row(2, "JaneDoe", true)];

        let mut state = FilterState::default();
        state.set_search_term("Doe ");
        assert!(apply_filters(&items, &state).is_empty());

        state.set_search_term(" ");
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Jane Doe"]);

        state.set_search_term("e D");
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Jane Doe"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut a = row(1, "Portal", true);
        a.featured = Some(true);
        let mut b = row(2, "Portal v2", false);
        b.featured = Some(true);
        let mut c = row(3, "Portal v3", true);
        c.featured = Some(false);
        let items = vec![a, b, c];

        let mut state = FilterState::default();
        state.set_search_term("portal");
        state.set_status_filter(StatusFilter::Published);
        state.set_flag_filter(FlagFilter::Only);
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Portal"]);

        state.set_flag_filter(FlagFilter::Without);
        assert_eq!(titles(&apply_filters(&items, &state)), vec!["Portal v3"]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = FilterState::default();
        state.set_page(3);
        state.set_search_term("abc");
        assert_eq!(state.current_page, 1);

        state.set_page(3);
        state.set_status_filter(StatusFilter::Draft);
        assert_eq!(state.current_page, 1);

        state.set_page(3);
        state.set_flag_filter(FlagFilter::Only);
        assert_eq!(state.current_page, 1);

        state.set_page(3);
        state.set_sort_by(SortBy::Rating);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_same_value_and_page_change_keep_page() {
        let mut state = FilterState::default();
        state.set_search_term("abc");
        state.set_page(3);
        state.set_search_term("abc");
        assert_eq!(state.current_page, 3);

        state.set_page(2);
        assert_eq!(state.search_term, "abc");
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_clamp_page() {
        let mut state = FilterState::default();
        state.set_page(4);
        state.clamp_page(2);
        assert_eq!(state.current_page, 2);
        state.clamp_page(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_sort_latest_and_rating() {
        let mut items = vec![row(1, "old", true), row(3, "new", true), row(2, "mid", true)];
        sort_items(&mut items, SortBy::Latest);
        assert_eq!(titles(&items), vec!["new", "mid", "old"]);

        items[0].rating = Some(3);
        items[1].rating = Some(5);
        items[2].rating = Some(4);
        sort_items(&mut items, SortBy::Rating);
        assert_eq!(titles(&items), vec!["mid", "old", "new"]);
    }

    #[test]
    fn test_sort_position_puts_none_last_and_is_stable() {
        let mut items = vec![
            row(1, "none-a", true),
            row(2, "two", true),
            row(3, "none-b", true),
            row(4, "one", true),
        ];
        items[1].position = Some(2);
        items[3].position = Some(1);
        sort_items(&mut items, SortBy::Position);
        assert_eq!(titles(&items), vec!["one", "two", "none-a", "none-b"]);
    }

    #[test]
    fn test_compare_positions() {
        assert_eq!(compare_positions(None, None), Ordering::Equal);
        assert_eq!(compare_positions(None, Some(1)), Ordering::Greater);
        assert_eq!(compare_positions(Some(1), None), Ordering::Less);
        assert_eq!(compare_positions(Some(2), Some(1)), Ordering::Greater);
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let mut a = row(1, "a", true);
        a.rating = Some(2);
        let mut b = row(2, "b", false);
        b.rating = Some(5);
        let mut c = row(3, "c", true);
        c.rating = Some(4);

        let mut state = FilterState::with_sort(SortBy::Rating);
        state.set_status_filter(StatusFilter::Published);
        let page = state.view(&[a, b, c], PAGE_SIZE);
        assert_eq!(titles(&page.items), vec!["c", "a"]);
    }

    #[test]
    fn test_page_window_small() {
        assert_eq!(
            page_window(2, 5),
            (1..=5).map(PageToken::Page).collect::<Vec<_>>()
        );
        assert_eq!(page_window(1, 1), vec![PageToken::Page(1)]);
    }

    #[test]
    fn test_page_window_collapses() {
        use PageToken::{Ellipsis, Page};
        assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_window(3, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
        assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_flag_filter_params() {
        assert_eq!(FlagFilter::from_param("featured"), Some(FlagFilter::Only));
        assert_eq!(FlagFilter::from_param("unverified"), Some(FlagFilter::Without));
        assert_eq!(FlagFilter::from_param("bogus"), None);
        let parsed: FlagFilter = serde_json::from_str("\"verified\"").unwrap();
        assert_eq!(parsed, FlagFilter::Only);
        assert!(FlagFilter::Only.accepts(None));
    }

    #[test]
    fn test_filter_state_serde_defaults() {
        let state: FilterState = serde_json::from_str("{\"searchTerm\":\"x\"}").unwrap();
        assert_eq!(state.search_term, "x");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.status_filter, StatusFilter::All);
    }
}
