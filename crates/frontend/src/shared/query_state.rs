//! Синхронизация состояния списков со строкой запроса URL.
//!
//! После перезагрузки страницы фильтры, сортировка и номер страницы
//! восстанавливаются из `?q=..&status=..&flag=..&sort=..&page=..`.

use contracts::shared::list_query::{FilterState, FlagFilter, SortBy, StatusFilter};
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use web_sys::window;

/// Параметры текущего URL
pub fn current_params() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// URL для `replaceState`; None, если строка запроса не меняется
fn replacement_url(path: &str, current_search: &str, query: &str) -> Option<String> {
    let new_search = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };
    (current_search != new_search).then(|| format!("{}{}", path, new_search))
}

/// Заменить строку запроса без новой записи в истории
pub fn replace_query(query: &str) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let path = location.pathname().unwrap_or_default();
    let current = location.search().unwrap_or_default();
    let Some(url) = replacement_url(&path, &current, query) else {
        return;
    };
    let result = w.history().and_then(|history| {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
    });
    if let Err(e) = result {
        log::warn!("URL sync to '{}' failed: {:?}", url, e);
    }
}

/// Состояние фильтров из параметров; неизвестные значения дают значения по умолчанию
pub fn filter_state_from_params(
    params: &HashMap<String, String>,
    default_sort: Option<SortBy>,
) -> FilterState {
    let mut state = FilterState {
        sort_by: default_sort,
        ..FilterState::default()
    };
    if let Some(q) = params.get("q") {
        state.search_term = q.clone();
    }
    if let Some(status) = params.get("status").and_then(|s| StatusFilter::from_param(s)) {
        state.status_filter = status;
    }
    if let Some(flag) = params.get("flag").and_then(|s| FlagFilter::from_param(s)) {
        state.flag_filter = flag;
    }
    if let Some(sort) = params.get("sort").and_then(|s| SortBy::from_param(s)) {
        state.sort_by = Some(sort);
    }
    if let Some(page) = params.get("page").and_then(|s| s.parse::<usize>().ok()) {
        state.set_page(page);
    }
    state
}

/// Параметры для URL: только отличающиеся от значений по умолчанию
pub fn filter_state_to_params(
    state: &FilterState,
    default_sort: Option<SortBy>,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    if !state.search_term.is_empty() {
        params.insert("q".to_string(), state.search_term.clone());
    }
    if state.status_filter != StatusFilter::All {
        params.insert("status".to_string(), state.status_filter.as_str().to_string());
    }
    if state.flag_filter != FlagFilter::All {
        params.insert("flag".to_string(), state.flag_filter.as_str().to_string());
    }
    if state.sort_by != default_sort {
        if let Some(sort) = state.sort_by {
            params.insert("sort".to_string(), sort.as_str().to_string());
        }
    }
    if state.current_page > 1 {
        params.insert("page".to_string(), state.current_page.to_string());
    }
    params
}

/// Сигнал состояния фильтров, связанный с URL
pub fn use_filter_state(default_sort: Option<SortBy>) -> RwSignal<FilterState> {
    let state = RwSignal::new(filter_state_from_params(&current_params(), default_sort));

    Effect::new(move |_| {
        let params = state.with(|s| filter_state_to_params(s, default_sort));
        let query = serde_qs::to_string(&params).unwrap_or_default();
        replace_query(&query);
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_url() {
        assert_eq!(
            replacement_url("/admin/projects", "", "q=cloud&page=2").as_deref(),
            Some("/admin/projects?q=cloud&page=2")
        );
        assert_eq!(replacement_url("/admin/projects", "?page=2", "page=2"), None);
        assert_eq!(
            replacement_url("/portfolio", "?category=design", "").as_deref(),
            Some("/portfolio")
        );
        assert_eq!(replacement_url("/portfolio", "", ""), None);
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_state_from_params() {
        let state = filter_state_from_params(
            &params(&[("q", "web"), ("status", "draft"), ("flag", "featured"), ("page", "3")]),
            None,
        );
        assert_eq!(state.search_term, "web");
        assert_eq!(state.status_filter, StatusFilter::Draft);
        assert_eq!(state.flag_filter, FlagFilter::Only);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.sort_by, None);
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let state = filter_state_from_params(
            &params(&[("status", "archived"), ("sort", "random"), ("page", "0")]),
            Some(SortBy::Latest),
        );
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.sort_by, Some(SortBy::Latest));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_default_state_writes_no_params() {
        let state = FilterState::with_sort(SortBy::Latest);
        assert!(filter_state_to_params(&state, Some(SortBy::Latest)).is_empty());

        let mut state = FilterState::default();
        state.set_sort_by(SortBy::Rating);
        state.set_page(2);
        let written = filter_state_to_params(&state, Some(SortBy::Latest));
        assert_eq!(written.get("sort").map(String::as_str), Some("rating"));
        assert_eq!(written.get("page").map(String::as_str), Some("2"));

        let restored = filter_state_from_params(
            &written.into_iter().collect(),
            Some(SortBy::Latest),
        );
        assert_eq!(restored, state);
    }
}
