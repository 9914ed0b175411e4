//! Подсветка совпадений и поле поиска для страниц списков

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед применением поискового запроса
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Диапазоны байтов `text`, совпадающие с `filter` без учета регистра
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // смещения в lowercase-строке совпадают с исходными только если длина не поменялась
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span class="search-highlight">{text[start..end].to_string()}</span>
        }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска: ввод отображается сразу, в `on_change` уходит
/// через [`SEARCH_DEBOUNCE_MS`] после последнего нажатия
#[component]
pub fn SearchInput(
    /// Примененное значение (из состояния списка / URL)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let draft = RwSignal::new(value.get_untracked());
    // сброс Timeout отменяет предыдущий отложенный вызов
    let pending = StoredValue::new_local(None::<Timeout>);

    let schedule = move |text: String| {
        draft.set(text.clone());
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timer));
    };

    let clear = move |_| {
        pending.set_value(None);
        draft.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                prop:value=move || draft.get()
                on:input=move |ev| schedule(event_target_value(&ev))
            />
            <Show when=move || !draft.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Web Development", "dev"), vec![(4, 7)]);
        assert_eq!(match_ranges("abcABC", "abc"), vec![(0, 3), (3, 6)]);
        assert!(match_ranges("Design", "cloud").is_empty());
        assert!(match_ranges("Design", "").is_empty());
    }

    #[test]
    fn test_match_ranges_keeps_spaces() {
        assert!(match_ranges("Jane Doe", "Doe ").is_empty());
        assert_eq!(match_ranges("Jane Doe", "e D"), vec![(3, 6)]);
        assert_eq!(match_ranges("Jane Doe", " "), vec![(4, 5)]);
    }
}
