//! Фильтры списков админки. Все меняют общий `FilterState`
//! через его сеттеры, поэтому страница сбрасывается на первую.

use contracts::shared::list_query::{FilterState, FlagFilter, SortBy, StatusFilter};
use leptos::prelude::*;

#[component]
pub fn StatusFilterSelect(state: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span>"Status"</span>
            <select
                prop:value=move || state.with(|s| s.status_filter.as_str())
                on:change=move |ev| {
                    if let Some(status) = StatusFilter::from_param(&event_target_value(&ev)) {
                        state.update(|s| s.set_status_filter(status));
                    }
                }
            >
                <option value="all">"All"</option>
                <option value="published">"Published"</option>
                <option value="draft">"Draft"</option>
            </select>
        </label>
    }
}

/// Фильтр по булеву признаку: featured у проектов, verified у отзывов
#[component]
pub fn FlagFilterSelect(
    state: RwSignal<FilterState>,
    #[prop(into)] label: String,
    #[prop(into)] only_label: String,
    #[prop(into)] without_label: String,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span>{label}</span>
            <select
                prop:value=move || state.with(|s| s.flag_filter.as_str())
                on:change=move |ev| {
                    if let Some(flag) = FlagFilter::from_param(&event_target_value(&ev)) {
                        state.update(|s| s.set_flag_filter(flag));
                    }
                }
            >
                <option value="all">"All"</option>
                <option value="only">{only_label}</option>
                <option value="without">{without_label}</option>
            </select>
        </label>
    }
}

#[component]
pub fn SortSelect(state: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span>"Sort"</span>
            <select
                prop:value=move || state.with(|s| s.sort_by.map(|v| v.as_str()).unwrap_or("latest"))
                on:change=move |ev| {
                    if let Some(sort_by) = SortBy::from_param(&event_target_value(&ev)) {
                        state.update(|s| s.set_sort_by(sort_by));
                    }
                }
            >
                <option value="latest">"Latest"</option>
                <option value="rating">"Rating"</option>
                <option value="position">"Position"</option>
            </select>
        </label>
    }
}
