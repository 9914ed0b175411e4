use crate::shared::icons::icon;
use contracts::shared::list_query::{page_window, PageToken};
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1. При большом числе страниц номера
/// сворачиваются: первая, последняя, текущая ±1 и многоточия.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|token| match token {
                        PageToken::Page(page) => view! {
                            <button
                                class=if page == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }.into_any(),
                        PageToken::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} item(s)", total_count.get())}
            </span>
        </div>
    }
}
