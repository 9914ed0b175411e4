use leptos::prelude::*;
use thaw::*;

/// Заголовок страницы админки: название, счетчик, индикатор загрузки и кнопки
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Подпись под заголовком, например "12 of 40"
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,

    /// Идет загрузка списка
    #[prop(optional, into)]
    loading: Option<Signal<bool>>,

    /// Кнопки справа
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <div class="page-header__subtitle">{move || s.get()}</div>
                })}
            </div>
            <Show when=move || loading.map(|l| l.get()).unwrap_or(false)>
                <Spinner size=SpinnerSize::Small />
            </Show>
            {children.map(|c| view! {
                <div class="page-header__actions">
                    <Space>{c()}</Space>
                </div>
            })}
        </div>
    }
}
