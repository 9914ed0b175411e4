use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Бейдж статуса, по клику переключает публикацию
#[component]
pub fn PublishToggle(published: bool, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button class="status-toggle" title="Toggle published" on:click=move |_| on_toggle.run(())>
            {if published {
                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Published"</Badge> }.into_any()
            } else {
                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Draft"</Badge> }.into_any()
            }}
        </button>
    }
}

/// Кнопка удаления строки; пока идет запрос показывает спиннер
#[component]
pub fn DeleteButton(#[prop(into)] busy: Signal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            disabled=busy
            on_click=move |_| on_click.run(())
        >
            {move || if busy.get() {
                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
            } else {
                icon("delete")
            }}
        </Button>
    }
}
