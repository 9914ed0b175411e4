//! Поля форм, привязанные к DTO в `RwSignal`.
//! Значение читается через `value`, изменения уходят в `on_input`.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class=if required { "form__label form__label--required" } else { "form__label" }>
                {label}
            </label>
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Необязательное текстовое поле: пустая строка превращается в None
#[component]
pub fn OptionalTextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<String>>,
    on_input: Callback<Option<String>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get().unwrap_or_default()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    on_input.run(if text.trim().is_empty() { None } else { Some(text) });
                }
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__input"
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Ручная позиция; пустое поле = без позиции
#[component]
pub fn PositionField(
    #[prop(into)] value: Signal<Option<i32>>,
    on_input: Callback<Option<i32>>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--narrow">
            <label class="form__label">"Position"</label>
            <input
                type="number"
                class="form__input"
                placeholder="auto"
                prop:value=move || value.get().map(|p| p.to_string()).unwrap_or_default()
                on:input=move |ev| on_input.run(parse_position(&event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

pub fn parse_position(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 3 "), Some(3));
        assert_eq!(parse_position("-1"), Some(-1));
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("first"), None);
    }
}
