//! Одно модальное окно на страницу админки: список открывает в нем
//! форму создания / редактирования и закрывает после сохранения.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ModalService {
    open: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    /// Реактивно: компоненты, читающие флаг, перерисуются при смене
    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Окно с заголовком. Содержимое создается заново при каждом открытии,
/// поэтому форма внутри всегда стартует с чистым состоянием.
#[component]
pub fn Modal(#[prop(into)] title: Signal<String>, children: ChildrenFn) -> impl IntoView {
    let modal = use_modal();
    let on_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            modal.hide();
        }
    };

    view! {
        <Show when=move || modal.is_open()>
            <div class="modal-overlay" tabindex="-1" on:click=move |_| modal.hide() on:keydown=on_key>
                <div class="modal-content" role="dialog" on:click=|e| e.stop_propagation()>
                    <header class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button class="modal-close" title="Close" on:click=move |_| modal.hide()>
                            {icon("x")}
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
