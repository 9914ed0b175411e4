//! Состояние страницы списка в админке.
//!
//! Список загружается целиком один раз, дальше фильтр, сортировка и
//! страница считаются в памяти через `FilterState::view`. Мутации меняют
//! локальный список только после успешного ответа сервера.

use crate::shared::query_state::use_filter_state;
use crate::shared::toast::{use_toast, ToastService};
use contracts::shared::list_patch::{apply_created, apply_removed, apply_updated};
use contracts::shared::list_query::{FilterState, ListItem, PageSlice, SortBy, PAGE_SIZE};
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

pub type ListFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, String>>>>;

pub struct AdminList<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub state: RwSignal<FilterState>,
    /// Идет загрузка списка
    pub loading: RwSignal<bool>,
    /// id строк, удаление которых еще не завершилось
    pub deleting: RwSignal<HashSet<String>>,
    fetch: fn() -> ListFuture<T>,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for AdminList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for AdminList<T> {}

impl<T> AdminList<T>
where
    T: ListItem + Clone + Send + Sync + 'static,
{
    pub fn new(fetch: fn() -> ListFuture<T>, default_sort: Option<SortBy>) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            state: use_filter_state(default_sort),
            loading: RwSignal::new(false),
            deleting: RwSignal::new(HashSet::new()),
            fetch,
            toast: use_toast(),
        }
    }

    /// Текущая страница отфильтрованного списка
    pub fn page(&self) -> Signal<PageSlice<T>> {
        let items = self.items;
        let state = self.state;
        Signal::derive(move || state.with(|s| items.with(|list| s.view(list, PAGE_SIZE))))
    }

    /// Подпись "N of M" для заголовка
    pub fn summary(&self) -> Signal<String> {
        let page = self.page();
        let items = self.items;
        Signal::derive(move || {
            format!("{} of {}", page.with(|p| p.total_count), items.with(Vec::len))
        })
    }

    /// Удержать номер страницы в границах после изменения списка
    fn clamp_page(&self) {
        let total = self
            .state
            .with_untracked(|s| self.items.with_untracked(|list| s.view(list, PAGE_SIZE).total_pages));
        self.state.update(|s| s.clamp_page(total));
    }

    /// Загрузить список заново
    pub fn reload(&self) {
        let this = *self;
        this.loading.set(true);
        leptos::task::spawn_local(async move {
            match (this.fetch)().await {
                Ok(list) => {
                    this.items.set(list);
                    this.clamp_page();
                }
                Err(e) => this.toast.error(format!("Failed to load list: {}", e)),
            }
            this.loading.set(false);
        });
    }

    /// Элемент создан или сохранен на сервере
    pub fn apply_saved(&self, item: T, created: bool) {
        self.items.update(|list| {
            if created {
                apply_created(list, item);
            } else {
                apply_updated(list, item);
            }
        });
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.with(|set| set.contains(id))
    }

    /// Удаление с подтверждением; строка пропадает только после успеха
    pub fn remove<F, Fut>(&self, id: String, question: &str, request: F)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false);
        if !confirmed || self.is_deleting(&id) {
            return;
        }

        let this = *self;
        this.deleting.update(|set| {
            set.insert(id.clone());
        });
        leptos::task::spawn_local(async move {
            match request(id.clone()).await {
                Ok(()) => {
                    this.items.update(|list| {
                        apply_removed(list, &id);
                    });
                    this.clamp_page();
                    this.toast.success("Deleted");
                }
                Err(e) => this.toast.error(format!("Delete failed: {}", e)),
            }
            this.deleting.update(|set| {
                set.remove(&id);
            });
        });
    }

    /// Переключить публикацию и перечитать список
    pub fn toggle_published<Fut>(&self, request: Fut)
    where
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let this = *self;
        leptos::task::spawn_local(async move {
            match request.await {
                Ok(()) => this.reload(),
                Err(e) => this.toast.error(format!("Status change failed: {}", e)),
            }
        });
    }
}
