use crate::domain::a004_testimonial::api;
use crate::shared::toast::{use_toast, ToastService};
use contracts::domain::a004_testimonial::aggregate::{Testimonial, TestimonialDto};
use leptos::prelude::*;

/// ViewModel формы отзыва
#[derive(Clone, Copy)]
pub struct TestimonialDetailsViewModel {
    pub form: RwSignal<TestimonialDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    toast: ToastService,
}

impl TestimonialDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TestimonialDto::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            toast: use_toast(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Те же проверки, что выполнит сервер
    pub fn validation_error(&self) -> Option<String> {
        self.form
            .with(|f| Testimonial::new_for_insert(f).validate().err())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(aggregate) => vm.form.set(aggregate.to_dto()),
                Err(e) => vm.error.set(Some(format!("Failed to load: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Сохранить; `on_saved` получает элемент и признак "создан"
    pub fn save_command(&self, on_saved: Callback<(Testimonial, bool)>) {
        if let Some(message) = self.validation_error() {
            self.error.set(Some(message));
            return;
        }

        let vm = *self;
        let toast = vm.toast;
        let current = vm.form.get_untracked();
        let created = current.id.is_none();
        vm.saving.set(true);
        vm.error.set(None);
        leptos::task::spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    toast.success(if created { "Testimonial created" } else { "Testimonial saved" });
                    on_saved.run((saved, created));
                }
                Err(e) => {
                    toast.error(format!("Save failed: {}", e));
                    vm.error.set(Some(e));
                }
            }
            vm.saving.set(false);
        });
    }
}
