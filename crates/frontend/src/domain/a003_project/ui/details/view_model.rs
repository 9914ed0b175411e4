use crate::domain::a003_project::api;
use crate::shared::toast::{use_toast, ToastService};
use contracts::domain::a003_project::aggregate::{Project, ProjectDto};
use leptos::prelude::*;

/// ViewModel формы проекта
#[derive(Clone, Copy)]
pub struct ProjectDetailsViewModel {
    pub form: RwSignal<ProjectDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Сырой ввод технологий через запятую; разбирается при сохранении
    pub technologies_input: RwSignal<String>,
    toast: ToastService,
}

impl ProjectDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProjectDto::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            technologies_input: RwSignal::new(String::new()),
            toast: use_toast(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Те же проверки, что выполнит сервер
    pub fn validation_error(&self) -> Option<String> {
        self.form
            .with(|f| Project::new_for_insert(f).validate().err())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(aggregate) => {
                    vm.technologies_input.set(aggregate.technologies.join(", "));
                    vm.form.set(aggregate.to_dto());
                }
                Err(e) => vm.error.set(Some(format!("Failed to load: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Сохранить; `on_saved` получает элемент и признак "создан"
    pub fn save_command(&self, on_saved: Callback<(Project, bool)>) {
        let technologies = parse_technologies(&self.technologies_input.get_untracked());
        self.form.update(|f| f.technologies = technologies);
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
                    toast.success(if created { "Project created" } else { "Project saved" });
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

/// "Rust, Axum ,, rust" -> ["Rust", "Axum"]; пустые и повторы отбрасываются
pub fn parse_technologies(raw: &str) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !result.iter().any(|r| r.eq_ignore_ascii_case(item)) {
            result.push(item.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_technologies() {
        assert_eq!(
            parse_technologies("Rust, Axum ,, rust,  SQLite "),
            vec!["Rust", "Axum", "SQLite"]
        );
        assert!(parse_technologies(" , ").is_empty());
    }
}
