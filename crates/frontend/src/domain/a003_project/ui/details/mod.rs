//! Форма проекта (MVVM):
//! - view_model.rs: состояние формы и команды load / save
//! - view.rs: Leptos компонент
//! - assignments.rs: редактор категорий проекта

mod assignments;
mod view;
mod view_model;

pub use view::ProjectDetails;
pub use view_model::ProjectDetailsViewModel;
