//! Форма записи хронологии (MVVM):
//! - view_model.rs: состояние формы и команды load / save
//! - view.rs: Leptos компонент

mod view;
mod view_model;

pub use view::TimelineEntryDetails;
pub use view_model::TimelineEntryDetailsViewModel;
