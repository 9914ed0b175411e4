//! Форма клиента (MVVM):
//! - view_model.rs: состояние формы и команды load / save
//! - view.rs: Leptos компонент

mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
