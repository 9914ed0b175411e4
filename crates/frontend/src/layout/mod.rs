pub mod admin_shell;
pub mod modal_service;
pub mod public_shell;

pub use modal_service::{Modal, ModalService};
