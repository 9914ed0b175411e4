pub mod form_fields;
pub mod image_upload;
pub mod list_filters;
pub mod page_header;
pub mod pagination_controls;
pub mod row_actions;
