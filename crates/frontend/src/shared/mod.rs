pub mod admin_list;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod query_state;
pub mod toast;
