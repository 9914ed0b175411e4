pub mod api;
pub mod category_matcher;
pub mod list_patch;
pub mod list_query;
pub mod project_counts;
pub mod slug;
pub mod taxonomy;
