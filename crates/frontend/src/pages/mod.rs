pub mod about;
pub mod admin_dashboard;
pub mod not_found;
pub mod portfolio;
pub mod privacy_policy;
pub mod project_details;
pub mod testimonials;
