pub mod a001_team_member;
pub mod a002_timeline_entry;
pub mod a003_project;
pub mod a004_testimonial;
pub mod a005_client;
pub mod public_view;
