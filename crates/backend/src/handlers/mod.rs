pub mod a001_team_member;
pub mod a002_timeline_entry;
pub mod a003_project;
pub mod a004_testimonial;
pub mod a005_client;
pub mod taxonomy;
pub mod upload;

use crate::shared::api_error::AppError;
use uuid::Uuid;

/// Разобрать id из пути; невалидный UUID дает 400
pub fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::invalid_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_id("42"), Err(AppError::BadRequest(_))));
    }
}
