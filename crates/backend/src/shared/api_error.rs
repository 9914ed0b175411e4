use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ApiErrorBody;
use thiserror::Error;

use crate::shared::format::format_bytes;

/// Ошибка HTTP слоя; каждая превращается в `{ "error": ... }` со своим статусом
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("File is too large (limit {})", format_bytes(*limit_bytes))]
    PayloadTooLarge { limit_bytes: usize },

    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_id(id: &str) -> Self {
        AppError::BadRequest(format!("Invalid id: '{}'", id))
    }
}

/// Сервисы возвращают `anyhow`; если внутри лежит `AppError`, он достается как есть
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<AppError>() {
            Ok(app) => app,
            Err(other) => AppError::Internal(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Internal(e) = &self {
            tracing::error!("Request failed: {:#}", e);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }
        (status, Json(ApiErrorBody::new(self.to_string()))).into_response()
    }
}

pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::invalid_id("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("Title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("Project".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PayloadTooLarge { limit_bytes: 5 * 1024 * 1024 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::PayloadTooLarge { limit_bytes: 5 * 1024 * 1024 }.to_string(),
            "File is too large (limit 5 MB)"
        );
    }

    #[test]
    fn test_downcast_from_anyhow_keeps_kind() {
        let err: anyhow::Error = AppError::Validation("Rating must be between 1 and 5".into()).into();
        let app = AppError::from(err);
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.to_string(), "Validation failed: Rating must be between 1 and 5");

        let other = AppError::from(anyhow::anyhow!("disk I/O error"));
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // детали внутренних ошибок наружу не уходят
        assert_eq!(other.to_string(), "Internal server error");
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = AppError::NotFound("Project".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Project not found");
    }
}
