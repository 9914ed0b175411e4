use axum::{extract::Multipart, http::StatusCode, Json};
use contracts::shared::api::UploadResponse;

use crate::shared::api_error::{ApiResult, AppError};
use crate::shared::upload::get_uploads;

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        let limit_bytes = get_uploads().map(|u| u.max_bytes()).unwrap_or_default();
        AppError::PayloadTooLarge { limit_bytes }
    } else {
        AppError::BadRequest(format!("Malformed multipart body: {}", e.body_text()))
    }
}

/// POST /api/upload
///
/// Поля формы: `file` (обязательное), `folder` (необязательное)
pub async fn upload(mut multipart: Multipart) -> ApiResult<Json<UploadResponse>> {
    let uploads = get_uploads()?;

    let mut folder: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, bytes.to_vec()));
            }
            Some("folder") => {
                folder = Some(field.text().await.map_err(multipart_error)?);
            }
            other => {
                tracing::debug!("Ignoring multipart field {:?}", other);
            }
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;
    let url = uploads.save(folder.as_deref(), &file_name, &bytes).await?;

    Ok(Json(UploadResponse { url }))
}
