//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every helper returns `Result<T, String>`; the error string is the
//! `{ error }` message from the backend when there is one.

use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/admin/team");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL картинки: пути от корня (загрузки) идут на backend, внешние ссылки как есть
pub fn asset_url(url: &str) -> String {
    if url.starts_with('/') {
        api_url(url)
    } else {
        url.to_string()
    }
}

/// Текст ошибки из ответа `{ error }` или код статуса
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => format!("Server error: HTTP {}", status),
    }
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET и разбор JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// POST с JSON телом и разбором JSON ответа
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// POST, ответ без тела
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// PUT с JSON телом и разбором JSON ответа
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// DELETE
pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// POST multipart/form-data
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_text() {
        assert_eq!(
            error_message(400, r#"{"error":"Validation failed: Name is required"}"#),
            "Validation failed: Name is required"
        );
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "Server error: HTTP 502");
        assert_eq!(error_message(500, r#"{"error":""}"#), "Server error: HTTP 500");
    }
}
