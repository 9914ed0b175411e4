use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::shared::format::format_bytes;

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing:
/// - Время (UTC)
/// - Длительность (ms)
/// - Размер ответа
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    // Статика отдается потоком, тело не буферизуем
    if path.starts_with("/uploads/") || !path.starts_with("/api/") {
        log_line(&method, &path, response.status(), start, "stream".into());
        return response;
    }

    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to read response body for {} {}: {}", method, path, e);
            log_line(&method, &path, parts.status, start, "error".into());
            return Response::from_parts(parts, Body::default());
        }
    };

    log_line(&method, &path, parts.status, start, format_bytes(bytes.len()));

    // Создаем новый ответ с прочитанным телом
    Response::from_parts(parts, Body::from(bytes))
}

fn log_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    start: std::time::Instant,
    size: String,
) {
    let line = format!(
        "{} | {:>5}ms | {:>10} | {} {:>6} {}",
        Utc::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
    if status.is_server_error() {
        tracing::error!("{}", line);
    } else if status.is_client_error() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }
}
