pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    // Initialize database (creates missing tables)
    let db_path = shared::config::get_database_path(&config);
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let uploads_dir = shared::upload::initialize_uploads(&config)?;
    tracing::info!("Uploads directory: {}", uploads_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let uploads_prefix = config.uploads.public_prefix.trim_end_matches('/').to_string();
    let app = routes::configure_routes(config.uploads.max_size_bytes())
        .nest_service(&uploads_prefix, ServeDir::new(&uploads_dir))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {e}"))?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            tracing::error!("Port {} is already in use", addr.port());
        } else {
            tracing::error!("Failed to bind to {}: {}", addr, e);
        }
        e
    })?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
