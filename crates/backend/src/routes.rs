use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Запас сверх лимита файла на заголовки multipart
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(upload_limit: usize) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(public_routes())
        .merge(admin_routes())
        // ========================================
        // UPLOAD
        // ========================================
        .route(
            "/api/upload",
            post(handlers::upload::upload)
                .layer(DefaultBodyLimit::max(upload_limit + MULTIPART_OVERHEAD)),
        )
}

/// Публичное API сайта: только опубликованные записи
fn public_routes() -> Router {
    Router::new()
        .route("/api/taxonomy", get(handlers::taxonomy::get_taxonomy))
        .route(
            "/api/team",
            get(handlers::a001_team_member::list_published),
        )
        .route(
            "/api/timeline",
            get(handlers::a002_timeline_entry::list_published),
        )
        .route(
            "/api/projects",
            get(handlers::a003_project::list_published),
        )
        .route(
            "/api/projects/:slug",
            get(handlers::a003_project::get_published_by_slug),
        )
        .route(
            "/api/testimonials",
            get(handlers::a004_testimonial::list_published),
        )
        .route(
            "/api/clients",
            get(handlers::a005_client::list_published),
        )
}

/// Админка: все записи, включая черновики
fn admin_routes() -> Router {
    Router::new()
        // A001 Team
        .route(
            "/api/admin/team",
            get(handlers::a001_team_member::list_all).post(handlers::a001_team_member::create),
        )
        .route(
            "/api/admin/team/:id",
            get(handlers::a001_team_member::get_by_id)
                .put(handlers::a001_team_member::update)
                .delete(handlers::a001_team_member::delete),
        )
        .route(
            "/api/admin/team/:id/publish",
            post(handlers::a001_team_member::set_published),
        )
        // A002 Timeline
        .route(
            "/api/admin/timeline",
            get(handlers::a002_timeline_entry::list_all)
                .post(handlers::a002_timeline_entry::create),
        )
        .route(
            "/api/admin/timeline/:id",
            get(handlers::a002_timeline_entry::get_by_id)
                .put(handlers::a002_timeline_entry::update)
                .delete(handlers::a002_timeline_entry::delete),
        )
        .route(
            "/api/admin/timeline/:id/publish",
            post(handlers::a002_timeline_entry::set_published),
        )
        // A003 Projects
        .route(
            "/api/admin/projects",
            get(handlers::a003_project::list_all).post(handlers::a003_project::create),
        )
        .route(
            "/api/admin/projects/testdata",
            post(handlers::a003_project::insert_test_data),
        )
        .route(
            "/api/admin/projects/:id",
            get(handlers::a003_project::get_by_id)
                .put(handlers::a003_project::update)
                .delete(handlers::a003_project::delete),
        )
        .route(
            "/api/admin/projects/:id/publish",
            post(handlers::a003_project::set_published),
        )
        // A004 Testimonials
        .route(
            "/api/admin/testimonials",
            get(handlers::a004_testimonial::list_all).post(handlers::a004_testimonial::create),
        )
        .route(
            "/api/admin/testimonials/:id",
            get(handlers::a004_testimonial::get_by_id)
                .put(handlers::a004_testimonial::update)
                .delete(handlers::a004_testimonial::delete),
        )
        .route(
            "/api/admin/testimonials/:id/publish",
            post(handlers::a004_testimonial::set_published),
        )
        // A005 Clients
        .route(
            "/api/admin/clients",
            get(handlers::a005_client::list_all).post(handlers::a005_client::create),
        )
        .route(
            "/api/admin/clients/:id",
            get(handlers::a005_client::get_by_id)
                .put(handlers::a005_client::update)
                .delete(handlers::a005_client::delete),
        )
        .route(
            "/api/admin/clients/:id/publish",
            post(handlers::a005_client::set_published),
        )
}
