//src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod docs;
pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

/// Router completo, já com o estado aplicado.
pub fn app(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/summary", post(handlers::dashboard::get_summary));

    let inspection_routes = Router::new()
        .route("/status", post(handlers::inspections::get_statuses))
        .route("/validate", post(handlers::inspections::validate_form));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/inspections", inspection_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
