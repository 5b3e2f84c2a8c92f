// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Local;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{DashboardRequest, DashboardSummary},
};

// POST /api/dashboard/summary
#[utoipa::path(
    post,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    request_body = DashboardRequest,
    responses(
        (status = 200, description = "KPIs do Express, resultado, margem e resumo por Player", body = DashboardSummary),
        (status = 400, description = "JSON malformado")
    ),
    params(
        ("accept-language" = Option<String>, Header, description = "Locale dos textos formatados (pt-BR, en-US)")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    WithRejection(Json(payload), _): WithRejection<Json<DashboardRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let format = locale.resolve(app_state.format);

    tracing::info!(
        "POST /dashboard/summary | viewer={} | registros={} | player={} | my_job={} | db_limit={}",
        payload.viewer_id,
        payload.records.len(),
        payload.filters.player,
        payload.filters.my_job,
        payload.filters.db_limit
    );

    let summary = app_state.dashboard_service.summary(
        &payload.records,
        &payload.filters,
        payload.viewer_id,
        today,
        &format,
    );

    Ok((StatusCode::OK, Json(summary)))
}
