// src/handlers/inspections.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Local;
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    domain::validators::{has_form_errors, validate_new_inspection_form},
    middleware::i18n::Locale,
    models::{
        dashboard::{InspectionStatusView, StatusRequest},
        inspection_form::NewInspectionForm,
    },
};

// POST /api/inspections/status
#[utoipa::path(
    post,
    path = "/api/inspections/status",
    tag = "Inspections",
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status derivado e alertas de cada linha, na ordem recebida", body = Vec<InspectionStatusView>),
        (status = 400, description = "JSON malformado")
    ),
    params(
        ("accept-language" = Option<String>, Header, description = "Locale dos textos formatados (pt-BR, en-US)")
    )
)]
pub async fn get_statuses(
    State(app_state): State<AppState>,
    locale: Locale,
    WithRejection(Json(payload), _): WithRejection<Json<StatusRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let format = locale.resolve(app_state.format);

    let statuses = app_state
        .dashboard_service
        .statuses(&payload.records, today, &format);

    tracing::info!(
        "POST /inspections/status | registros={} | atrasados={}",
        statuses.len(),
        statuses.iter().filter(|s| s.overdue).count()
    );

    Ok((StatusCode::OK, Json(statuses)))
}

// POST /api/inspections/validate
#[utoipa::path(
    post,
    path = "/api/inspections/validate",
    tag = "Inspections",
    request_body = NewInspectionForm,
    responses(
        (status = 200, description = "Formulário válido"),
        (status = 400, description = "JSON malformado"),
        (status = 422, description = "Campos inválidos, com a mensagem de cada um")
    )
)]
pub async fn validate_form(
    WithRejection(Json(payload), _): WithRejection<Json<NewInspectionForm>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validate_new_inspection_form(&payload, Local::now().date_naive());

    if has_form_errors(&errors) {
        tracing::info!("Formulário de inspeção recusado: {:?}", errors);
        return Err(AppError::InvalidForm(errors));
    }

    Ok((StatusCode::OK, Json(json!({ "valid": true }))))
}
