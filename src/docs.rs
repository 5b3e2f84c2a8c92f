// src/docs.rs

use utoipa::OpenApi;
use crate::domain;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_summary,

        // --- Inspections ---
        handlers::inspections::get_statuses,
        handlers::inspections::validate_form,
    ),
    components(
        schemas(
            // --- Registros ---
            models::inspection::InspectionRecord,
            models::inspection::FilterState,
            models::inspection::ColumnGroups,

            // --- Dashboard ---
            models::inspection::Kpis,
            models::inspection::PlayerSummary,
            models::dashboard::DashboardRequest,
            models::dashboard::DashboardSummary,
            models::dashboard::FormattedSummary,

            // --- Status / Alertas ---
            models::dashboard::StatusRequest,
            models::dashboard::InspectionStatusView,
            models::dashboard::InspectionDisplay,
            domain::alerts::AlertLevel,
            domain::alerts::RecordAlerts,

            // --- Formulário ---
            models::inspection_form::NewInspectionForm,
            models::inspection_form::InspectionFormErrors,
        )
    ),
    tags(
        (name = "Dashboard", description = "KPIs do Express e resumo por Player"),
        (name = "Inspections", description = "Status, alertas e validação de inspeções")
    ),
    modifiers(&InfoAddon)
)]
pub struct ApiDoc;

struct InfoAddon;

impl utoipa::Modify for InfoAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = "xFinance API".to_string();
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
        openapi.info.description = Some(
            "Cálculos do dashboard: KPIs, filtros, status de inspeções e validação de formulários."
                .to_string(),
        );
    }
}
