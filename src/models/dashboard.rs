// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::alerts::RecordAlerts;
use crate::models::inspection::{FilterState, InspectionRecord, Kpis, PlayerSummary};

// --- Requests ---

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    // Usuário logado (base dos filtros Player / MyJob)
    #[schema(example = 7)]
    pub viewer_id: i64,
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub records: Vec<InspectionRecord>,
    // Data de referência; sem ela usamos o dia de hoje
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2024-06-30")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    #[serde(default)]
    pub records: Vec<InspectionRecord>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2024-06-30")]
    pub today: Option<NaiveDate>,
}

// --- Respostas ---

// 1. Cards do topo (Express)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub kpis: Kpis,
    pub resultado_operacional: Decimal,
    pub resultado_guy: Decimal,
    // null quando não há honorários
    pub margem_operacional: Option<Decimal>,
    #[schema(example = 3)]
    pub overdue: u64,
    pub players: Vec<PlayerSummary>,
    pub formatted: FormattedSummary,
}

// Textos prontos para os cards, já no locale do cliente
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSummary {
    #[schema(example = "1.234")]
    pub express: String,
    #[schema(example = "R$ 63K")]
    pub honorarios: String,
    #[schema(example = "R$ 25K")]
    pub guy_honorario: String,
    #[schema(example = "R$ 8K")]
    pub despesas: String,
    #[schema(example = "R$ 3K")]
    pub guy_despesa: String,
    #[schema(example = "R$ 54.600")]
    pub resultado_operacional: String,
    #[schema(example = "86,67%")]
    pub margem_operacional: String,
}

// 2. Status de cada linha do grid
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionStatusView {
    #[schema(example = 1024)]
    pub id: i64,
    pub complete: bool,
    pub paid: bool,
    pub guy_paid: bool,
    pub overdue: bool,
    pub resultado_operacional: Decimal,
    pub resultado_guy: Decimal,
    pub margem_operacional: Option<Decimal>,
    pub alerts: RecordAlerts,
    pub display: InspectionDisplay,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDisplay {
    #[schema(example = "01/03/24")]
    pub dt_inspecao: String,
    #[schema(example = "10/03/24")]
    pub dt_entregue: String,
    #[schema(example = "R$ 1.500")]
    pub honorario: String,
    #[schema(example = "R$ 200")]
    pub despesa: String,
    #[schema(example = "Sim")]
    pub meta: String,
    #[schema(example = "01")]
    pub loc: String,
}
