// src/models/inspection.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Registro de Inspeção ---
// Vem pronto do backend/grid. Aqui só lemos.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    #[schema(example = 1024)]
    pub id: i64,

    // Eixo "Player": usuário dono da inspeção (o Guy)
    #[serde(default)]
    #[schema(example = 7)]
    pub id_user_guy: Option<i64>,

    // Eixo "MyJob": usuário responsável
    #[serde(default)]
    #[schema(example = 3)]
    pub id_user_guilty: Option<i64>,

    // Valores (None = ainda não lançado, NÃO é zero)
    #[serde(default)]
    #[schema(example = "1500.00")]
    pub honorario: Option<Decimal>,
    #[serde(default)]
    #[schema(example = "200.00")]
    pub despesa: Option<Decimal>,
    #[serde(default)]
    #[schema(example = "600.00")]
    pub guy_honorario: Option<Decimal>,
    #[serde(default)]
    #[schema(example = "80.00")]
    pub guy_despesa: Option<Decimal>,

    // Datas do workflow
    #[serde(default)]
    #[schema(example = "2024-03-01")]
    pub dt_inspecao: Option<String>,
    #[serde(default)]
    #[schema(example = "2024-03-10")]
    pub dt_entregue: Option<String>,
    #[serde(default)]
    pub dt_acerto: Option<String>,
    #[serde(default)]
    pub dt_envio: Option<String>,
    #[serde(default)]
    pub dt_pago: Option<String>,
    #[serde(default)]
    pub dt_denvio: Option<String>,
    #[serde(default)]
    pub dt_dpago: Option<String>,
    #[serde(default)]
    pub dt_guy_pago: Option<String>,
    #[serde(default)]
    pub dt_guy_dpago: Option<String>,

    // Contadores
    #[serde(default)]
    #[schema(example = 1)]
    pub loc: Option<i32>,
    #[serde(default)]
    #[schema(example = 1)]
    pub meta: Option<i32>,
    #[serde(default)]
    pub ms: Option<i32>,

    // Prazo em dias a partir da inspeção
    #[serde(default)]
    #[schema(example = 10)]
    pub prazo: Option<i32>,
}

// --- KPIs (totais do Express) ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    #[schema(example = 42)]
    pub express: u64,
    #[schema(example = "63000.00")]
    pub honorarios: Decimal,
    #[schema(example = "25200.00")]
    pub guy_honorario: Decimal,
    #[schema(example = "8400.00")]
    pub despesas: Decimal,
    #[schema(example = "3360.00")]
    pub guy_despesa: Decimal,
}

impl Kpis {
    pub fn resultado_operacional(&self) -> Decimal {
        self.honorarios.saturating_sub(self.despesas)
    }

    pub fn resultado_guy(&self) -> Decimal {
        self.guy_honorario.saturating_sub(self.guy_despesa)
    }

    /// Margem sobre o total de honorários. Sem honorários não existe margem,
    /// e uma razão que não cabe no `Decimal` também não.
    pub fn margem_operacional(&self) -> Option<Decimal> {
        if self.honorarios.is_zero() {
            return None;
        }
        self.resultado_operacional().checked_div(self.honorarios)
    }
}

// --- Filtros da TopBar ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGroups {
    pub workflow: bool,
    pub recebiveis: bool,
    pub pagamentos: bool,
}

impl Default for ColumnGroups {
    fn default() -> Self {
        Self { workflow: true, recebiveis: true, pagamentos: true }
    }
}

// Campos ausentes no JSON vêm do `Default`: DB Limit começa ligado, como na TopBar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub player: bool,
    pub my_job: bool,
    pub db_limit: bool,
    // Só repassado para a UI
    pub column_groups: ColumnGroups,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            player: false,
            my_job: false,
            db_limit: true,
            column_groups: ColumnGroups::default(),
        }
    }
}

// --- Agrupamento por Player ---

// No JSON: id do usuário, ou null para "sem Guy"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum PlayerKey {
    User(i64),
    Unassigned,
}

impl From<Option<i64>> for PlayerKey {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(id) => PlayerKey::User(id),
            None => PlayerKey::Unassigned,
        }
    }
}

impl From<PlayerKey> for Option<i64> {
    fn from(value: PlayerKey) -> Self {
        match value {
            PlayerKey::User(id) => Some(id),
            PlayerKey::Unassigned => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerGroup<'a> {
    pub player: PlayerKey,
    pub records: Vec<&'a InspectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    #[schema(value_type = Option<i64>, example = 7)]
    pub player: PlayerKey,
    #[schema(example = 12)]
    pub count: u64,
    pub honorarios: Decimal,
    pub despesas: Decimal,
    pub resultado: Decimal,
}
