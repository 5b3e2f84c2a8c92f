// src/domain/alerts.rs

// Regras dos "dots" do grid. Cada coluna de pagamento acende um alerta
// conforme os dias corridos desde o evento que deveria ter gerado o pagamento.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::dates::{days_since, is_filled, parse_date};
use crate::models::inspection::InspectionRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    None,
    Warning,
    Danger,
    Success,
}

/// Inspeção sem entrega: 1 a 14 dias depois da data -> warning, depois disso danger.
pub fn inspecao_alert(
    dt_inspecao: Option<&str>,
    dt_entregue: Option<&str>,
    today: NaiveDate,
) -> AlertLevel {
    if is_filled(dt_entregue) {
        return AlertLevel::None;
    }

    match elapsed_days(dt_inspecao, today) {
        Some(days) if days <= 0 => AlertLevel::None,
        Some(days) if days <= 14 => AlertLevel::Warning,
        Some(_) => AlertLevel::Danger,
        None => AlertLevel::None,
    }
}

/// Honorário enviado (acerto) e ainda não pago pelo Player.
pub fn acerto_alert(
    dt_envio: Option<&str>,
    dt_pago: Option<&str>,
    honorario: Option<Decimal>,
    today: NaiveDate,
) -> AlertLevel {
    if !relevant(honorario) || is_filled(dt_pago) {
        return AlertLevel::None;
    }
    collection_level(elapsed_days(dt_envio, today))
}

/// Despesa enviada e ainda não reembolsada.
pub fn despesa_envio_alert(
    dt_denvio: Option<&str>,
    dt_dpago: Option<&str>,
    despesa: Option<Decimal>,
    today: NaiveDate,
) -> AlertLevel {
    if !relevant(despesa) || is_filled(dt_dpago) {
        return AlertLevel::None;
    }
    collection_level(elapsed_days(dt_denvio, today))
}

/// Honorário do Guy. Pago acende verde; senão conta a partir da entrega.
pub fn guy_pago_alert(
    dt_entregue: Option<&str>,
    dt_guy_pago: Option<&str>,
    guy_honorario: Option<Decimal>,
    today: NaiveDate,
) -> AlertLevel {
    guy_leg_level(dt_entregue, dt_guy_pago, guy_honorario, today)
}

/// Despesa do Guy, mesma regra do honorário.
pub fn guy_despesa_alert(
    dt_entregue: Option<&str>,
    dt_guy_dpago: Option<&str>,
    guy_despesa: Option<Decimal>,
    today: NaiveDate,
) -> AlertLevel {
    guy_leg_level(dt_entregue, dt_guy_dpago, guy_despesa, today)
}

fn guy_leg_level(
    dt_entregue: Option<&str>,
    dt_paid: Option<&str>,
    amount: Option<Decimal>,
    today: NaiveDate,
) -> AlertLevel {
    if !relevant(amount) {
        return AlertLevel::None;
    }
    if is_filled(dt_paid) {
        return AlertLevel::Success;
    }
    collection_level(elapsed_days(dt_entregue, today))
}

// Valores até R$ 1 não geram cobrança
fn relevant(amount: Option<Decimal>) -> bool {
    amount.is_some_and(|v| v > Decimal::ONE)
}

fn elapsed_days(date: Option<&str>, today: NaiveDate) -> Option<i64> {
    let date = date.filter(|d| is_filled(Some(*d)))?;
    parse_date(date, today).map(|d| days_since(d, today))
}

fn collection_level(days: Option<i64>) -> AlertLevel {
    match days {
        Some(d) if d >= 30 => AlertLevel::Danger,
        Some(d) if d >= 15 => AlertLevel::Warning,
        _ => AlertLevel::None,
    }
}

/// Os cinco alertas de uma linha do grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAlerts {
    pub inspecao: AlertLevel,
    pub acerto: AlertLevel,
    pub despesa_envio: AlertLevel,
    pub guy_pago: AlertLevel,
    pub guy_despesa: AlertLevel,
}

impl RecordAlerts {
    pub fn for_record(record: &InspectionRecord, today: NaiveDate) -> Self {
        let entregue = record.dt_entregue.as_deref();
        Self {
            inspecao: inspecao_alert(record.dt_inspecao.as_deref(), entregue, today),
            acerto: acerto_alert(
                record.dt_envio.as_deref(),
                record.dt_pago.as_deref(),
                record.honorario,
                today,
            ),
            despesa_envio: despesa_envio_alert(
                record.dt_denvio.as_deref(),
                record.dt_dpago.as_deref(),
                record.despesa,
                today,
            ),
            guy_pago: guy_pago_alert(
                entregue,
                record.dt_guy_pago.as_deref(),
                record.guy_honorario,
                today,
            ),
            guy_despesa: guy_despesa_alert(
                entregue,
                record.dt_guy_dpago.as_deref(),
                record.guy_despesa,
                today,
            ),
        }
    }

    pub fn has_danger(&self) -> bool {
        [self.inspecao, self.acerto, self.despesa_envio, self.guy_pago, self.guy_despesa]
            .contains(&AlertLevel::Danger)
    }
}
