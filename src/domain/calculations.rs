// src/domain/calculations.rs

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::dates::{is_filled, parse_date};
use crate::models::inspection::{InspectionRecord, Kpis, PlayerGroup, PlayerKey, PlayerSummary};

/// Limite padrão do botão "DB Limit".
pub const DEFAULT_DB_LIMIT: i64 = 500;

// =============================================================================
//  STATUS POR REGISTRO
// =============================================================================

/// Completa = inspecionada e entregue.
pub fn is_inspection_complete(record: &InspectionRecord) -> bool {
    is_filled(record.dt_inspecao.as_deref()) && is_filled(record.dt_entregue.as_deref())
}

/// Pago pelo Player (perna principal).
pub fn is_inspection_paid(record: &InspectionRecord) -> bool {
    is_filled(record.dt_pago.as_deref())
}

/// Guy pago (perna do colaborador). Não confundir com `is_inspection_paid`.
pub fn is_guy_paid(record: &InspectionRecord) -> bool {
    is_filled(record.dt_guy_pago.as_deref())
}

/// Atrasada: não completa e `dt_inspecao + prazo` já ficou para trás de
/// `reference`. Sem data de inspeção, sem prazo ou data ilegível: nunca atrasada.
pub fn is_inspection_overdue(record: &InspectionRecord, reference: NaiveDate) -> bool {
    if is_inspection_complete(record) {
        return false;
    }

    let Some(prazo) = record.prazo else {
        return false;
    };

    let Some(inspected) = record
        .dt_inspecao
        .as_deref()
        .and_then(|s| parse_date(s, reference))
    else {
        return false;
    };

    match inspected.checked_add_signed(Duration::days(i64::from(prazo))) {
        Some(deadline) => deadline < reference,
        None => false,
    }
}

pub fn is_inspection_overdue_now(record: &InspectionRecord) -> bool {
    is_inspection_overdue(record, Local::now().date_naive())
}

// =============================================================================
//  KPIs
// =============================================================================

/// Totais do Express numa passada só. Valores nulos somam zero mas o registro
/// continua contando em `express`.
///
/// As somas saturam em `Decimal::MAX` / `Decimal::MIN`.
pub fn calculate_kpis<'a, I>(records: I) -> Kpis
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    records.into_iter().fold(Kpis::default(), |mut acc, r| {
        acc.express += 1;
        acc.honorarios = acc.honorarios.saturating_add(amount(r.honorario));
        acc.guy_honorario = acc.guy_honorario.saturating_add(amount(r.guy_honorario));
        acc.despesas = acc.despesas.saturating_add(amount(r.despesa));
        acc.guy_despesa = acc.guy_despesa.saturating_add(amount(r.guy_despesa));
        acc
    })
}

fn amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

pub fn calculate_resultado_operacional(record: &InspectionRecord) -> Decimal {
    amount(record.honorario).saturating_sub(amount(record.despesa))
}

pub fn calculate_resultado_guy(record: &InspectionRecord) -> Decimal {
    amount(record.guy_honorario).saturating_sub(amount(record.guy_despesa))
}

/// `resultado / honorario` como razão (0.8 = 80%).
/// Retorna `None` quando não há honorário, ele é zero ou a razão estoura o `Decimal`.
pub fn calculate_margem_operacional(record: &InspectionRecord) -> Option<Decimal> {
    let honorario = record.honorario.filter(|h| !h.is_zero())?;
    calculate_resultado_operacional(record).checked_div(honorario)
}

// =============================================================================
//  FILTROS
// =============================================================================

/// Registros cujo dono (Guy) é `user_id`.
pub fn filter_by_player<'a, I>(records: I, user_id: i64) -> Vec<&'a InspectionRecord>
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    records
        .into_iter()
        .filter(|r| r.id_user_guy == Some(user_id))
        .collect()
}

/// Registros em que `user_id` é o responsável (guilty).
pub fn filter_by_my_job<'a, I>(records: I, user_id: i64) -> Vec<&'a InspectionRecord>
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    records
        .into_iter()
        .filter(|r| r.id_user_guilty == Some(user_id))
        .collect()
}

pub fn apply_db_limit<'a, I>(records: I, limit: i64) -> Vec<&'a InspectionRecord>
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
    records.into_iter().take(take).collect()
}

// =============================================================================
//  AGRUPAMENTOS
// =============================================================================

/// Agrupa por dono. Os grupos saem na ordem em que cada dono aparece pela
/// primeira vez; registros sem dono vão para `PlayerKey::Unassigned`.
pub fn group_by_player<'a, I>(records: I) -> Vec<PlayerGroup<'a>>
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    let mut index: HashMap<PlayerKey, usize> = HashMap::new();
    let mut groups: Vec<PlayerGroup<'a>> = Vec::new();

    for record in records {
        let key = PlayerKey::from(record.id_user_guy);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(PlayerGroup { player: key, records: Vec::new() });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}

/// Resumo financeiro por Player, do maior honorário para o menor.
pub fn summarize_players<'a, I>(records: I) -> Vec<PlayerSummary>
where
    I: IntoIterator<Item = &'a InspectionRecord>,
{
    let mut summaries: Vec<PlayerSummary> = group_by_player(records)
        .into_iter()
        .map(|group| {
            let kpis = calculate_kpis(group.records.iter().copied());
            PlayerSummary {
                player: group.player,
                count: kpis.express,
                honorarios: kpis.honorarios,
                despesas: kpis.despesas,
                resultado: kpis.resultado_operacional(),
            }
        })
        .collect();

    // sort_by é estável: empates mantêm a ordem de aparição
    summaries.sort_by(|a, b| b.honorarios.cmp(&a.honorarios));
    summaries
}
