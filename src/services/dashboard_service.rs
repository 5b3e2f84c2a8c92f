// src/services/dashboard_service.rs

use chrono::NaiveDate;

use crate::{
    domain::{
        alerts::RecordAlerts,
        calculations::{
            apply_db_limit, calculate_kpis, calculate_margem_operacional, calculate_resultado_guy,
            calculate_resultado_operacional, filter_by_my_job, filter_by_player, is_guy_paid,
            is_inspection_complete, is_inspection_overdue, is_inspection_paid, summarize_players,
        },
        formatters::{
            format_currency, format_currency_compact, format_date_short, format_meta, format_loc,
            format_number, format_percent, FormatConfig,
        },
    },
    models::{
        dashboard::{DashboardSummary, FormattedSummary, InspectionDisplay, InspectionStatusView},
        inspection::{FilterState, InspectionRecord},
    },
};

#[derive(Clone)]
pub struct DashboardService {
    db_limit: i64,
}

impl DashboardService {
    pub fn new(db_limit: i64) -> Self {
        Self { db_limit }
    }

    /// Aplica os botões da TopBar na ordem Player -> MyJob -> DB Limit.
    pub fn apply_filters<'a>(
        &self,
        records: &'a [InspectionRecord],
        filters: &FilterState,
        viewer_id: i64,
    ) -> Vec<&'a InspectionRecord> {
        let mut view: Vec<&'a InspectionRecord> = records.iter().collect();

        if filters.player {
            view = filter_by_player(view, viewer_id);
        }
        if filters.my_job {
            view = filter_by_my_job(view, viewer_id);
        }
        if filters.db_limit {
            view = apply_db_limit(view, self.db_limit);
        }

        view
    }

    pub fn summary(
        &self,
        records: &[InspectionRecord],
        filters: &FilterState,
        viewer_id: i64,
        today: NaiveDate,
        cfg: &FormatConfig,
    ) -> DashboardSummary {
        let view = self.apply_filters(records, filters, viewer_id);

        let kpis = calculate_kpis(view.iter().copied());
        let overdue = view
            .iter()
            .filter(|r| is_inspection_overdue(r, today))
            .count() as u64;
        let players = summarize_players(view.iter().copied());

        tracing::debug!(
            "Resumo calculado: {} de {} registros, {} atrasados",
            kpis.express,
            records.len(),
            overdue
        );

        let formatted = FormattedSummary {
            express: format_number(Some(kpis.express.into()), 0, cfg),
            honorarios: format_currency_compact(Some(kpis.honorarios), cfg),
            guy_honorario: format_currency_compact(Some(kpis.guy_honorario), cfg),
            despesas: format_currency_compact(Some(kpis.despesas), cfg),
            guy_despesa: format_currency_compact(Some(kpis.guy_despesa), cfg),
            resultado_operacional: format_currency(Some(kpis.resultado_operacional()), cfg),
            margem_operacional: format_percent(kpis.margem_operacional(), 2, cfg),
        };

        DashboardSummary {
            kpis,
            resultado_operacional: kpis.resultado_operacional(),
            resultado_guy: kpis.resultado_guy(),
            margem_operacional: kpis.margem_operacional(),
            overdue,
            players,
            formatted,
        }
    }

    pub fn statuses(
        &self,
        records: &[InspectionRecord],
        today: NaiveDate,
        cfg: &FormatConfig,
    ) -> Vec<InspectionStatusView> {
        records
            .iter()
            .map(|r| InspectionStatusView {
                id: r.id,
                complete: is_inspection_complete(r),
                paid: is_inspection_paid(r),
                guy_paid: is_guy_paid(r),
                overdue: is_inspection_overdue(r, today),
                resultado_operacional: calculate_resultado_operacional(r),
                resultado_guy: calculate_resultado_guy(r),
                margem_operacional: calculate_margem_operacional(r),
                alerts: RecordAlerts::for_record(r, today),
                display: InspectionDisplay {
                    dt_inspecao: format_date_short(r.dt_inspecao.as_deref()),
                    dt_entregue: format_date_short(r.dt_entregue.as_deref()),
                    honorario: format_currency(r.honorario, cfg),
                    despesa: format_currency(r.despesa, cfg),
                    meta: format_meta(r.meta),
                    loc: format_loc(r.loc),
                },
            })
            .collect()
    }
}
