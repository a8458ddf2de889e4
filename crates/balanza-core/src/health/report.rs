//! Report assembly: run the rules, tally the score, build the response

use chrono::NaiveDate;

use crate::error::{Error, Result};

use super::aggregate::{aggregate_as_of, RecordStore};
use super::rules::RULES;
use super::types::{
    round_whole, AggregatedPeriod, FinancialSummary, HealthReport, RuleKey, RuleResult,
    RuleResults, ScoreSummary,
};

/// Tally the aggregate score over a set of rule verdicts.
///
/// `porcentaje` is the passed fraction as a whole percent, rounded half up.
pub fn score(results: &[(RuleKey, RuleResult)]) -> ScoreSummary {
    let total = results.len() as u32;
    let cumplidas = results.iter().filter(|(_, r)| r.cumple).count() as u32;
    let porcentaje = if total == 0 {
        0
    } else {
        round_whole(f64::from(cumplidas) / f64::from(total) * 100.0)
    };
    ScoreSummary {
        cumplidas,
        total,
        porcentaje,
    }
}

/// Evaluate a user's financial health over the trailing `window_days`.
///
/// A user with no records in the window still gets a full report: every rule
/// runs against an all-zero period, so the dashboard can show what a fresh
/// account needs to work on instead of an error page.
pub fn evaluate(store: &dyn RecordStore, user_id: i64, window_days: u32) -> Result<HealthReport> {
    evaluate_as_of(
        store,
        user_id,
        window_days,
        chrono::Local::now().date_naive(),
    )
}

/// Like [`evaluate`], with an explicit window end for deterministic tests
pub fn evaluate_as_of(
    store: &dyn RecordStore,
    user_id: i64,
    window_days: u32,
    as_of: NaiveDate,
) -> Result<HealthReport> {
    let period = match aggregate_as_of(store, user_id, window_days, as_of) {
        Ok(period) => period,
        Err(Error::NoData) => AggregatedPeriod::empty(window_days),
        Err(e) => return Err(e),
    };

    let results: Vec<(RuleKey, RuleResult)> = RULES
        .iter()
        .map(|(key, rule)| (*key, rule(&period)))
        .collect();

    let puntuacion = score(&results);
    tracing::info!(
        user_id,
        window_days,
        cumplidas = puntuacion.cumplidas,
        porcentaje = puntuacion.porcentaje,
        "Evaluated financial health"
    );

    Ok(HealthReport {
        resumen_financiero: FinancialSummary {
            ingresos: period.total_income,
            egresos: period.total_expense,
            balance: period.balance,
        },
        reglas: RuleResults(results),
        puntuacion_general: puntuacion,
    })
}
