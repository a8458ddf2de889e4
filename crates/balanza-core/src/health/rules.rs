//! The eight financial health rules
//!
//! Each rule is a pure function of [`AggregatedPeriod`]. The rules are
//! independent of each other and evaluated in the fixed order of [`RULES`];
//! the order matters for deterministic report layout, not for scoring.
//!
//! Threshold constants are fixed for compatibility with existing consumers.
//! Comparisons use the unrounded values; only the displayed percentages are
//! rounded (half up, whole numbers).
//!
//! Zero-income policy: any rule whose ratio has income as denominator fails
//! with `danger` and a distinct message when `total_income == 0`. Division by
//! zero never happens, and undefined detail payloads are omitted rather than
//! fabricated.

use super::types::{
    round_ratio, round_whole, AggregatedPeriod, BandPercentages, RiskTier, RuleDetail, RuleKey,
    RuleResult, Severity,
};

/// Maximum share of income for necessities (the "50" of 50/30/20)
pub const NEEDS_MAX_PCT: f64 = 50.0;
/// Maximum share of income for wants (the "30")
pub const WANTS_MAX_PCT: f64 = 30.0;
/// Minimum share of income for savings/investment (the "20")
pub const SAVINGS_MIN_PCT: f64 = 20.0;

/// Monthly debt payments above this share of income fail the debt rule
pub const DEBT_RATIO_MAX: f64 = 0.40;
/// Above this share the debt rule escalates from warning to danger
pub const DEBT_RATIO_DANGER: f64 = 0.55;

/// Months of expenses the emergency fund must cover
pub const EMERGENCY_FUND_MONTHS: f64 = 3.0;
/// Below one month of coverage the emergency-fund rule is danger
pub const EMERGENCY_FUND_DANGER_MONTHS: f64 = 1.0;

/// Minimum share of income invested in education
pub const EDUCATION_MIN_PCT: f64 = 5.0;

/// Months of income the contingency reserve must cover
pub const RESERVE_MONTHS: f64 = 1.0;

type RuleFn = fn(&AggregatedPeriod) -> RuleResult;

/// The fixed, ordered rule table: evaluation order is report order.
pub const RULES: [(RuleKey, RuleFn); 8] = [
    (RuleKey::Regla503020, regla_50_30_20),
    (RuleKey::LimiteEndeudamiento, limite_endeudamiento),
    (RuleKey::GastaMasQueGana, gasta_mas_que_gana),
    (RuleKey::FondoEmergencia, fondo_emergencia),
    (RuleKey::SinInversiones, sin_inversiones),
    (RuleKey::InversionEducacion, inversion_educacion),
    (RuleKey::LujosVsEducacion, lujos_vs_educacion),
    (RuleKey::ReservaImprevistos, reserva_imprevistos),
];

const NO_INCOME_MESSAGE: &str = "No hay ingresos registrados en el período";

fn no_income() -> RuleResult {
    RuleResult::fail(Severity::Danger, NO_INCOME_MESSAGE)
}

/// 50/30/20 budget distribution: needs <= 50%, wants <= 30%, savings >= 20%
/// of total income. One violated band is a warning; two or more are danger.
fn regla_50_30_20(period: &AggregatedPeriod) -> RuleResult {
    if period.total_income == 0.0 {
        return no_income();
    }

    let needs_pct = period.needs_total / period.total_income * 100.0;
    let wants_pct = period.wants_total / period.total_income * 100.0;
    let savings_pct = period.savings_total / period.total_income * 100.0;

    let detail = RuleDetail::Percentages {
        porcentajes: BandPercentages {
            necesidades: round_whole(needs_pct),
            deseos: round_whole(wants_pct),
            ahorros: round_whole(savings_pct),
        },
    };

    let mut deviations = Vec::new();
    if needs_pct > NEEDS_MAX_PCT {
        deviations.push("gastas demasiado en necesidades");
    }
    if wants_pct > WANTS_MAX_PCT {
        deviations.push("gastas demasiado en deseos");
    }
    if savings_pct < SAVINGS_MIN_PCT {
        deviations.push("ahorras menos del 20% recomendado");
    }

    if deviations.is_empty() {
        RuleResult::pass("Cumples con la regla 50/30/20").with_detail(detail)
    } else {
        let severity = if deviations.len() >= 2 {
            Severity::Danger
        } else {
            Severity::Warning
        };
        RuleResult::fail(severity, deviations.join(", ")).with_detail(detail)
    }
}

/// Monthly debt payments must stay at or below 40% of income.
/// Warning up to 55%, danger above.
fn limite_endeudamiento(period: &AggregatedPeriod) -> RuleResult {
    if period.total_income == 0.0 {
        return no_income();
    }

    let ratio = period.debt_monthly_payment / period.total_income;
    let pct = round_whole(ratio * 100.0);

    let (cumple, severidad, tier) = if ratio <= DEBT_RATIO_MAX {
        (true, Severity::Success, RiskTier::Bajo)
    } else if ratio <= DEBT_RATIO_DANGER {
        (false, Severity::Warning, RiskTier::Medio)
    } else {
        (false, Severity::Danger, RiskTier::Alto)
    };

    let mensaje = format!("Endeudamiento del {}% de tus ingresos", pct);
    RuleResult {
        cumple,
        severidad,
        mensaje,
        detalle: Some(RuleDetail::Debt {
            porcentaje_deuda: pct,
            nivel_riesgo: tier,
        }),
    }
}

/// Spending must not exceed income; a balance of exactly zero passes.
fn gasta_mas_que_gana(period: &AggregatedPeriod) -> RuleResult {
    if period.balance >= 0.0 {
        RuleResult::pass(format!("Balance positivo: ${:.2}", period.balance))
    } else {
        RuleResult::fail(
            Severity::Danger,
            format!(
                "Déficit: gastas ${:.2} más de lo que ganas",
                period.balance.abs()
            ),
        )
    }
}

/// Liquid savings must cover three months of (window-normalized) expenses.
/// One to three months is a warning; under one month is danger.
fn fondo_emergencia(period: &AggregatedPeriod) -> RuleResult {
    let monthly_expense = period.monthly_expense();
    if monthly_expense == 0.0 {
        // No expenses in the window: a zero target is trivially covered
        return RuleResult::pass("Sin gastos registrados en el período");
    }

    let months_covered = period.liquid_savings / monthly_expense;
    let detail = RuleDetail::MonthsCovered {
        meses_cubiertos: round_ratio(months_covered),
    };

    if months_covered >= EMERGENCY_FUND_MONTHS {
        RuleResult::pass(format!(
            "Tu fondo de emergencia cubre {:.1} meses de gastos",
            months_covered
        ))
        .with_detail(detail)
    } else {
        let severity = if months_covered >= EMERGENCY_FUND_DANGER_MONTHS {
            Severity::Warning
        } else {
            Severity::Danger
        };
        RuleResult::fail(
            severity,
            format!(
                "Tu fondo de emergencia cubre {:.1} meses de gastos (mínimo {} meses)",
                months_covered, EMERGENCY_FUND_MONTHS
            ),
        )
        .with_detail(detail)
    }
}

/// The user should hold at least some assets or investments.
fn sin_inversiones(period: &AggregatedPeriod) -> RuleResult {
    if period.asset_value > 0.0 {
        RuleResult::pass("Tienes activos registrados")
    } else {
        RuleResult::fail(
            Severity::Warning,
            "No registras activos ni inversiones",
        )
    }
}

/// At least 5% of income should go to education.
fn inversion_educacion(period: &AggregatedPeriod) -> RuleResult {
    if period.total_income == 0.0 {
        return no_income();
    }

    let pct = period.education_total / period.total_income * 100.0;
    let detail = RuleDetail::EducationShare {
        porcentaje_invertido: round_whole(pct),
    };

    if pct >= EDUCATION_MIN_PCT {
        RuleResult::pass(format!("Inviertes {:.1}% de tus ingresos en educación", pct))
            .with_detail(detail)
    } else {
        RuleResult::fail(
            Severity::Warning,
            format!(
                "Inviertes {:.1}% en educación, recomendado {}%",
                pct, EDUCATION_MIN_PCT
            ),
        )
        .with_detail(detail)
    }
}

/// Education spend should not be outweighed by luxury spend.
fn lujos_vs_educacion(period: &AggregatedPeriod) -> RuleResult {
    if period.education_total >= period.luxury_total {
        let mut result = RuleResult::pass("Priorizas educación sobre lujos");
        if period.luxury_total > 0.0 {
            result = result.with_detail(RuleDetail::EducationLuxuryRatio {
                ratio_educacion_lujos: round_ratio(period.education_total / period.luxury_total),
            });
        }
        result
    } else {
        // luxury_total > education_total >= 0 here, so the ratio is defined
        RuleResult::fail(
            Severity::Warning,
            "Gastas más en lujos que en educación",
        )
        .with_detail(RuleDetail::EducationLuxuryRatio {
            ratio_educacion_lujos: round_ratio(period.education_total / period.luxury_total),
        })
    }
}

/// Liquid savings must cover at least one month of income.
fn reserva_imprevistos(period: &AggregatedPeriod) -> RuleResult {
    if period.total_income == 0.0 {
        return no_income();
    }

    let monthly_income = period.monthly_income();
    let months_covered = period.liquid_savings / monthly_income;
    let detail = RuleDetail::MonthsCovered {
        meses_cubiertos: round_ratio(months_covered),
    };

    if months_covered >= RESERVE_MONTHS {
        RuleResult::pass(format!(
            "Tienes ${:.2} de reserva líquida",
            period.liquid_savings
        ))
        .with_detail(detail)
    } else {
        RuleResult::fail(
            Severity::Danger,
            format!(
                "Te faltan ${:.2} para un mes de reserva",
                monthly_income - period.liquid_savings
            ),
        )
        .with_detail(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period_with_income(income: f64) -> AggregatedPeriod {
        let mut period = AggregatedPeriod::empty(30);
        period.total_income = income;
        period.balance = income;
        period
    }

    #[test]
    fn test_rules_table_order_is_fixed() {
        let keys: Vec<&str> = RULES.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "regla_50_30_20",
                "limite_endeudamiento",
                "gasta_mas_que_gana",
                "fondo_emergencia",
                "sin_inversiones",
                "inversion_educacion",
                "lujos_vs_educacion",
                "reserva_imprevistos",
            ]
        );
    }

    #[test]
    fn test_50_30_20_passes_within_bands() {
        // Spec scenario: 46.7% / 30% / 23.3% of 3,000,000
        let mut period = period_with_income(3_000_000.0);
        period.needs_total = 1_400_000.0;
        period.wants_total = 900_000.0;
        period.savings_total = 700_000.0;

        let result = regla_50_30_20(&period);
        assert!(result.cumple);
        assert_eq!(result.severidad, Severity::Success);
        match result.detalle {
            Some(RuleDetail::Percentages { porcentajes }) => {
                assert_eq!(porcentajes.necesidades, 47);
                assert_eq!(porcentajes.deseos, 30);
                assert_eq!(porcentajes.ahorros, 23);
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_50_30_20_one_band_is_warning() {
        let mut period = period_with_income(1000.0);
        period.needs_total = 600.0; // violates needs <= 50
        period.wants_total = 100.0;
        period.savings_total = 300.0;

        let result = regla_50_30_20(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);
    }

    #[test]
    fn test_50_30_20_two_bands_is_danger() {
        let mut period = period_with_income(1000.0);
        period.needs_total = 600.0; // violated
        period.wants_total = 350.0; // violated
        period.savings_total = 50.0; // violated

        let result = regla_50_30_20(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Danger);
    }

    #[test]
    fn test_debt_boundary_inclusive() {
        // Exactly 40% passes
        let mut period = period_with_income(2_000_000.0);
        period.debt_monthly_payment = 800_000.0;
        let result = limite_endeudamiento(&period);
        assert!(result.cumple);

        // 41% fails with warning
        period.debt_monthly_payment = 820_000.0;
        let result = limite_endeudamiento(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);
    }

    #[test]
    fn test_debt_spec_scenario_45_percent() {
        // Spec scenario: income 2,000,000 / monthly payment 900,000 -> 45%
        let mut period = period_with_income(2_000_000.0);
        period.debt_monthly_payment = 900_000.0;

        let result = limite_endeudamiento(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);
        match result.detalle {
            Some(RuleDetail::Debt {
                porcentaje_deuda,
                nivel_riesgo,
            }) => {
                assert_eq!(porcentaje_deuda, 45);
                assert_eq!(nivel_riesgo, RiskTier::Medio);
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_debt_danger_above_55_percent() {
        let mut period = period_with_income(1000.0);
        period.debt_monthly_payment = 600.0;

        let result = limite_endeudamiento(&period);
        assert_eq!(result.severidad, Severity::Danger);
        match result.detalle {
            Some(RuleDetail::Debt { nivel_riesgo, .. }) => {
                assert_eq!(nivel_riesgo, RiskTier::Alto)
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_balance_zero_passes() {
        let mut period = period_with_income(1000.0);
        period.total_expense = 1000.0;
        period.balance = 0.0;
        assert!(gasta_mas_que_gana(&period).cumple);

        period.balance = -0.01;
        let result = gasta_mas_que_gana(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Danger);
    }

    #[test]
    fn test_emergency_fund_tiers() {
        let mut period = period_with_income(0.0);
        period.total_expense = 3000.0; // 3000/month over a 30-day window

        period.liquid_savings = 9000.0; // 3 months
        assert!(fondo_emergencia(&period).cumple);

        period.liquid_savings = 4000.0; // ~1.3 months
        let result = fondo_emergencia(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);

        period.liquid_savings = 2000.0; // < 1 month
        let result = fondo_emergencia(&period);
        assert_eq!(result.severidad, Severity::Danger);
    }

    #[test]
    fn test_emergency_fund_no_expenses_passes() {
        let period = period_with_income(1000.0);
        let result = fondo_emergencia(&period);
        assert!(result.cumple);
        assert!(result.detalle.is_none());
    }

    #[test]
    fn test_sin_inversiones() {
        let mut period = period_with_income(1000.0);
        let result = sin_inversiones(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);

        period.asset_value = 1.0;
        assert!(sin_inversiones(&period).cumple);
    }

    #[test]
    fn test_education_share() {
        let mut period = period_with_income(1000.0);
        period.education_total = 50.0; // exactly 5%
        assert!(inversion_educacion(&period).cumple);

        period.education_total = 49.0;
        let result = inversion_educacion(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);
    }

    #[test]
    fn test_luxury_vs_education() {
        let mut period = period_with_income(1000.0);
        period.education_total = 100.0;
        period.luxury_total = 50.0;
        let result = lujos_vs_educacion(&period);
        assert!(result.cumple);
        match result.detalle {
            Some(RuleDetail::EducationLuxuryRatio {
                ratio_educacion_lujos,
            }) => assert_eq!(ratio_educacion_lujos, 2.0),
            other => panic!("unexpected detail: {:?}", other),
        }

        period.luxury_total = 200.0;
        let result = lujos_vs_educacion(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Warning);
    }

    #[test]
    fn test_luxury_vs_education_both_zero_passes() {
        let period = period_with_income(1000.0);
        let result = lujos_vs_educacion(&period);
        assert!(result.cumple);
        assert!(result.detalle.is_none());
    }

    #[test]
    fn test_reserve_one_month_of_income() {
        let mut period = period_with_income(3000.0); // 3000/month over 30 days
        period.liquid_savings = 3000.0;
        assert!(reserva_imprevistos(&period).cumple);

        period.liquid_savings = 2999.0;
        let result = reserva_imprevistos(&period);
        assert!(!result.cumple);
        assert_eq!(result.severidad, Severity::Danger);
    }

    #[test]
    fn test_zero_income_policy() {
        // Every income-ratio rule fails with danger and never divides by zero
        let mut period = AggregatedPeriod::empty(30);
        period.total_expense = 500.0;
        period.needs_total = 500.0;
        period.balance = -500.0;

        for rule in [
            regla_50_30_20 as fn(&AggregatedPeriod) -> RuleResult,
            limite_endeudamiento,
            inversion_educacion,
            reserva_imprevistos,
        ] {
            let result = rule(&period);
            assert!(!result.cumple);
            assert_eq!(result.severidad, Severity::Danger);
            assert_eq!(result.mensaje, NO_INCOME_MESSAGE);
        }
    }
}
