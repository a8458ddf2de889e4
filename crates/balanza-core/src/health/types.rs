//! Core types for the health scoring engine
//!
//! The report types serialize to the wire format the dashboard consumes, so
//! the JSON field names stay in the product's Spanish vocabulary
//! (`resumen_financiero`, `cumple`, `puntuacion_general`, ...). Internal
//! aggregation types use plain English names.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stable identifiers for the eight health rules.
///
/// The wire keys are fixed for compatibility with existing consumers; the
/// evaluation order lives in [`crate::health::rules::RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKey {
    Regla503020,
    LimiteEndeudamiento,
    GastaMasQueGana,
    FondoEmergencia,
    SinInversiones,
    InversionEducacion,
    LujosVsEducacion,
    ReservaImprevistos,
}

impl RuleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKey::Regla503020 => "regla_50_30_20",
            RuleKey::LimiteEndeudamiento => "limite_endeudamiento",
            RuleKey::GastaMasQueGana => "gasta_mas_que_gana",
            RuleKey::FondoEmergencia => "fondo_emergencia",
            RuleKey::SinInversiones => "sin_inversiones",
            RuleKey::InversionEducacion => "inversion_educacion",
            RuleKey::LujosVsEducacion => "lujos_vs_educacion",
            RuleKey::ReservaImprevistos => "reserva_imprevistos",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regla_50_30_20" => Ok(RuleKey::Regla503020),
            "limite_endeudamiento" => Ok(RuleKey::LimiteEndeudamiento),
            "gasta_mas_que_gana" => Ok(RuleKey::GastaMasQueGana),
            "fondo_emergencia" => Ok(RuleKey::FondoEmergencia),
            "sin_inversiones" => Ok(RuleKey::SinInversiones),
            "inversion_educacion" => Ok(RuleKey::InversionEducacion),
            "lujos_vs_educacion" => Ok(RuleKey::LujosVsEducacion),
            "reserva_imprevistos" => Ok(RuleKey::ReservaImprevistos),
            _ => Err(format!("Unknown rule key: {}", s)),
        }
    }
}

/// Severity of a rule verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule passed
    Success,
    /// Failed, worth attention
    Warning,
    /// Failed, requires action
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "danger" => Ok(Severity::Danger),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Risk tier for the debt-limit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Bajo,
    Medio,
    Alto,
}

/// Percentage breakdown for the 50/30/20 rule, whole percents
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandPercentages {
    pub necesidades: i64,
    pub deseos: i64,
    pub ahorros: i64,
}

/// Rule-specific structured detail, flattened into the rule object on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleDetail {
    /// 50/30/20 breakdown
    Percentages { porcentajes: BandPercentages },
    /// Debt-to-income ratio and its risk tier
    Debt {
        porcentaje_deuda: i64,
        nivel_riesgo: RiskTier,
    },
    /// Months of expenses (or income) the liquid savings cover
    MonthsCovered { meses_cubiertos: f64 },
    /// Share of income invested in education, whole percent
    EducationShare { porcentaje_invertido: i64 },
    /// Education spend relative to luxury spend
    EducationLuxuryRatio { ratio_educacion_lujos: f64 },
}

/// Verdict of one rule. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleResult {
    pub cumple: bool,
    pub severidad: Severity,
    pub mensaje: String,
    /// Omitted when the rule has no detail or its inputs were undefined
    /// (e.g. ratios with zero income)
    #[serde(flatten)]
    pub detalle: Option<RuleDetail>,
}

impl RuleResult {
    pub fn pass(mensaje: impl Into<String>) -> Self {
        Self {
            cumple: true,
            severidad: Severity::Success,
            mensaje: mensaje.into(),
            detalle: None,
        }
    }

    pub fn fail(severidad: Severity, mensaje: impl Into<String>) -> Self {
        Self {
            cumple: false,
            severidad,
            mensaje: mensaje.into(),
            detalle: None,
        }
    }

    pub fn with_detail(mut self, detalle: RuleDetail) -> Self {
        self.detalle = Some(detalle);
        self
    }
}

/// Ordered rule results, keyed by [`RuleKey`] on the wire.
///
/// Serializes as a JSON object whose key order is the evaluation order;
/// consumers rely on a stable, deterministic layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleResults(pub Vec<(RuleKey, RuleResult)>);

impl RuleResults {
    pub fn get(&self, key: RuleKey) -> Option<&RuleResult> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(RuleKey, RuleResult)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RuleResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, result) in &self.0 {
            map.serialize_entry(key.as_str(), result)?;
        }
        map.end()
    }
}

/// Income/expense/balance totals for the evaluated window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub ingresos: f64,
    pub egresos: f64,
    pub balance: f64,
}

/// Aggregate score over the eight rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub cumplidas: u32,
    pub total: u32,
    /// round(cumplidas / total * 100)
    pub porcentaje: i64,
}

/// Overall health classification, derived from the score percentage.
/// Computed for display; not part of the stored report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthBand {
    Excelente,
    NecesitaAtencion,
    Critico,
}

impl HealthBand {
    /// Band boundaries are inclusive on the lower bound of each tier
    pub fn from_percentage(porcentaje: i64) -> Self {
        if porcentaje >= 75 {
            HealthBand::Excelente
        } else if porcentaje >= 50 {
            HealthBand::NecesitaAtencion
        } else {
            HealthBand::Critico
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Excelente => "Excelente",
            HealthBand::NecesitaAtencion => "Necesita Atención",
            HealthBand::Critico => "Crítico",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The full diagnostic response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub resumen_financiero: FinancialSummary,
    pub reglas: RuleResults,
    pub puntuacion_general: ScoreSummary,
}

/// Summary totals for one user and one window. Derived, never persisted:
/// recomputed fresh on every evaluation so results always reflect the
/// latest records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedPeriod {
    /// Window length in days (always >= 1)
    pub window_days: u32,
    pub total_income: f64,
    pub total_expense: f64,
    /// total_income - total_expense
    pub balance: f64,
    pub needs_total: f64,
    pub wants_total: f64,
    pub savings_total: f64,
    /// Expenses in the education sub-category
    pub education_total: f64,
    /// Expenses in the luxury sub-category
    pub luxury_total: f64,
    /// Sum of recurring monthly payments across liabilities
    pub debt_monthly_payment: f64,
    /// Sum of outstanding balances across liabilities
    pub debt_outstanding: f64,
    /// Sum of current values across all assets
    pub asset_value: f64,
    /// Value of assets whose kind marks them liquid (emergency fund)
    pub liquid_savings: f64,
}

impl AggregatedPeriod {
    /// All-zero period, used when the user has no records in the window
    pub fn empty(window_days: u32) -> Self {
        Self {
            window_days,
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
            needs_total: 0.0,
            wants_total: 0.0,
            savings_total: 0.0,
            education_total: 0.0,
            luxury_total: 0.0,
            debt_monthly_payment: 0.0,
            debt_outstanding: 0.0,
            asset_value: 0.0,
            liquid_savings: 0.0,
        }
    }

    /// Window length in (fractional) months, for normalizing flow totals
    pub fn window_months(&self) -> f64 {
        f64::from(self.window_days) / 30.0
    }

    /// Monthly-normalized income over the window
    pub fn monthly_income(&self) -> f64 {
        self.total_income / self.window_months()
    }

    /// Monthly-normalized expense over the window
    pub fn monthly_expense(&self) -> f64 {
        self.total_expense / self.window_months()
    }
}

/// Round a value to the nearest whole number, half away from zero.
/// All displayed percentages go through this so they sum sensibly.
pub(crate) fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Round a ratio to two decimals for detail payloads
pub(crate) fn round_ratio(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
