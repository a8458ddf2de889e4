//! Financial Health Scoring Engine
//!
//! Evaluates a user's recorded income, expenses, assets and liabilities over a
//! trailing window and produces a multi-rule diagnostic: eight independent
//! rules, a severity per rule, and an aggregate score.
//!
//! Pipeline: record store → [`aggregate`](aggregate::aggregate) →
//! [`RULES`](rules::RULES) (eight pure functions, fixed order) →
//! [`score`](report::score) → [`HealthReport`].
//!
//! The engine is stateless and side-effect-free per invocation: every request
//! reads a fresh snapshot of records, computes purely in memory, and returns a
//! report. Nothing is cached across requests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use balanza_core::health;
//!
//! let report = health::evaluate(&db, user_id, 30)?;
//! println!("{}/{} rules passed", report.puntuacion_general.cumplidas, 8);
//! ```

pub mod aggregate;
pub mod metadata;
pub mod report;
pub mod rules;
pub mod types;

pub use aggregate::{aggregate, RecordStore};
pub use metadata::{rule_metadata, RuleInfo};
pub use report::{evaluate, evaluate_as_of, score};
pub use rules::RULES;
pub use types::{
    AggregatedPeriod, FinancialSummary, HealthBand, HealthReport, RiskTier, RuleDetail, RuleKey,
    RuleResult, RuleResults, ScoreSummary, Severity,
};
