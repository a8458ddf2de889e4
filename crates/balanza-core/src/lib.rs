//! Balanza Core Library
//!
//! Shared functionality for the Balanza personal finance tracker:
//! - Database access and migrations for the four record kinds
//!   (incomes, expenses, assets, liabilities) and user accounts
//! - Deterministic expense-category classification (needs/wants/savings)
//! - The financial health scoring engine: window aggregation, the eight
//!   evaluation rules, score aggregation, and report assembly

pub mod categories;
pub mod db;
pub mod error;
pub mod health;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use health::{
    evaluate, AggregatedPeriod, HealthBand, HealthReport, RecordStore, RuleKey, RuleResult,
    Severity,
};
