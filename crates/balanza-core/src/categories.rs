//! Deterministic expense-category classification
//!
//! Expense categories are free-form strings entered by the user, but the
//! 50/30/20 rule needs every expense assigned to exactly one class. The
//! mapping below is fixed: a category maps to one class, and anything the
//! table does not know falls back to [`ExpenseClass::Need`], so unknown
//! expenses tighten the budget verdicts rather than disappear from them.

use crate::models::ExpenseClass;

/// Categories counted as necessities (the "50" band)
pub const NEED_CATEGORIES: &[&str] = &[
    "vivienda",
    "comida",
    "transporte",
    "salud",
    "servicios",
    "deudas",
];

/// Categories counted as wants (the "30" band)
pub const WANT_CATEGORIES: &[&str] = &["entretenimiento", "restaurantes", "viajes", "lujos"];

/// Categories counted as savings/investment (the "20" band)
pub const SAVING_CATEGORIES: &[&str] = &["ahorro", "inversion", "educacion"];

/// Category treated as education spend by the education rules
pub const EDUCATION_CATEGORY: &str = "educacion";

/// Category treated as luxury spend by the priorities rule
pub const LUXURY_CATEGORY: &str = "lujos";

/// Normalize a category for lookup: lowercase and strip the accents the
/// Spanish vocabulary uses, so "Inversión" and "inversion" classify the same.
fn normalize(category: &str) -> String {
    category
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Classify an expense category into its 50/30/20 class.
///
/// Unmapped categories default to `Need` (documented fallback).
pub fn classify(category: &str) -> ExpenseClass {
    let normalized = normalize(category);
    if SAVING_CATEGORIES.contains(&normalized.as_str()) {
        ExpenseClass::SavingInvestment
    } else if WANT_CATEGORIES.contains(&normalized.as_str()) {
        ExpenseClass::Want
    } else {
        // NEED_CATEGORIES plus the documented fallback for unknown categories
        ExpenseClass::Need
    }
}

/// Whether an expense category is the education sub-category
pub fn is_education(category: &str) -> bool {
    normalize(category) == EDUCATION_CATEGORY
}

/// Whether an expense category is the luxury sub-category
pub fn is_luxury(category: &str) -> bool {
    normalize(category) == LUXURY_CATEGORY
}
