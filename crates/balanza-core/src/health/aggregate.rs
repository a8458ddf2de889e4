//! Window aggregation: raw records → summary totals
//!
//! Flow records (income/expense) are summed over the trailing window.
//! Assets and liabilities are stocks, not flows: the aggregator takes the
//! holdings valid as of the window end instead of summing over time.

use chrono::{Duration, NaiveDate};

use crate::categories;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{AssetRecord, ExpenseClass, ExpenseRecord, IncomeRecord, LiabilityRecord};

use super::types::AggregatedPeriod;

/// Read contract the engine requires from the record store.
///
/// Each method returns an ordered sequence, empty if no records exist
/// (an empty store is not an error at this layer). The four record kinds
/// are independent reads.
pub trait RecordStore {
    fn fetch_incomes(&self, user_id: i64, from: NaiveDate, to: NaiveDate)
        -> Result<Vec<IncomeRecord>>;

    fn fetch_expenses(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ExpenseRecord>>;

    fn fetch_assets(&self, user_id: i64, as_of: NaiveDate) -> Result<Vec<AssetRecord>>;

    fn fetch_liabilities(&self, user_id: i64, as_of: NaiveDate) -> Result<Vec<LiabilityRecord>>;
}

impl RecordStore for Database {
    fn fetch_incomes(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<IncomeRecord>> {
        self.list_incomes_in_window(user_id, from, to)
    }

    fn fetch_expenses(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ExpenseRecord>> {
        self.list_expenses_in_window(user_id, from, to)
    }

    fn fetch_assets(&self, user_id: i64, as_of: NaiveDate) -> Result<Vec<AssetRecord>> {
        self.list_assets_as_of(user_id, as_of)
    }

    fn fetch_liabilities(&self, user_id: i64, as_of: NaiveDate) -> Result<Vec<LiabilityRecord>> {
        self.list_liabilities_as_of(user_id, as_of)
    }
}

/// Aggregate a user's records over the trailing `window_days` ending today.
///
/// Fails with [`Error::NoData`] only when the user has zero records of any
/// kind in the window, so callers may render a "no data" state instead of
/// treating that as fatal.
pub fn aggregate(
    store: &dyn RecordStore,
    user_id: i64,
    window_days: u32,
) -> Result<AggregatedPeriod> {
    aggregate_as_of(store, user_id, window_days, chrono::Local::now().date_naive())
}

/// Like [`aggregate`], with an explicit window end for deterministic tests
pub fn aggregate_as_of(
    store: &dyn RecordStore,
    user_id: i64,
    window_days: u32,
    as_of: NaiveDate,
) -> Result<AggregatedPeriod> {
    if window_days == 0 {
        return Err(Error::Validation(
            "window_days must be a positive integer".to_string(),
        ));
    }

    let from = as_of - Duration::days(i64::from(window_days));

    let incomes = store.fetch_incomes(user_id, from, as_of)?;
    let expenses = store.fetch_expenses(user_id, from, as_of)?;
    let assets = store.fetch_assets(user_id, as_of)?;
    let liabilities = store.fetch_liabilities(user_id, as_of)?;

    if incomes.is_empty() && expenses.is_empty() && assets.is_empty() && liabilities.is_empty() {
        return Err(Error::NoData);
    }

    let mut period = AggregatedPeriod::empty(window_days);

    period.total_income = incomes.iter().map(|i| i.amount).sum();

    for expense in &expenses {
        period.total_expense += expense.amount;
        match categories::classify(&expense.category) {
            ExpenseClass::Need => period.needs_total += expense.amount,
            ExpenseClass::Want => period.wants_total += expense.amount,
            ExpenseClass::SavingInvestment => period.savings_total += expense.amount,
        }
        if categories::is_education(&expense.category) {
            period.education_total += expense.amount;
        }
        if categories::is_luxury(&expense.category) {
            period.luxury_total += expense.amount;
        }
    }

    period.balance = period.total_income - period.total_expense;

    for asset in &assets {
        period.asset_value += asset.value;
        if asset.kind.is_liquid() {
            period.liquid_savings += asset.value;
        }
    }

    for liability in &liabilities {
        period.debt_monthly_payment += liability.monthly_payment;
        period.debt_outstanding += liability.total_amount;
    }

    tracing::debug!(
        user_id,
        window_days,
        income = period.total_income,
        expense = period.total_expense,
        assets = period.asset_value,
        debt = period.debt_outstanding,
        "Aggregated evaluation window"
    );

    Ok(period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    /// In-memory store for aggregator tests, independent of SQLite
    #[derive(Default)]
    struct FixtureStore {
        incomes: Vec<IncomeRecord>,
        expenses: Vec<ExpenseRecord>,
        assets: Vec<AssetRecord>,
        liabilities: Vec<LiabilityRecord>,
    }

    impl RecordStore for FixtureStore {
        fn fetch_incomes(
            &self,
            user_id: i64,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<Vec<IncomeRecord>> {
            Ok(self
                .incomes
                .iter()
                .filter(|r| r.user_id == user_id && r.date >= from && r.date <= to)
                .cloned()
                .collect())
        }

        fn fetch_expenses(
            &self,
            user_id: i64,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<Vec<ExpenseRecord>> {
            Ok(self
                .expenses
                .iter()
                .filter(|r| r.user_id == user_id && r.date >= from && r.date <= to)
                .cloned()
                .collect())
        }

        fn fetch_assets(&self, user_id: i64, _as_of: NaiveDate) -> Result<Vec<AssetRecord>> {
            Ok(self
                .assets
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }

        fn fetch_liabilities(
            &self,
            user_id: i64,
            _as_of: NaiveDate,
        ) -> Result<Vec<LiabilityRecord>> {
            Ok(self
                .liabilities
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    fn ts() -> DateTime<Utc> {
        Utc::now()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn income(user_id: i64, amount: f64, day: &str) -> IncomeRecord {
        IncomeRecord {
            id: 0,
            user_id,
            amount,
            category: "salario".to_string(),
            date: date(day),
            created_at: ts(),
        }
    }

    fn expense(user_id: i64, amount: f64, category: &str, day: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: 0,
            user_id,
            amount,
            category: category.to_string(),
            date: date(day),
            created_at: ts(),
        }
    }

    #[test]
    fn test_no_records_is_no_data() {
        let store = FixtureStore::default();
        let err = aggregate_as_of(&store, 1, 30, date("2026-06-30")).unwrap_err();
        assert!(matches!(err, Error::NoData));
    }

    #[test]
    fn test_zero_window_rejected() {
        let store = FixtureStore::default();
        let err = aggregate_as_of(&store, 1, 0, date("2026-06-30")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_flow_records_outside_window_excluded() {
        let store = FixtureStore {
            incomes: vec![
                income(1, 1000.0, "2026-06-20"),
                income(1, 500.0, "2026-05-01"), // outside a 30-day window
            ],
            ..Default::default()
        };

        let period = aggregate_as_of(&store, 1, 30, date("2026-06-30")).unwrap();
        assert_eq!(period.total_income, 1000.0);
        assert_eq!(period.balance, 1000.0);
    }

    #[test]
    fn test_expense_classification_totals() {
        let store = FixtureStore {
            incomes: vec![income(1, 3000.0, "2026-06-15")],
            expenses: vec![
                expense(1, 900.0, "vivienda", "2026-06-10"),
                expense(1, 300.0, "restaurantes", "2026-06-11"),
                expense(1, 200.0, "ahorro", "2026-06-12"),
                expense(1, 100.0, "educación", "2026-06-13"),
                expense(1, 50.0, "lujos", "2026-06-14"),
                // unmapped category falls back to needs
                expense(1, 80.0, "mascotas", "2026-06-15"),
            ],
            ..Default::default()
        };

        let period = aggregate_as_of(&store, 1, 30, date("2026-06-30")).unwrap();
        assert_eq!(period.needs_total, 980.0);
        assert_eq!(period.wants_total, 350.0);
        assert_eq!(period.savings_total, 300.0);
        assert_eq!(period.education_total, 100.0);
        assert_eq!(period.luxury_total, 50.0);
        assert_eq!(period.total_expense, 1630.0);
        assert_eq!(period.balance, 3000.0 - 1630.0);
    }

    #[test]
    fn test_records_scoped_to_user() {
        let store = FixtureStore {
            incomes: vec![income(1, 1000.0, "2026-06-20"), income(2, 9999.0, "2026-06-20")],
            ..Default::default()
        };

        let period = aggregate_as_of(&store, 1, 30, date("2026-06-30")).unwrap();
        assert_eq!(period.total_income, 1000.0);
    }

    #[test]
    fn test_asset_and_liability_stocks() {
        let store = FixtureStore {
            incomes: vec![income(1, 1000.0, "2026-06-20")],
            assets: vec![
                AssetRecord {
                    id: 0,
                    user_id: 1,
                    name: "Depto".to_string(),
                    kind: crate::models::AssetKind::Inmueble,
                    value: 50000.0,
                    monthly_flow: Some(400.0),
                    created_at: ts(),
                },
                AssetRecord {
                    id: 0,
                    user_id: 1,
                    name: "Cuenta de ahorro".to_string(),
                    kind: crate::models::AssetKind::Ahorro,
                    value: 2000.0,
                    monthly_flow: None,
                    created_at: ts(),
                },
            ],
            liabilities: vec![LiabilityRecord {
                id: 0,
                user_id: 1,
                name: "Hipoteca".to_string(),
                kind: "hipoteca".to_string(),
                total_amount: 30000.0,
                monthly_payment: 350.0,
                due_date: date("2030-01-01"),
                created_at: ts(),
            }],
            ..Default::default()
        };

        let period = aggregate_as_of(&store, 1, 30, date("2026-06-30")).unwrap();
        assert_eq!(period.asset_value, 52000.0);
        assert_eq!(period.liquid_savings, 2000.0);
        assert_eq!(period.debt_monthly_payment, 350.0);
        assert_eq!(period.debt_outstanding, 30000.0);
    }
}
