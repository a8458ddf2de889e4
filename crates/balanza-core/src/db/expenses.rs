//! Expense record operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{ExpenseRecord, NewFlowRecord};

fn row_to_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let date_str: String = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    Ok(ExpenseRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        created_at: parse_datetime(&created_at_str),
    })
}

const EXPENSE_COLUMNS: &str = "id, user_id, amount, category, date, created_at";

impl Database {
    /// Insert an expense record for a user
    pub fn insert_expense(&self, user_id: i64, record: &NewFlowRecord) -> Result<i64> {
        if record.amount <= 0.0 {
            return Err(Error::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (user_id, amount, category, date) VALUES (?, ?, ?, ?)",
            params![
                user_id,
                record.amount,
                record.category,
                record.date.to_string()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all expense records for a user, newest first
    pub fn list_expenses(&self, user_id: i64) -> Result<Vec<ExpenseRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses WHERE user_id = ? ORDER BY date DESC, id DESC",
            EXPENSE_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id], row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// List expense records for a user with effective date in `[from, to]`
    pub fn list_expenses_in_window(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ExpenseRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses WHERE user_id = ? AND date >= ? AND date <= ? ORDER BY date, id",
            EXPENSE_COLUMNS
        ))?;
        let records = stmt
            .query_map(
                params![user_id, from.to_string(), to.to_string()],
                row_to_expense,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Get a single expense record, scoped to its owner
    pub fn get_expense(&self, user_id: i64, id: i64) -> Result<Option<ExpenseRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                &format!(
                    "SELECT {} FROM expenses WHERE id = ? AND user_id = ?",
                    EXPENSE_COLUMNS
                ),
                params![id, user_id],
                row_to_expense,
            )
            .optional()?;
        Ok(record)
    }

    /// Update an expense record, scoped to its owner
    pub fn update_expense(&self, user_id: i64, id: i64, record: &NewFlowRecord) -> Result<()> {
        if record.amount <= 0.0 {
            return Err(Error::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE expenses SET amount = ?, category = ?, date = ? WHERE id = ? AND user_id = ?",
            params![
                record.amount,
                record.category,
                record.date.to_string(),
                id,
                user_id
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Expense {} not found", id)));
        }
        Ok(())
    }

    /// Delete an expense record, scoped to its owner
    pub fn delete_expense(&self, user_id: i64, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "DELETE FROM expenses WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Expense {} not found", id)));
        }
        Ok(())
    }
}
