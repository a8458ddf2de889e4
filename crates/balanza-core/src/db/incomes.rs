//! Income record operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{IncomeRecord, NewFlowRecord};

fn row_to_income(row: &rusqlite::Row<'_>) -> rusqlite::Result<IncomeRecord> {
    let date_str: String = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    Ok(IncomeRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        created_at: parse_datetime(&created_at_str),
    })
}

const INCOME_COLUMNS: &str = "id, user_id, amount, category, date, created_at";

impl Database {
    /// Insert an income record for a user
    pub fn insert_income(&self, user_id: i64, record: &NewFlowRecord) -> Result<i64> {
        if record.amount <= 0.0 {
            return Err(Error::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO incomes (user_id, amount, category, date) VALUES (?, ?, ?, ?)",
            params![
                user_id,
                record.amount,
                record.category,
                record.date.to_string()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all income records for a user, newest first
    pub fn list_incomes(&self, user_id: i64) -> Result<Vec<IncomeRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM incomes WHERE user_id = ? ORDER BY date DESC, id DESC",
            INCOME_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id], row_to_income)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// List income records for a user with effective date in `[from, to]`
    pub fn list_incomes_in_window(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<IncomeRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM incomes WHERE user_id = ? AND date >= ? AND date <= ? ORDER BY date, id",
            INCOME_COLUMNS
        ))?;
        let records = stmt
            .query_map(
                params![user_id, from.to_string(), to.to_string()],
                row_to_income,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Get a single income record, scoped to its owner
    pub fn get_income(&self, user_id: i64, id: i64) -> Result<Option<IncomeRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                &format!(
                    "SELECT {} FROM incomes WHERE id = ? AND user_id = ?",
                    INCOME_COLUMNS
                ),
                params![id, user_id],
                row_to_income,
            )
            .optional()?;
        Ok(record)
    }

    /// Update an income record, scoped to its owner
    pub fn update_income(&self, user_id: i64, id: i64, record: &NewFlowRecord) -> Result<()> {
        if record.amount <= 0.0 {
            return Err(Error::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE incomes SET amount = ?, category = ?, date = ? WHERE id = ? AND user_id = ?",
            params![
                record.amount,
                record.category,
                record.date.to_string(),
                id,
                user_id
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Income {} not found", id)));
        }
        Ok(())
    }

    /// Delete an income record, scoped to its owner
    pub fn delete_income(&self, user_id: i64, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "DELETE FROM incomes WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Income {} not found", id)));
        }
        Ok(())
    }
}
