//! Liability operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{LiabilityRecord, NewLiability};

fn row_to_liability(row: &rusqlite::Row<'_>) -> rusqlite::Result<LiabilityRecord> {
    let due_date_str: String = row.get(6)?;
    let created_at_str: String = row.get(7)?;
    Ok(LiabilityRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        kind: row.get(3)?,
        total_amount: row.get(4)?,
        monthly_payment: row.get(5)?,
        due_date: NaiveDate::parse_from_str(&due_date_str, "%Y-%m-%d")
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        created_at: parse_datetime(&created_at_str),
    })
}

const LIABILITY_COLUMNS: &str =
    "id, user_id, name, kind, total_amount, monthly_payment, due_date, created_at";

impl Database {
    /// Insert a liability for a user
    pub fn insert_liability(&self, user_id: i64, liability: &NewLiability) -> Result<i64> {
        if liability.total_amount < 0.0 || liability.monthly_payment < 0.0 {
            return Err(Error::Validation(
                "Amounts must not be negative".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO liabilities (user_id, name, kind, total_amount, monthly_payment, due_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                liability.name,
                liability.kind,
                liability.total_amount,
                liability.monthly_payment,
                liability.due_date.to_string()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all liabilities for a user
    pub fn list_liabilities(&self, user_id: i64) -> Result<Vec<LiabilityRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM liabilities WHERE user_id = ? ORDER BY id",
            LIABILITY_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id], row_to_liability)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// List liabilities recorded on or before `as_of` (snapshot, like assets)
    pub fn list_liabilities_as_of(
        &self,
        user_id: i64,
        as_of: NaiveDate,
    ) -> Result<Vec<LiabilityRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM liabilities WHERE user_id = ? AND date(created_at) <= ? ORDER BY id",
            LIABILITY_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id, as_of.to_string()], row_to_liability)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Get a single liability, scoped to its owner
    pub fn get_liability(&self, user_id: i64, id: i64) -> Result<Option<LiabilityRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                &format!(
                    "SELECT {} FROM liabilities WHERE id = ? AND user_id = ?",
                    LIABILITY_COLUMNS
                ),
                params![id, user_id],
                row_to_liability,
            )
            .optional()?;
        Ok(record)
    }

    /// Update a liability, scoped to its owner
    pub fn update_liability(&self, user_id: i64, id: i64, liability: &NewLiability) -> Result<()> {
        if liability.total_amount < 0.0 || liability.monthly_payment < 0.0 {
            return Err(Error::Validation(
                "Amounts must not be negative".to_string(),
            ));
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            r#"
            UPDATE liabilities
            SET name = ?, kind = ?, total_amount = ?, monthly_payment = ?, due_date = ?
            WHERE id = ? AND user_id = ?
            "#,
            params![
                liability.name,
                liability.kind,
                liability.total_amount,
                liability.monthly_payment,
                liability.due_date.to_string(),
                id,
                user_id
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Liability {} not found", id)));
        }
        Ok(())
    }

    /// Delete a liability, scoped to its owner
    pub fn delete_liability(&self, user_id: i64, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "DELETE FROM liabilities WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Liability {} not found", id)));
        }
        Ok(())
    }
}
