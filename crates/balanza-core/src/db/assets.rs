//! Asset holding operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{AssetKind, AssetRecord, NewAsset};

fn row_to_asset(row: &rusqlite::Row<'_>) -> rusqlite::Result<AssetRecord> {
    let kind_str: String = row.get(3)?;
    let created_at_str: String = row.get(6)?;
    Ok(AssetRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        // Unknown kinds are treated as "otro" rather than failing the row
        kind: kind_str.parse().unwrap_or(AssetKind::Otro),
        value: row.get(4)?,
        monthly_flow: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}

const ASSET_COLUMNS: &str = "id, user_id, name, kind, value, monthly_flow, created_at";

impl Database {
    /// Insert an asset holding for a user
    pub fn insert_asset(&self, user_id: i64, asset: &NewAsset) -> Result<i64> {
        if asset.value < 0.0 {
            return Err(Error::Validation("Value must not be negative".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO assets (user_id, name, kind, value, monthly_flow) VALUES (?, ?, ?, ?, ?)",
            params![
                user_id,
                asset.name,
                asset.kind.as_str(),
                asset.value,
                asset.monthly_flow
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all asset holdings for a user
    pub fn list_assets(&self, user_id: i64) -> Result<Vec<AssetRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM assets WHERE user_id = ? ORDER BY id",
            ASSET_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id], row_to_asset)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// List asset holdings recorded on or before `as_of`
    ///
    /// Assets are stocks, not flows: the engine takes the snapshot valid at
    /// the window end instead of summing over time.
    pub fn list_assets_as_of(&self, user_id: i64, as_of: NaiveDate) -> Result<Vec<AssetRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM assets WHERE user_id = ? AND date(created_at) <= ? ORDER BY id",
            ASSET_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![user_id, as_of.to_string()], row_to_asset)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Get a single asset, scoped to its owner
    pub fn get_asset(&self, user_id: i64, id: i64) -> Result<Option<AssetRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                &format!(
                    "SELECT {} FROM assets WHERE id = ? AND user_id = ?",
                    ASSET_COLUMNS
                ),
                params![id, user_id],
                row_to_asset,
            )
            .optional()?;
        Ok(record)
    }

    /// Update an asset, scoped to its owner
    pub fn update_asset(&self, user_id: i64, id: i64, asset: &NewAsset) -> Result<()> {
        if asset.value < 0.0 {
            return Err(Error::Validation("Value must not be negative".to_string()));
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE assets SET name = ?, kind = ?, value = ?, monthly_flow = ? WHERE id = ? AND user_id = ?",
            params![
                asset.name,
                asset.kind.as_str(),
                asset.value,
                asset.monthly_flow,
                id,
                user_id
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }

    /// Delete an asset, scoped to its owner
    pub fn delete_asset(&self, user_id: i64, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "DELETE FROM assets WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }
}
