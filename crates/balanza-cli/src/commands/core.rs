//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use balanza_core::db::Database;

/// Open the database at the given path, running migrations
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Register a user:  balanza user add --name \"Ana\" --email ana@example.com --username ana --password ...");
    println!("  2. Record an income: balanza income add --amount 2500 --category salario");
    println!("  3. Check your score: balanza health");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    println!("📊 Balanza Status");
    println!("   ─────────────────────────────");
    println!("   Database: {}", db.path());

    if let Ok(meta) = std::fs::metadata(db_path) {
        println!("   Size: {:.1} KB", meta.len() as f64 / 1024.0);
    }

    let conn = db.conn()?;
    for table in ["users", "incomes", "expenses", "assets", "liabilities"] {
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        println!("   {}: {}", table, count);
    }

    Ok(())
}
