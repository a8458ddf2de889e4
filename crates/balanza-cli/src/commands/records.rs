//! Income, expense, asset and liability commands

use anyhow::{Context, Result};
use chrono::NaiveDate;

use balanza_core::db::Database;
use balanza_core::models::{AssetKind, NewAsset, NewFlowRecord, NewLiability};

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn cmd_income_add(
    db: &Database,
    user: i64,
    amount: f64,
    category: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let record = NewFlowRecord {
        amount,
        category: category.to_string(),
        date: date.unwrap_or_else(today),
    };
    let id = db
        .insert_income(user, &record)
        .context("Failed to record income")?;

    println!("✅ Income {} recorded: ${:.2} ({})", id, amount, category);
    Ok(())
}

pub fn cmd_income_list(db: &Database, user: i64) -> Result<()> {
    let records = db.list_incomes(user)?;
    if records.is_empty() {
        println!("No income records for user {}", user);
        return Ok(());
    }

    println!("💰 Incomes for user {}", user);
    for record in &records {
        println!(
            "   #{:<5} {}  ${:>12.2}  {}",
            record.id, record.date, record.amount, record.category
        );
    }
    let total: f64 = records.iter().map(|r| r.amount).sum();
    println!("   Total: ${:.2}", total);
    Ok(())
}

pub fn cmd_expense_add(
    db: &Database,
    user: i64,
    amount: f64,
    category: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let record = NewFlowRecord {
        amount,
        category: category.to_string(),
        date: date.unwrap_or_else(today),
    };
    let id = db
        .insert_expense(user, &record)
        .context("Failed to record expense")?;

    println!("✅ Expense {} recorded: ${:.2} ({})", id, amount, category);
    Ok(())
}

pub fn cmd_expense_list(db: &Database, user: i64) -> Result<()> {
    let records = db.list_expenses(user)?;
    if records.is_empty() {
        println!("No expense records for user {}", user);
        return Ok(());
    }

    println!("🧾 Expenses for user {}", user);
    for record in &records {
        println!(
            "   #{:<5} {}  ${:>12.2}  {}",
            record.id, record.date, record.amount, record.category
        );
    }
    let total: f64 = records.iter().map(|r| r.amount).sum();
    println!("   Total: ${:.2}", total);
    Ok(())
}

pub fn cmd_asset_add(
    db: &Database,
    user: i64,
    name: &str,
    kind: &str,
    value: f64,
    monthly_flow: Option<f64>,
) -> Result<()> {
    let kind: AssetKind = kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Invalid asset kind")?;

    let id = db
        .insert_asset(
            user,
            &NewAsset {
                name: name.to_string(),
                kind,
                value,
                monthly_flow,
            },
        )
        .context("Failed to record asset")?;

    println!("✅ Asset {} recorded: {} (${:.2})", id, name, value);
    Ok(())
}

pub fn cmd_asset_list(db: &Database, user: i64) -> Result<()> {
    let assets = db.list_assets(user)?;
    if assets.is_empty() {
        println!("No assets for user {}", user);
        return Ok(());
    }

    println!("🏦 Assets for user {}", user);
    for asset in &assets {
        let flow = asset
            .monthly_flow
            .map(|f| format!("  (+${:.2}/mes)", f))
            .unwrap_or_default();
        println!(
            "   #{:<5} {:<10} ${:>12.2}  {}{}",
            asset.id, asset.kind, asset.value, asset.name, flow
        );
    }
    let total: f64 = assets.iter().map(|a| a.value).sum();
    println!("   Total value: ${:.2}", total);
    Ok(())
}

pub fn cmd_liability_add(
    db: &Database,
    user: i64,
    name: &str,
    kind: &str,
    total: f64,
    payment: f64,
    due: NaiveDate,
) -> Result<()> {
    let id = db
        .insert_liability(
            user,
            &NewLiability {
                name: name.to_string(),
                kind: kind.to_string(),
                total_amount: total,
                monthly_payment: payment,
                due_date: due,
            },
        )
        .context("Failed to record liability")?;

    println!(
        "✅ Liability {} recorded: {} (${:.2}, ${:.2}/mes)",
        id, name, total, payment
    );
    Ok(())
}

pub fn cmd_liability_list(db: &Database, user: i64) -> Result<()> {
    let liabilities = db.list_liabilities(user)?;
    if liabilities.is_empty() {
        println!("No liabilities for user {}", user);
        return Ok(());
    }

    println!("💳 Liabilities for user {}", user);
    for liability in &liabilities {
        println!(
            "   #{:<5} {:<10} ${:>12.2}  ${:>10.2}/mes  due {}  {}",
            liability.id,
            liability.kind,
            liability.total_amount,
            liability.monthly_payment,
            liability.due_date,
            liability.name
        );
    }
    let total: f64 = liabilities.iter().map(|l| l.total_amount).sum();
    println!("   Total outstanding: ${:.2}", total);
    Ok(())
}
