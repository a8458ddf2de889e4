//! Balanza CLI - Personal finance tracker with a health score
//!
//! Usage:
//!   balanza init                          Initialize database
//!   balanza user add --name ... --email ...
//!   balanza income add --amount 2500 --category salario
//!   balanza health --user 1 --days 30     Evaluate financial health
//!   balanza serve --port 3000             Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::User { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                UserAction::Add {
                    name,
                    email,
                    username,
                    password,
                } => commands::cmd_user_add(&db, &name, &email, &username, &password),
            }
        }
        Commands::Income { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                RecordAction::Add {
                    user,
                    amount,
                    category,
                    date,
                } => commands::cmd_income_add(&db, user, amount, &category, date),
                RecordAction::List { user } => commands::cmd_income_list(&db, user),
            }
        }
        Commands::Expense { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                RecordAction::Add {
                    user,
                    amount,
                    category,
                    date,
                } => commands::cmd_expense_add(&db, user, amount, &category, date),
                RecordAction::List { user } => commands::cmd_expense_list(&db, user),
            }
        }
        Commands::Asset { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                AssetAction::Add {
                    user,
                    name,
                    kind,
                    value,
                    monthly_flow,
                } => commands::cmd_asset_add(&db, user, &name, &kind, value, monthly_flow),
                AssetAction::List { user } => commands::cmd_asset_list(&db, user),
            }
        }
        Commands::Liability { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                LiabilityAction::Add {
                    user,
                    name,
                    kind,
                    total,
                    payment,
                    due,
                } => commands::cmd_liability_add(&db, user, &name, &kind, total, payment, due),
                LiabilityAction::List { user } => commands::cmd_liability_list(&db, user),
            }
        }
        Commands::Health { user, days } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_health(&db, user, days)
        }
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth).await,
    }
}
