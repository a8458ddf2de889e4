//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Balanza - Personal finance tracking with a financial health score
#[derive(Parser)]
#[command(name = "balanza")]
#[command(about = "Personal finance tracker and health scoring engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "balanza.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage income records
    Income {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage expense records
    Expense {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage asset holdings
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage liabilities
    Liability {
        #[command(subcommand)]
        action: LiabilityAction,
    },

    /// Evaluate financial health
    Health {
        /// User ID to evaluate
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Evaluation window in days
        #[arg(short, long, default_value = "30")]
        days: u32,
    },

    /// Show database status
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires a bearer token on every request.
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new user
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address (used for login)
        #[arg(long)]
        email: String,

        /// Username
        #[arg(long)]
        username: String,

        /// Password (at least 8 characters)
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
pub enum RecordAction {
    /// Add a record
    Add {
        /// User ID the record belongs to
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Amount (must be positive)
        #[arg(short, long)]
        amount: f64,

        /// Category (e.g. salario, vivienda, comida, educacion)
        #[arg(short, long)]
        category: String,

        /// Effective date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List records, newest first
    List {
        /// User ID
        #[arg(short, long, default_value = "1")]
        user: i64,
    },
}

#[derive(Subcommand)]
pub enum AssetAction {
    /// Add an asset holding
    Add {
        /// User ID the asset belongs to
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Asset name
        #[arg(long)]
        name: String,

        /// Kind: inmueble, vehiculo, inversion, ahorro, efectivo, negocio, otro
        #[arg(short, long)]
        kind: String,

        /// Current value
        #[arg(long)]
        value: f64,

        /// Monthly cash flow the asset produces, if any
        #[arg(long)]
        monthly_flow: Option<f64>,
    },

    /// List asset holdings
    List {
        /// User ID
        #[arg(short, long, default_value = "1")]
        user: i64,
    },
}

#[derive(Subcommand)]
pub enum LiabilityAction {
    /// Add a liability
    Add {
        /// User ID the liability belongs to
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Liability name
        #[arg(long)]
        name: String,

        /// Kind (free text: hipoteca, tarjeta, prestamo, ...)
        #[arg(short, long)]
        kind: String,

        /// Total outstanding balance
        #[arg(long)]
        total: f64,

        /// Recurring monthly payment
        #[arg(long)]
        payment: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,
    },

    /// List liabilities
    List {
        /// User ID
        #[arg(short, long, default_value = "1")]
        user: i64,
    },
}
