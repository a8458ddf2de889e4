//! Domain models for Balanza

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub username: String,
    /// Argon2id hash, never the plain password
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// An income record (inflow over the evaluation window)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: i64,
    pub user_id: i64,
    /// Always >= 0; the record kind determines the sign
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// An expense record (outflow over the evaluation window)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    /// Free-form category; classified into needs/wants/savings by
    /// [`crate::categories::classify`]
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// An asset holding (point-in-time stock, not a flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: AssetKind,
    /// Current value of the holding
    pub value: f64,
    /// Monthly cash flow the asset produces, if any (rent, dividends)
    pub monthly_flow: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// A liability (point-in-time debt snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiabilityRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Free-form kind: "hipoteca", "tarjeta", "prestamo", ...
    pub kind: String,
    /// Total outstanding balance
    pub total_amount: f64,
    /// Recurring monthly payment (used for the debt-to-income ratio)
    pub monthly_payment: f64,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Kinds of assets a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Real estate
    Inmueble,
    /// Vehicle
    Vehiculo,
    /// Investment (funds, stocks)
    Inversion,
    /// Savings account or short-term deposit
    Ahorro,
    /// Cash on hand
    Efectivo,
    /// Business stake
    Negocio,
    Otro,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inmueble => "inmueble",
            Self::Vehiculo => "vehiculo",
            Self::Inversion => "inversion",
            Self::Ahorro => "ahorro",
            Self::Efectivo => "efectivo",
            Self::Negocio => "negocio",
            Self::Otro => "otro",
        }
    }

    /// Whether the asset counts as emergency-fund liquidity.
    /// Cash and short-term savings are immediately available; property,
    /// vehicles and business stakes are not.
    pub fn is_liquid(&self) -> bool {
        matches!(self, Self::Ahorro | Self::Efectivo)
    }
}

impl std::str::FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inmueble" => Ok(Self::Inmueble),
            "vehiculo" | "vehículo" => Ok(Self::Vehiculo),
            "inversion" | "inversión" => Ok(Self::Inversion),
            "ahorro" => Ok(Self::Ahorro),
            "efectivo" => Ok(Self::Efectivo),
            "negocio" => Ok(Self::Negocio),
            "otro" => Ok(Self::Otro),
            _ => Err(format!("Unknown asset kind: {}", s)),
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three classes of the 50/30/20 budget rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseClass {
    Need,
    Want,
    SavingInvestment,
}

impl ExpenseClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Want => "want",
            Self::SavingInvestment => "saving_investment",
        }
    }
}

impl std::fmt::Display for ExpenseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for creating an income or expense record
#[derive(Debug, Clone, Deserialize)]
pub struct NewFlowRecord {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// Input for creating an asset record
#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    pub name: String,
    pub kind: AssetKind,
    pub value: f64,
    pub monthly_flow: Option<f64>,
}

/// Input for creating a liability record
#[derive(Debug, Clone, Deserialize)]
pub struct NewLiability {
    pub name: String,
    pub kind: String,
    pub total_amount: f64,
    pub monthly_payment: f64,
    pub due_date: NaiveDate,
}

/// Input for registering a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}
