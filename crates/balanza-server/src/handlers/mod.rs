//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod assets;
pub mod auth;
pub mod expenses;
pub mod health;
pub mod incomes;
pub mod liabilities;

// Re-export all handlers for use in router
pub use assets::*;
pub use auth::*;
pub use expenses::*;
pub use health::*;
pub use incomes::*;
pub use liabilities::*;
