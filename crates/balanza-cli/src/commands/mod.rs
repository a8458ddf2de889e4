//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db) plus init and status
//! - `health` - Financial health evaluation
//! - `records` - Income/expense/asset/liability commands
//! - `serve` - Web server command
//! - `users` - User account commands

pub mod core;
pub mod health;
pub mod records;
pub mod serve;
pub mod users;

// Re-export command functions for main.rs
pub use core::*;
pub use health::*;
pub use records::*;
pub use serve::*;
pub use users::*;
