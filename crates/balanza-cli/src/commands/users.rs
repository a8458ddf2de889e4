//! User account commands

use anyhow::{Context, Result};
use balanza_core::db::Database;
use balanza_core::models::NewUser;

pub fn cmd_user_add(
    db: &Database,
    name: &str,
    email: &str,
    username: &str,
    password: &str,
) -> Result<()> {
    let id = db
        .create_user(&NewUser {
            full_name: name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
        .context("Failed to create user")?;

    println!("✅ Registered user {} (id {})", username, id);
    Ok(())
}
