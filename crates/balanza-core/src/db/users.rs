//! User account operations

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewUser, User};

/// Hash a password with Argon2id and a fresh random salt
fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a plain password against a stored Argon2 hash
fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let created_at_str: String = row.get(5)?;
    Ok(User {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        username: row.get(3)?,
        password_hash: row.get(4)?,
        created_at: parse_datetime(&created_at_str),
    })
}

const USER_COLUMNS: &str = "id, full_name, email, username, password_hash, created_at";

impl Database {
    /// Register a new user; fails if the email or username is taken
    pub fn create_user(&self, new_user: &NewUser) -> Result<i64> {
        if new_user.password.len() < 8 {
            return Err(Error::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let conn = self.conn()?;

        let taken: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE email = ? OR username = ?",
                params![new_user.email, new_user.username],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(Error::Validation(
                "Email or username already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&new_user.password)?;
        conn.execute(
            "INSERT INTO users (full_name, email, username, password_hash) VALUES (?, ?, ?, ?)",
            params![
                new_user.full_name,
                new_user.email,
                new_user.username,
                password_hash
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a user by ID
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                params![id],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Get a user by email
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS),
                params![email],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Verify login credentials, returning the user on success
    pub fn authenticate_user(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .get_user_by_email(email)?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        if verify_password(password, &user.password_hash) {
            Ok(user)
        } else {
            Err(Error::Auth("Incorrect password".to_string()))
        }
    }

    /// Change a user's password after verifying the current one
    pub fn change_password(&self, user_id: i64, current: &str, new_password: &str) -> Result<()> {
        if new_password.len() < 8 {
            return Err(Error::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let user = self
            .get_user(user_id)?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        if !verify_password(current, &user.password_hash) {
            return Err(Error::Auth("Incorrect password".to_string()));
        }

        let password_hash = hash_password(new_password)?;
        let conn = self.conn()?;
        conn.execute(
            "UPDATE users SET password_hash = ? WHERE id = ?",
            params![password_hash, user_id],
        )?;
        Ok(())
    }
}
