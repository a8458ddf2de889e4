//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use balanza_core::db::Database;

use crate::commands;

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn create_test_user(db: &Database) -> i64 {
    db.create_user(&balanza_core::models::NewUser {
        full_name: "Ana Pérez".to_string(),
        email: "ana@example.com".to_string(),
        username: "ana".to_string(),
        password: "contraseña-segura".to_string(),
    })
    .unwrap()
}

// ========== User Command Tests ==========

#[test]
fn test_cmd_user_add() {
    let db = setup_test_db();
    let result = commands::cmd_user_add(&db, "Luis Gómez", "luis@example.com", "luis", "otra-clave-123");
    assert!(result.is_ok());

    let user = db.get_user_by_email("luis@example.com").unwrap().unwrap();
    assert_eq!(user.username, "luis");
}

#[test]
fn test_cmd_user_add_rejects_short_password() {
    let db = setup_test_db();
    let result = commands::cmd_user_add(&db, "Luis", "luis@example.com", "luis", "corta");
    assert!(result.is_err());
}

// ========== Record Command Tests ==========

#[test]
fn test_cmd_income_add_and_list() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    commands::cmd_income_add(&db, user, 2500.0, "salario", None).unwrap();
    assert_eq!(db.list_incomes(user).unwrap().len(), 1);

    // Listing prints, but must not fail
    commands::cmd_income_list(&db, user).unwrap();
}

#[test]
fn test_cmd_expense_add_rejects_zero_amount() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    let result = commands::cmd_expense_add(&db, user, 0.0, "comida", None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_asset_add_parses_kind() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    commands::cmd_asset_add(&db, user, "Cuenta de ahorro", "ahorro", 5000.0, None).unwrap();
    let assets = db.list_assets(user).unwrap();
    assert_eq!(assets.len(), 1);
    assert!(assets[0].kind.is_liquid());

    let result = commands::cmd_asset_add(&db, user, "???", "cripta", 1.0, None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_liability_add() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    let due = chrono::NaiveDate::parse_from_str("2029-06-01", "%Y-%m-%d").unwrap();
    commands::cmd_liability_add(&db, user, "Crédito auto", "prestamo", 12000.0, 400.0, due)
        .unwrap();
    assert_eq!(db.list_liabilities(user).unwrap().len(), 1);
}

// ========== Health Command Tests ==========

#[test]
fn test_cmd_health_with_records() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    commands::cmd_income_add(&db, user, 3000.0, "salario", None).unwrap();
    commands::cmd_expense_add(&db, user, 1200.0, "vivienda", None).unwrap();

    let result = commands::cmd_health(&db, user, 30);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_health_empty_account() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    // No records: the evaluation still produces a report
    let result = commands::cmd_health(&db, user, 30);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_health_rejects_zero_window() {
    let db = setup_test_db();
    let user = create_test_user(&db);

    let result = commands::cmd_health(&db, user, 0);
    assert!(result.is_err());
}
