//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_user(db: &Database) -> i64 {
        db.create_user(&NewUser {
            full_name: "Ana Pérez".to_string(),
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            password: "contraseña-segura".to_string(),
        })
        .unwrap()
    }

    fn flow(amount: f64, category: &str, day: &str) -> NewFlowRecord {
        NewFlowRecord {
            amount,
            category: category.to_string(),
            date: date(day),
        }
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_user(1).unwrap().is_none());
    }

    #[test]
    fn test_in_memory_db_removed_on_drop() {
        let db = Database::in_memory().unwrap();
        let path = std::path::PathBuf::from(db.path());
        assert!(path.exists());

        // Clones share the backing directory, so it outlives the original
        let clone = db.clone();
        drop(db);
        assert!(path.exists());

        drop(clone);
        assert!(!path.exists());
    }

    #[test]
    fn test_user_registration_and_login() {
        let db = Database::in_memory().unwrap();
        let id = test_user(&db);
        assert!(id > 0);

        let user = db.get_user(id).unwrap().unwrap();
        assert_eq!(user.email, "ana@example.com");
        // The stored hash is never the plain password
        assert_ne!(user.password_hash, "contraseña-segura");

        let authed = db
            .authenticate_user("ana@example.com", "contraseña-segura")
            .unwrap();
        assert_eq!(authed.id, id);

        let err = db
            .authenticate_user("ana@example.com", "incorrecta-123")
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));

        let err = db
            .authenticate_user("nadie@example.com", "contraseña-segura")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let db = Database::in_memory().unwrap();
        test_user(&db);

        let err = db
            .create_user(&NewUser {
                full_name: "Otra Ana".to_string(),
                email: "ana@example.com".to_string(),
                username: "otra_ana".to_string(),
                password: "contraseña-segura".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_short_password_rejected() {
        let db = Database::in_memory().unwrap();
        let err = db
            .create_user(&NewUser {
                full_name: "Ana".to_string(),
                email: "corta@example.com".to_string(),
                username: "corta".to_string(),
                password: "corta".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_change_password() {
        let db = Database::in_memory().unwrap();
        let id = test_user(&db);

        // Wrong current password is rejected
        let err = db
            .change_password(id, "incorrecta-123", "nueva-contraseña")
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));

        db.change_password(id, "contraseña-segura", "nueva-contraseña")
            .unwrap();
        db.authenticate_user("ana@example.com", "nueva-contraseña")
            .unwrap();
    }

    #[test]
    fn test_income_crud() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        let id = db
            .insert_income(user_id, &flow(2500.0, "salario", "2026-06-15"))
            .unwrap();
        assert!(id > 0);

        let record = db.get_income(user_id, id).unwrap().unwrap();
        assert_eq!(record.amount, 2500.0);
        assert_eq!(record.category, "salario");
        assert_eq!(record.date, date("2026-06-15"));

        db.update_income(user_id, id, &flow(2600.0, "salario", "2026-06-15"))
            .unwrap();
        let record = db.get_income(user_id, id).unwrap().unwrap();
        assert_eq!(record.amount, 2600.0);

        db.delete_income(user_id, id).unwrap();
        assert!(db.get_income(user_id, id).unwrap().is_none());

        let err = db.delete_income(user_id, id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_nonpositive_amount_rejected() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        let err = db
            .insert_income(user_id, &flow(0.0, "salario", "2026-06-15"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = db
            .insert_expense(user_id, &flow(-10.0, "comida", "2026-06-15"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_records_scoped_to_owner() {
        let db = Database::in_memory().unwrap();
        let ana = test_user(&db);
        let luis = db
            .create_user(&NewUser {
                full_name: "Luis Gómez".to_string(),
                email: "luis@example.com".to_string(),
                username: "luis".to_string(),
                password: "contraseña-segura".to_string(),
            })
            .unwrap();

        let id = db
            .insert_expense(ana, &flow(100.0, "comida", "2026-06-15"))
            .unwrap();

        // Another user can neither see nor touch the record
        assert!(db.get_expense(luis, id).unwrap().is_none());
        let err = db.delete_expense(luis, id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(db.get_expense(ana, id).unwrap().is_some());
    }

    #[test]
    fn test_list_incomes_newest_first() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        db.insert_income(user_id, &flow(100.0, "salario", "2026-06-01"))
            .unwrap();
        db.insert_income(user_id, &flow(200.0, "freelance", "2026-06-20"))
            .unwrap();

        let records = db.list_incomes(user_id).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, 200.0);
        assert_eq!(records[1].amount, 100.0);
    }

    #[test]
    fn test_window_queries_are_inclusive() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        db.insert_expense(user_id, &flow(10.0, "comida", "2026-06-01"))
            .unwrap();
        db.insert_expense(user_id, &flow(20.0, "comida", "2026-06-30"))
            .unwrap();
        db.insert_expense(user_id, &flow(30.0, "comida", "2026-07-01"))
            .unwrap();

        let records = db
            .list_expenses_in_window(user_id, date("2026-06-01"), date("2026-06-30"))
            .unwrap();
        assert_eq!(records.len(), 2);
        let total: f64 = records.iter().map(|r| r.amount).sum();
        assert_eq!(total, 30.0);
    }

    #[test]
    fn test_asset_crud_and_kind_roundtrip() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        let id = db
            .insert_asset(
                user_id,
                &NewAsset {
                    name: "Cuenta de ahorro".to_string(),
                    kind: AssetKind::Ahorro,
                    value: 5000.0,
                    monthly_flow: None,
                },
            )
            .unwrap();

        let asset = db.get_asset(user_id, id).unwrap().unwrap();
        assert_eq!(asset.kind, AssetKind::Ahorro);
        assert!(asset.kind.is_liquid());
        assert_eq!(asset.value, 5000.0);

        db.update_asset(
            user_id,
            id,
            &NewAsset {
                name: "Cuenta de ahorro".to_string(),
                kind: AssetKind::Ahorro,
                value: 6000.0,
                monthly_flow: Some(100.0),
            },
        )
        .unwrap();
        let asset = db.get_asset(user_id, id).unwrap().unwrap();
        assert_eq!(asset.value, 6000.0);
        assert_eq!(asset.monthly_flow, Some(100.0));

        db.delete_asset(user_id, id).unwrap();
        assert!(db.get_asset(user_id, id).unwrap().is_none());
    }

    #[test]
    fn test_liability_crud() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);

        let id = db
            .insert_liability(
                user_id,
                &NewLiability {
                    name: "Crédito auto".to_string(),
                    kind: "prestamo".to_string(),
                    total_amount: 12000.0,
                    monthly_payment: 400.0,
                    due_date: date("2029-06-01"),
                },
            )
            .unwrap();

        let liabilities = db.list_liabilities(user_id).unwrap();
        assert_eq!(liabilities.len(), 1);
        assert_eq!(liabilities[0].monthly_payment, 400.0);

        db.delete_liability(user_id, id).unwrap();
        assert!(db.list_liabilities(user_id).unwrap().is_empty());
    }

    #[test]
    fn test_deleting_user_cascades_records() {
        let db = Database::in_memory().unwrap();
        let user_id = test_user(&db);
        db.insert_expense(user_id, &flow(50.0, "comida", "2026-06-15"))
            .unwrap();

        let conn = db.conn().unwrap();
        conn.execute("DELETE FROM users WHERE id = ?", rusqlite::params![user_id])
            .unwrap();

        assert!(db.list_expenses(user_id).unwrap().is_empty());
    }
}
