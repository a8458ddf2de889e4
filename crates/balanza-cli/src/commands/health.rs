//! Financial health evaluation command

use anyhow::{Context, Result};

use balanza_core::db::Database;
use balanza_core::health::{self, HealthBand, Severity};

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✅",
        Severity::Warning => "⚠️ ",
        Severity::Danger => "❌",
    }
}

pub fn cmd_health(db: &Database, user: i64, days: u32) -> Result<()> {
    let report =
        health::evaluate(db, user, days).context("Failed to evaluate financial health")?;

    let resumen = &report.resumen_financiero;
    println!("🩺 Financial health for user {} (last {} days)", user, days);
    println!("   ─────────────────────────────");
    println!("   Ingresos: ${:.2}", resumen.ingresos);
    println!("   Egresos:  ${:.2}", resumen.egresos);
    println!("   Balance:  ${:.2}", resumen.balance);
    println!();

    for (key, result) in report.reglas.iter() {
        let info = health::rule_metadata(*key);
        println!(
            "   {} {:<26} {}",
            severity_icon(result.severidad),
            info.titulo,
            result.mensaje
        );
        if !result.cumple {
            println!("      💡 {}", info.recomendacion);
        }
    }

    let score = &report.puntuacion_general;
    let band = HealthBand::from_percentage(score.porcentaje);
    println!();
    println!(
        "   Score: {}/{} rules ({}%) - {}",
        score.cumplidas,
        score.total,
        score.porcentaje,
        band.label()
    );

    Ok(())
}
