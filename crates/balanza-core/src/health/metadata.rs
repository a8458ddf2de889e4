//! Display metadata for the health rules
//!
//! Titles, descriptions and recommendations shown alongside each rule
//! verdict. Static content, served so every client renders the same texts.

use serde::Serialize;

use super::types::RuleKey;

/// Human-readable description of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub titulo: &'static str,
    pub descripcion: &'static str,
    pub recomendacion: &'static str,
}

/// Display metadata for a rule key
pub fn rule_metadata(key: RuleKey) -> RuleInfo {
    match key {
        RuleKey::Regla503020 => RuleInfo {
            titulo: "Regla 50/30/20",
            descripcion: "50% necesidades, 30% deseos, 20% ahorro/inversión",
            recomendacion: "Intenta ajustar tus gastos para cumplir con la regla 50/30/20. \
                            Reduce gastos innecesarios y aumenta tu ahorro.",
        },
        RuleKey::LimiteEndeudamiento => RuleInfo {
            titulo: "Límite de Endeudamiento",
            descripcion: "Las deudas no deben superar el 40% de ingresos",
            recomendacion: "Considera consolidar deudas o aumentar pagos mensuales para \
                            reducir el nivel de endeudamiento.",
        },
        RuleKey::GastaMasQueGana => RuleInfo {
            titulo: "Balance Financiero",
            descripcion: "Tus gastos no deben superar tus ingresos",
            recomendacion: "Urgente: Revisa tus gastos y elimina lo no esencial. Busca formas \
                            de aumentar tus ingresos.",
        },
        RuleKey::FondoEmergencia => RuleInfo {
            titulo: "Fondo de Emergencia",
            descripcion: "Ahorro equivalente a 3-6 meses de gastos",
            recomendacion: "Destina un porcentaje fijo de tus ingresos mensualmente hasta \
                            alcanzar 3-6 meses de gastos.",
        },
        RuleKey::SinInversiones => RuleInfo {
            titulo: "Activos e Inversiones",
            descripcion: "Poseer activos que generen valor",
            recomendacion: "Comienza a invertir aunque sea con montos pequeños. Considera \
                            fondos mutuos o ETFs para principiantes.",
        },
        RuleKey::InversionEducacion => RuleInfo {
            titulo: "Inversión en Educación",
            descripcion: "Al menos 5% de ingresos en desarrollo personal",
            recomendacion: "Invierte en cursos, libros o certificaciones que mejoren tus \
                            habilidades profesionales.",
        },
        RuleKey::LujosVsEducacion => RuleInfo {
            titulo: "Prioridades Financieras",
            descripcion: "Priorizar educación/activos sobre lujos",
            recomendacion: "Revalúa tus prioridades de gasto. Los activos y la educación \
                            generan valor a largo plazo.",
        },
        RuleKey::ReservaImprevistos => RuleInfo {
            titulo: "Reserva para Imprevistos",
            descripcion: "Al menos 1 mes de ingresos en ahorro líquido",
            recomendacion: "Crea una cuenta de ahorros separada específicamente para \
                            emergencias menores.",
        },
    }
}
