use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `eventos` table as the datastore returns it.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventRow {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub ubicacion: String,
    pub cupo_maximo: i32,
    pub presupuesto: Option<Decimal>,
    pub categoria: String,
    pub estado: String,
}

/// Event as exposed by the API: date and time rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub hora: String,
    pub ubicacion: String,
    pub cupo_maximo: i32,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub presupuesto: Option<Decimal>,
    pub categoria: String,
    pub estado: String,
}

impl Event {
    pub fn from_row(row: EventRow, budget_policy: BudgetPolicy) -> Self {
        Self {
            id: row.id,
            titulo: row.titulo,
            descripcion: row.descripcion,
            fecha: row.fecha.to_string(),
            hora: row.hora.to_string(),
            ubicacion: row.ubicacion,
            cupo_maximo: row.cupo_maximo,
            presupuesto: budget_policy.normalize(row.presupuesto),
            categoria: row.categoria,
            estado: row.estado,
        }
    }
}

/// Creation payload. `fecha` and `hora` stay text here; the datastore casts
/// them into its DATE and TIME columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEvent {
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub hora: String,
    pub ubicacion: String,
    pub cupo_maximo: i32,
    #[serde(default)]
    pub presupuesto: Option<Decimal>,
    pub categoria: String,
    pub estado: String,
}

/// How a stored budget is reported back to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BudgetPolicy {
    /// Null and zero are both reported as absent.
    #[default]
    ZeroAsAbsent,
    /// Only SQL NULL is absent.
    Preserve,
}

impl BudgetPolicy {
    pub fn normalize(self, budget: Option<Decimal>) -> Option<Decimal> {
        match self {
            BudgetPolicy::ZeroAsAbsent => budget.filter(|value| !value.is_zero()),
            BudgetPolicy::Preserve => budget,
        }
    }
}
