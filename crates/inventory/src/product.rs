use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, ProductId};

/// CSV columns every data file must name in its header.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "current_stock",
    "average_daily_sales",
    "min_reorder_qty",
    "lead_time",
    "cost_per_unit",
    "criticality",
];

/// One row of the inventory table.
///
/// Field names match the CSV header of the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units on hand. May be negative (backorders); never clamped.
    pub current_stock: f64,
    pub average_daily_sales: f64,
    pub min_reorder_qty: f64,
    /// Days to receive a reorder.
    pub lead_time: f64,
    pub cost_per_unit: f64,
    /// Categorical label, passed through unmodified.
    pub criticality: String,
}

impl Product {
    /// Check the numeric invariants every loaded row must satisfy.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_finite("current_stock", self.current_stock)?;
        ensure_non_negative("average_daily_sales", self.average_daily_sales)?;
        ensure_non_negative("min_reorder_qty", self.min_reorder_qty)?;
        ensure_non_negative("lead_time", self.lead_time)?;
        ensure_non_negative("cost_per_unit", self.cost_per_unit)?;
        Ok(())
    }
}

fn ensure_finite(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

fn ensure_non_negative(field: &str, value: f64) -> DomainResult<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be >= 0, got {value}"
        )));
    }
    Ok(())
}
