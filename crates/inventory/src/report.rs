//! Reorder report: products that need reordering and what it would cost.

use serde::Serialize;

use crate::reorder::{DaysRemaining, ReorderPolicy};
use crate::table::InventoryTable;

/// One line of the reorder report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderItem {
    pub name: String,
    pub current_stock: f64,
    pub days_remaining: DaysRemaining,
    pub reorder_qty: i64,
    pub cost_per_unit: f64,
    pub estimated_cost: f64,
    pub criticality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderReport {
    pub items: Vec<ReorderItem>,
    pub total_cost: f64,
    pub total_items: usize,
}

impl ReorderReport {
    /// Collect every product flagged for reorder, in table order.
    pub fn build(table: &InventoryTable, policy: &ReorderPolicy) -> Self {
        let items: Vec<ReorderItem> = table
            .all(policy)
            .into_iter()
            .filter(|m| m.needs_reorder)
            .map(|m| {
                let estimated_cost = policy.estimated_cost(&m.product);
                ReorderItem {
                    name: m.product.name,
                    current_stock: m.product.current_stock,
                    days_remaining: m.days_remaining,
                    reorder_qty: m.reorder_qty,
                    cost_per_unit: m.product.cost_per_unit,
                    estimated_cost,
                    criticality: m.product.criticality,
                }
            })
            .collect();

        let total_cost = items.iter().map(|i| i.estimated_cost).sum();
        let total_items = items.len();

        Self {
            items,
            total_cost,
            total_items,
        }
    }
}
