use std::sync::Arc;

use restock_core::{DomainResult, ProductId};
use restock_inventory::{
    simulate_spike, InventoryTable, ProductMetrics, ReorderPolicy, ReorderReport, SpikeScenario,
};

/// Shared request-time state.
///
/// The table is never written after load, so handlers share it without
/// locking; every derivation produces a fresh, request-local view.
#[derive(Debug, Clone)]
pub struct AppServices {
    table: Arc<InventoryTable>,
    policy: ReorderPolicy,
}

impl AppServices {
    pub fn new(table: InventoryTable, policy: ReorderPolicy) -> Self {
        Self {
            table: Arc::new(table),
            policy,
        }
    }

    pub fn products(&self) -> Vec<ProductMetrics> {
        self.table.all(&self.policy)
    }

    pub fn product(&self, id: ProductId) -> DomainResult<ProductMetrics> {
        self.table.metrics_for(id, &self.policy)
    }

    pub fn reorder_report(&self) -> ReorderReport {
        ReorderReport::build(&self.table, &self.policy)
    }

    pub fn simulate(&self, scenario: &SpikeScenario) -> DomainResult<ProductMetrics> {
        simulate_spike(&self.table, scenario, &self.policy)
    }
}
