//! Demand-spike simulation.
//!
//! Previews what the reorder metrics of one product would look like if its
//! demand rate jumped by `spike_factor`. Runs on a private copy of the table;
//! nothing is persisted.

use restock_core::{DomainError, DomainResult, ProductId};

use crate::reorder::{ProductMetrics, ReorderPolicy};
use crate::table::InventoryTable;

pub const DEFAULT_SPIKE_FACTOR: f64 = 3.0;
pub const DEFAULT_SPIKE_DURATION_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeScenario {
    pub product_id: ProductId,
    /// Multiplier applied to `average_daily_sales`. Must be finite and >= 0.
    pub spike_factor: f64,
    /// Accepted and reported, but the spike is treated as permanent.
    pub duration_days: i64,
}

impl SpikeScenario {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            spike_factor: DEFAULT_SPIKE_FACTOR,
            duration_days: DEFAULT_SPIKE_DURATION_DAYS,
        }
    }

    pub fn with_spike_factor(mut self, spike_factor: f64) -> Self {
        self.spike_factor = spike_factor;
        self
    }

    pub fn with_duration_days(mut self, duration_days: i64) -> Self {
        self.duration_days = duration_days;
        self
    }

    fn validate(&self) -> DomainResult<()> {
        if !(self.spike_factor.is_finite() && self.spike_factor >= 0.0) {
            return Err(DomainError::validation(
                "spike_factor must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Apply `scenario` to a copy of `table` and return the affected product's metrics.
pub fn simulate_spike(
    table: &InventoryTable,
    scenario: &SpikeScenario,
    policy: &ReorderPolicy,
) -> DomainResult<ProductMetrics> {
    scenario.validate()?;

    let mut what_if = table.copy();
    let product = what_if.find_by_id_mut(scenario.product_id)?;
    product.average_daily_sales *= scenario.spike_factor;

    tracing::debug!(
        product_id = %scenario.product_id,
        spike_factor = scenario.spike_factor,
        duration_days = scenario.duration_days,
        simulated_sales = product.average_daily_sales,
        "demand spike simulated"
    );

    Ok(policy.derive(product))
}
