//! Inventory reorder signals.
//!
//! Deterministic domain logic over an immutable product table: days of stock
//! remaining, reorder thresholds, reorder quantities and demand-spike
//! simulation. Nothing in here writes back into a loaded table.

pub mod product;
pub mod reorder;
pub mod report;
pub mod simulation;
pub mod table;

pub use product::Product;
pub use reorder::{
    days_remaining, estimated_cost, needs_reorder, reorder_quantity, DaysRemaining,
    ProductMetrics, ReorderPolicy, DEFAULT_BUFFER_DAYS, DEFAULT_PLANNING_WINDOW_DAYS,
};
pub use report::{ReorderItem, ReorderReport};
pub use simulation::{
    simulate_spike, SpikeScenario, DEFAULT_SPIKE_DURATION_DAYS, DEFAULT_SPIKE_FACTOR,
};
pub use table::InventoryTable;
