//! Reorder calculator.
//!
//! Pure functions over a single [`Product`]:
//! - `days_remaining = current_stock / average_daily_sales` (+inf on zero demand)
//! - `needs_reorder = days_remaining < lead_time + buffer_days`
//! - `reorder_qty = trunc(max(min_reorder_qty, sales * window - current_stock))`

use serde::{Serialize, Serializer};

use restock_core::{DomainError, DomainResult};

use crate::product::Product;

/// Safety margin (days) added to the lead time.
pub const DEFAULT_BUFFER_DAYS: f64 = 5.0;

/// Horizon (days) used to size a reorder batch.
pub const DEFAULT_PLANNING_WINDOW_DAYS: f64 = 60.0;

/// Days of stock left at the current demand rate.
///
/// Zero demand means the product never runs out, so this is `+inf`. Negative
/// stock yields negative days.
pub fn days_remaining(product: &Product) -> f64 {
    if product.average_daily_sales == 0.0 {
        return f64::INFINITY;
    }
    product.current_stock / product.average_daily_sales
}

/// Whether stock runs out before a reorder placed now (plus buffer) arrives.
///
/// `+inf` is never below a finite threshold, so zero-demand items never flag.
pub fn needs_reorder(product: &Product, buffer_days: f64) -> bool {
    days_remaining(product) < product.lead_time + buffer_days
}

/// Units to order to cover `planning_window_days` of demand.
///
/// Computed for every product regardless of [`needs_reorder`]. Truncated
/// toward zero, not rounded.
pub fn reorder_quantity(product: &Product, planning_window_days: f64) -> i64 {
    let required_units = product.average_daily_sales * planning_window_days;
    let qty = product
        .min_reorder_qty
        .max(required_units - product.current_stock);
    qty.trunc() as i64
}

/// Cost of placing the reorder for `product`.
pub fn estimated_cost(product: &Product, planning_window_days: f64) -> f64 {
    reorder_quantity(product, planning_window_days) as f64 * product.cost_per_unit
}

/// Policy parameters for the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderPolicy {
    pub buffer_days: f64,
    pub planning_window_days: f64,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            buffer_days: DEFAULT_BUFFER_DAYS,
            planning_window_days: DEFAULT_PLANNING_WINDOW_DAYS,
        }
    }
}

impl ReorderPolicy {
    pub fn new(buffer_days: f64, planning_window_days: f64) -> DomainResult<Self> {
        if !(buffer_days.is_finite() && buffer_days >= 0.0) {
            return Err(DomainError::validation(
                "buffer_days must be a finite non-negative number",
            ));
        }
        if !(planning_window_days.is_finite() && planning_window_days >= 0.0) {
            return Err(DomainError::validation(
                "planning_window_days must be a finite non-negative number",
            ));
        }
        Ok(Self {
            buffer_days,
            planning_window_days,
        })
    }

    pub fn needs_reorder(&self, product: &Product) -> bool {
        needs_reorder(product, self.buffer_days)
    }

    pub fn reorder_quantity(&self, product: &Product) -> i64 {
        reorder_quantity(product, self.planning_window_days)
    }

    pub fn estimated_cost(&self, product: &Product) -> f64 {
        estimated_cost(product, self.planning_window_days)
    }

    /// Derive all metrics for one product into a fresh view.
    pub fn derive(&self, product: &Product) -> ProductMetrics {
        ProductMetrics {
            product: product.clone(),
            days_remaining: DaysRemaining(days_remaining(product)),
            needs_reorder: self.needs_reorder(product),
            reorder_qty: self.reorder_quantity(product),
        }
    }
}

/// Days of stock remaining, possibly infinite.
///
/// JSON has no infinity, so non-finite values serialize as the strings
/// `"Infinity"` / `"-Infinity"` / `"NaN"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DaysRemaining(pub f64);

impl DaysRemaining {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }
}

impl Serialize for DaysRemaining {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() {
            serializer.serialize_f64(v)
        } else if v.is_nan() {
            serializer.serialize_str("NaN")
        } else if v > 0.0 {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }
}

/// A product with its derived columns.
///
/// Built per request and discarded; never stored back into the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetrics {
    #[serde(flatten)]
    pub product: Product,
    pub days_remaining: DaysRemaining,
    pub needs_reorder: bool,
    pub reorder_qty: i64,
}
