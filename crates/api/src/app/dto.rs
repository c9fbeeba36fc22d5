use serde::Deserialize;

use restock_core::{DomainError, DomainResult, ProductId};
use restock_inventory::SpikeScenario;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /simulate`.
///
/// `product_id` is optional at the serde level so a missing id surfaces as a
/// validation error rather than a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub product_id: Option<i64>,
    pub spike_factor: Option<f64>,
    pub duration: Option<i64>,
}

impl SimulateRequest {
    pub fn into_scenario(self) -> DomainResult<SpikeScenario> {
        let product_id = self
            .product_id
            .ok_or_else(|| DomainError::validation("product_id is required"))?;

        let mut scenario = SpikeScenario::new(ProductId::new(product_id));
        if let Some(spike_factor) = self.spike_factor {
            scenario = scenario.with_spike_factor(spike_factor);
        }
        if let Some(duration) = self.duration {
            scenario = scenario.with_duration_days(duration);
        }
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_inventory::{DEFAULT_SPIKE_DURATION_DAYS, DEFAULT_SPIKE_FACTOR};

    #[test]
    fn defaults_fill_missing_fields() {
        let req: SimulateRequest = serde_json::from_str(r#"{"product_id": 4}"#).unwrap();
        let scenario = req.into_scenario().unwrap();

        assert_eq!(scenario.product_id, ProductId::new(4));
        assert_eq!(scenario.spike_factor, DEFAULT_SPIKE_FACTOR);
        assert_eq!(scenario.duration_days, DEFAULT_SPIKE_DURATION_DAYS);
    }

    #[test]
    fn integer_spike_factor_is_accepted() {
        let req: SimulateRequest =
            serde_json::from_str(r#"{"product_id": 1, "spike_factor": 2, "duration": 14}"#).unwrap();
        let scenario = req.into_scenario().unwrap();

        assert_eq!(scenario.spike_factor, 2.0);
        assert_eq!(scenario.duration_days, 14);
    }

    #[test]
    fn missing_product_id_is_a_validation_error() {
        let req: SimulateRequest = serde_json::from_str(r#"{"spike_factor": 2}"#).unwrap();
        let err = req.into_scenario().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
