use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn simulate_spike(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SimulateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let scenario = match body.into_scenario() {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.simulate(&scenario) {
        Ok(m) => (StatusCode::OK, Json(m)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
